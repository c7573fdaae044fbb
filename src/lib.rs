pub mod api;
pub mod args;
pub mod error;
pub mod model;
pub mod session;

pub mod mvu {
    pub mod round;
    pub mod runtime;
}
pub mod view {
    pub mod scorecard;
}

pub use api::{HttpRoundApi, RoundApi};
pub use error::{ApiError, ScorerError};
pub use mvu::round::{OpState, RoundModel, StrokeDelta};
pub use mvu::runtime::RoundScorer;
