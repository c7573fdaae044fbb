pub mod round;
pub mod score_display;

pub use round::{Course, EntityId, Hole, Player, Round, RoundStatus, Score};
pub use score_display::ScoreDisplay;
