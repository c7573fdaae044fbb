pub mod client;

use crate::error::ApiError;
use crate::model::{EntityId, Round, RoundStatus};
use async_trait::async_trait;

pub use client::HttpRoundApi;

/// The remote system of record for rounds.
///
/// The scorer only ever talks to the server through this trait, so tests and
/// alternative transports can stand in for the HTTP client.
#[async_trait]
pub trait RoundApi: Send + Sync {
    /// Full snapshot of one round. `ApiError::NotFound` when no round has that id.
    async fn get_round(&self, round_id: EntityId) -> Result<Round, ApiError>;

    /// Sets one player's strokes on one hole and returns the value the server stored.
    async fn update_score(
        &self,
        round_id: EntityId,
        player_id: EntityId,
        hole_id: EntityId,
        strokes: u32,
    ) -> Result<u32, ApiError>;

    /// Sets the round status and returns the status the server stored.
    async fn update_round_status(
        &self,
        round_id: EntityId,
        status: RoundStatus,
    ) -> Result<RoundStatus, ApiError>;
}
