use crate::api::RoundApi;
use crate::error::ApiError;
use crate::mvu::round::{Effect, Msg};
use tracing::debug;

/// Performs one remote call and turns its outcome into the message `update` expects.
pub async fn run_effect(effect: Effect, api: &dyn RoundApi) -> Msg {
    debug!(?effect, "effect start");
    let msg = match effect {
        Effect::FetchRound(round_id) => match api.get_round(round_id).await {
            Ok(round) => Msg::RoundLoaded(round),
            Err(e) => Msg::LoadFailed(e),
        },
        Effect::PatchScore {
            round_id,
            player_id,
            hole_id,
            strokes,
        } => match api.update_score(round_id, player_id, hole_id, strokes).await {
            Ok(confirmed) => Msg::StrokeConfirmed {
                player_id,
                hole_id,
                strokes: confirmed,
            },
            Err(e) => Msg::StrokeFailed(e),
        },
        Effect::PutStatus { round_id, status } => {
            match api.update_round_status(round_id, status).await {
                Ok(confirmed) if confirmed == status => Msg::StatusConfirmed(confirmed),
                Ok(confirmed) => Msg::FinishFailed(ApiError::Unconfirmed(format!(
                    "round {round_id} asked to be {status}, server kept it {confirmed}"
                ))),
                Err(e) => Msg::FinishFailed(e),
            }
        }
    };
    debug!(?msg, "effect done");
    msg
}
