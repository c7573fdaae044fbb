use crate::api::RoundApi;
use crate::error::ScorerError;
use crate::model::EntityId;
use crate::mvu::round::{Msg, RoundModel, StrokeDelta, run_effect, update};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps one round in sync with the server.
///
/// Every method takes `&self` so several requests can be in flight at once.
/// The model lock is held only while `update` runs, never across a remote
/// call, which means results land in the order they complete.
pub struct RoundScorer {
    api: Arc<dyn RoundApi>,
    model: RwLock<RoundModel>,
}

impl RoundScorer {
    #[must_use]
    pub fn new(api: Arc<dyn RoundApi>) -> Self {
        Self {
            api,
            model: RwLock::new(RoundModel::new()),
        }
    }

    /// Seeds the loop with `msg` and drains the effects it produces.
    ///
    /// Returns the last result message applied, if any effect ran.
    ///
    /// # Errors
    ///
    /// Returns the `ScorerError` of the first effect that fails. The failure
    /// is recorded in the model before returning.
    async fn dispatch(&self, msg: Msg) -> Result<Option<Msg>, ScorerError> {
        let mut effects = update(&mut *self.model.write().await, msg);
        let mut last = None;
        while let Some(effect) = effects.pop() {
            let msg = run_effect(effect, self.api.as_ref()).await;
            let failure = msg.failure();
            let next = update(&mut *self.model.write().await, msg.clone());
            if let Some(e) = failure {
                return Err(e);
            }
            effects.extend(next);
            last = Some(msg);
        }
        Ok(last)
    }

    /// Replaces all local state with the server's snapshot of `round_id`.
    ///
    /// # Errors
    ///
    /// `ScorerError::Fetch` if the round cannot be fetched; the previous state is kept.
    pub async fn load(&self, round_id: EntityId) -> Result<(), ScorerError> {
        self.dispatch(Msg::LoadRequested(round_id)).await.map(|_| ())
    }

    /// Moves one cell by one stroke and applies the server-confirmed value.
    ///
    /// Returns `None` without calling the server when the round has no score
    /// for that player and hole.
    ///
    /// # Errors
    ///
    /// `ScorerError::Update` if the server rejects the change; local state is untouched.
    pub async fn adjust_stroke(
        &self,
        player_id: EntityId,
        hole_id: EntityId,
        delta: StrokeDelta,
    ) -> Result<Option<u32>, ScorerError> {
        let msg = Msg::StrokeRequested {
            player_id,
            hole_id,
            delta,
        };
        match self.dispatch(msg).await? {
            Some(Msg::StrokeConfirmed { strokes, .. }) => Ok(Some(strokes)),
            _ => Ok(None),
        }
    }

    /// # Errors
    ///
    /// `ScorerError::Update` if the server rejects the change; the round stays in progress.
    pub async fn finish_round(&self) -> Result<(), ScorerError> {
        self.dispatch(Msg::FinishRequested).await.map(|_| ())
    }

    pub async fn advance_hole(&self) -> u32 {
        let mut model = self.model.write().await;
        update(&mut model, Msg::AdvanceHole);
        model.current_hole
    }

    pub async fn retreat_hole(&self) -> u32 {
        let mut model = self.model.write().await;
        update(&mut model, Msg::RetreatHole);
        model.current_hole
    }

    pub async fn total_relative_to_par(&self, player_id: EntityId) -> i32 {
        self.model.read().await.total_relative_to_par(player_id)
    }

    pub async fn course_par(&self) -> u32 {
        self.model.read().await.course_par()
    }

    pub async fn current_hole(&self) -> u32 {
        self.model.read().await.current_hole
    }

    pub async fn snapshot(&self) -> RoundModel {
        self.model.read().await.clone()
    }
}
