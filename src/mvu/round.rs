use crate::error::{ApiError, ScorerError};
use crate::model::{EntityId, Round, RoundStatus};
use tracing::{debug, info, warn};

mod round_effects;

pub use round_effects::run_effect;

/// Lifecycle of one kind of remote operation, as a caller should render it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    Loading,
    Error(ScorerError),
}

impl OpState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeDelta {
    Decrement,
    Increment,
}

impl StrokeDelta {
    /// `max(0, strokes + delta)`.
    #[must_use]
    pub fn apply(self, strokes: u32) -> u32 {
        match self {
            Self::Decrement => strokes.saturating_sub(1),
            Self::Increment => strokes.saturating_add(1),
        }
    }
}

/// Local copy of one round plus the state only the client cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundModel {
    pub round: Option<Round>,
    pub current_hole: u32,
    pub load_state: OpState,
    pub stroke_state: OpState,
    pub finish_state: OpState,
    pending_strokes: usize,
}

impl Default for RoundModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: None,
            current_hole: 1,
            load_state: OpState::Idle,
            stroke_state: OpState::Idle,
            finish_state: OpState::Idle,
            pending_strokes: 0,
        }
    }

    #[must_use]
    pub fn hole_count(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.course.hole_count())
    }

    #[must_use]
    pub fn status(&self) -> Option<RoundStatus> {
        self.round.as_ref().map(|r| r.status)
    }

    #[must_use]
    pub fn strokes(&self, player_id: EntityId, hole_id: EntityId) -> Option<u32> {
        self.round
            .as_ref()?
            .player(player_id)?
            .score_for_hole(hole_id)
            .map(|s| s.strokes)
    }

    #[must_use]
    pub fn total_relative_to_par(&self, player_id: EntityId) -> i32 {
        self.round
            .as_ref()
            .and_then(|r| r.player(player_id))
            .map_or(0, crate::model::Player::relative_to_par)
    }

    #[must_use]
    pub fn course_par(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.course.par())
    }

    fn finish_stroke(&mut self, failure: Option<ScorerError>) {
        self.pending_strokes = self.pending_strokes.saturating_sub(1);
        self.stroke_state = match failure {
            Some(e) => OpState::Error(e),
            None if self.pending_strokes > 0 => OpState::Loading,
            None => OpState::Idle,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    LoadRequested(EntityId),
    RoundLoaded(Round),
    LoadFailed(ApiError),
    StrokeRequested {
        player_id: EntityId,
        hole_id: EntityId,
        delta: StrokeDelta,
    },
    StrokeConfirmed {
        player_id: EntityId,
        hole_id: EntityId,
        strokes: u32,
    },
    StrokeFailed(ApiError),
    FinishRequested,
    StatusConfirmed(RoundStatus),
    FinishFailed(ApiError),
    AdvanceHole,
    RetreatHole,
}

impl Msg {
    /// The error a caller should see if this message reports a failed effect.
    #[must_use]
    pub fn failure(&self) -> Option<ScorerError> {
        match self {
            Msg::LoadFailed(e) => Some(ScorerError::Fetch(e.clone())),
            Msg::StrokeFailed(e) | Msg::FinishFailed(e) => Some(ScorerError::Update(e.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRound(EntityId),
    PatchScore {
        round_id: EntityId,
        player_id: EntityId,
        hole_id: EntityId,
        strokes: u32,
    },
    PutStatus {
        round_id: EntityId,
        status: RoundStatus,
    },
}

/// Applies `msg` to `model` and returns the remote calls it asks for.
///
/// Nothing here talks to the network; stroke and status changes land in the
/// model only when their confirmation message arrives.
pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::LoadRequested(round_id) => {
            model.load_state = OpState::Loading;
            vec![Effect::FetchRound(round_id)]
        }
        Msg::RoundLoaded(round) => {
            info!(round_id = round.id, status = ?round.status, "round loaded");
            model.current_hole = round.resume_hole();
            model.round = Some(round);
            model.load_state = OpState::Idle;
            vec![]
        }
        Msg::LoadFailed(e) => {
            warn!(error = %e, "round load failed");
            model.load_state = OpState::Error(ScorerError::Fetch(e));
            vec![]
        }
        Msg::StrokeRequested {
            player_id,
            hole_id,
            delta,
        } => {
            let Some(round_id) = model.round.as_ref().map(|r| r.id) else {
                return vec![];
            };
            let Some(current) = model.strokes(player_id, hole_id) else {
                debug!(player_id, hole_id, "no score cell for player and hole");
                return vec![];
            };
            model.pending_strokes += 1;
            model.stroke_state = OpState::Loading;
            vec![Effect::PatchScore {
                round_id,
                player_id,
                hole_id,
                strokes: delta.apply(current),
            }]
        }
        Msg::StrokeConfirmed {
            player_id,
            hole_id,
            strokes,
        } => {
            match model
                .round
                .as_mut()
                .and_then(|r| r.player_mut(player_id))
                .and_then(|p| p.score_for_hole_mut(hole_id))
            {
                Some(score) => score.strokes = strokes,
                None => debug!(player_id, hole_id, "dropping confirmation for missing cell"),
            }
            model.finish_stroke(None);
            vec![]
        }
        Msg::StrokeFailed(e) => {
            warn!(error = %e, "stroke update failed");
            model.finish_stroke(Some(ScorerError::Update(e)));
            vec![]
        }
        Msg::FinishRequested => match model.round.as_ref() {
            Some(round) if round.is_in_progress() => {
                model.finish_state = OpState::Loading;
                vec![Effect::PutStatus {
                    round_id: round.id,
                    status: RoundStatus::Completed,
                }]
            }
            _ => vec![],
        },
        Msg::StatusConfirmed(status) => {
            if status == RoundStatus::Completed {
                if let Some(round) = model.round.as_mut() {
                    round.status = RoundStatus::Completed;
                }
            }
            model.finish_state = OpState::Idle;
            vec![]
        }
        Msg::FinishFailed(e) => {
            warn!(error = %e, "finishing round failed");
            model.finish_state = OpState::Error(ScorerError::Update(e));
            vec![]
        }
        Msg::AdvanceHole => {
            if model.current_hole < model.hole_count() {
                model.current_hole += 1;
            }
            vec![]
        }
        Msg::RetreatHole => {
            if model.current_hole > 1 {
                model.current_hole -= 1;
            }
            vec![]
        }
    }
}
