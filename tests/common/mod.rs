#![allow(dead_code)]

use rusty_disc::model::{Course, EntityId, Hole, Player, Round, RoundStatus, Score};
use rusty_disc::{ApiError, RoundApi};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::oneshot;

/// In-memory stand-in for the scoring server.
#[derive(Default)]
pub struct MockRoundApi {
    rounds: Mutex<HashMap<EntityId, Round>>,
    gates: Mutex<HashMap<EntityId, oneshot::Receiver<()>>>,
    confirmed_override: Mutex<Option<u32>>,
    status_reply: Mutex<Option<RoundStatus>>,
    pub fail_fetch: AtomicBool,
    pub fail_score: AtomicBool,
    pub fail_status: AtomicBool,
    pub fetch_calls: AtomicUsize,
    pub score_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
}

impl MockRoundApi {
    pub fn with_round(round: Round) -> Self {
        let api = Self::default();
        api.put_round(round);
        api
    }

    /// Replaces the server-side copy of a round.
    pub fn put_round(&self, round: Round) {
        self.rounds.lock().unwrap().insert(round.id, round);
    }

    pub fn server_round(&self, round_id: EntityId) -> Option<Round> {
        self.rounds.lock().unwrap().get(&round_id).cloned()
    }

    /// Holds the next score update for `hole_id` until the returned sender fires.
    pub fn gate_hole(&self, hole_id: EntityId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(hole_id, rx);
        tx
    }

    /// Makes the server store and confirm `strokes` regardless of what was sent.
    pub fn confirm_with(&self, strokes: u32) {
        *self.confirmed_override.lock().unwrap() = Some(strokes);
    }

    /// Makes status updates answer with `status` and leave the stored round alone.
    pub fn reply_status_with(&self, status: RoundStatus) {
        *self.status_reply.lock().unwrap() = Some(status);
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_score(&self, fail: bool) {
        self.fail_score.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_status(&self, fail: bool) {
        self.fail_status.store(fail, Ordering::SeqCst);
    }

    pub fn score_calls(&self) -> usize {
        self.score_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RoundApi for MockRoundApi {
    async fn get_round(&self, round_id: EntityId) -> Result<Round, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".into()));
        }
        self.server_round(round_id)
            .ok_or_else(|| ApiError::NotFound(format!("round {round_id}")))
    }

    async fn update_score(
        &self,
        round_id: EntityId,
        player_id: EntityId,
        hole_id: EntityId,
        strokes: u32,
    ) -> Result<u32, ApiError> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(&hole_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.fail_score.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                code: 500,
                message: "score update failed".into(),
            });
        }
        let stored = (*self.confirmed_override.lock().unwrap()).unwrap_or(strokes);
        let mut rounds = self.rounds.lock().unwrap();
        let score = rounds
            .get_mut(&round_id)
            .and_then(|r| r.player_mut(player_id))
            .and_then(|p| p.score_for_hole_mut(hole_id))
            .ok_or_else(|| ApiError::NotFound(format!("score {player_id}/{hole_id}")))?;
        score.strokes = stored;
        Ok(stored)
    }

    async fn update_round_status(
        &self,
        round_id: EntityId,
        status: RoundStatus,
    ) -> Result<RoundStatus, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_status.load(Ordering::SeqCst) {
            return Err(ApiError::Network("timed out".into()));
        }
        if let Some(reply) = *self.status_reply.lock().unwrap() {
            return Ok(reply);
        }
        let mut rounds = self.rounds.lock().unwrap();
        let round = rounds
            .get_mut(&round_id)
            .ok_or_else(|| ApiError::NotFound(format!("round {round_id}")))?;
        round.status = status;
        Ok(status)
    }
}

pub const ROUND_ID: EntityId = 42;

/// Hole ids are `100 + hole number`; player ids are `1..=n` in the order given.
pub fn build_round(pars: &[u32], players: &[(&str, Vec<u32>)]) -> Round {
    let holes: Vec<Hole> = pars
        .iter()
        .enumerate()
        .map(|(i, par)| {
            let number = u32::try_from(i).unwrap() + 1;
            Hole {
                id: 100 + i64::from(number),
                hole_number: number,
                par: *par,
                length_feet: Some(250 + 10 * number),
            }
        })
        .collect();

    let players = players
        .iter()
        .enumerate()
        .map(|(i, (name, strokes))| Player {
            id: i64::try_from(i).unwrap() + 1,
            name: (*name).to_string(),
            scores: holes
                .iter()
                .zip(strokes.iter())
                .map(|(hole, s)| Score {
                    id: Some(hole.id * 10 + i64::try_from(i).unwrap()),
                    strokes: *s,
                    hole: hole.clone(),
                })
                .collect(),
        })
        .collect();

    Round {
        id: ROUND_ID,
        course: Course {
            id: 7,
            name: "Maple Hill".into(),
            location: "Leicester, MA".into(),
            holes,
        },
        players,
        status: RoundStatus::InProgress,
        date: "2025-03-01T09:30:00Z".into(),
    }
}

pub fn hole_id(number: u32) -> EntityId {
    100 + i64::from(number)
}
