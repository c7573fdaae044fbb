use serde::{Deserialize, Serialize};
use std::fmt;

pub type EntityId = i64;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    InProgress,
    Completed,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundStatus::InProgress => "In Progress",
            RoundStatus::Completed => "Completed",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub id: EntityId,
    pub hole_number: u32,
    pub par: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_feet: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn hole_count(&self) -> u32 {
        u32::try_from(self.holes.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn hole_by_number(&self, hole_number: u32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.hole_number == hole_number)
    }

    /// Holes in play order, whatever order the server sent them in.
    #[must_use]
    pub fn holes_in_order(&self) -> Vec<&Hole> {
        let mut holes: Vec<&Hole> = self.holes.iter().collect();
        holes.sort_by_key(|h| h.hole_number);
        holes
    }

    #[must_use]
    pub fn par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }
}

/// One player's strokes on one hole. A value of 0 means not yet recorded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub strokes: u32,
    pub hole: Hole,
}

impl Score {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.strokes > 0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl Player {
    #[must_use]
    pub fn score_for_hole(&self, hole_id: EntityId) -> Option<&Score> {
        self.scores.iter().find(|s| s.hole.id == hole_id)
    }

    pub fn score_for_hole_mut(&mut self, hole_id: EntityId) -> Option<&mut Score> {
        self.scores.iter_mut().find(|s| s.hole.id == hole_id)
    }

    /// Strokes minus par, counting only holes that have a recorded score.
    #[must_use]
    pub fn relative_to_par(&self) -> i32 {
        let (strokes, par) = self
            .scores
            .iter()
            .filter(|s| s.is_recorded())
            .fold((0i64, 0i64), |(strokes, par), s| {
                (strokes + i64::from(s.strokes), par + i64::from(s.hole.par))
            });
        i32::try_from(strokes - par).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: EntityId,
    pub course: Course,
    #[serde(default)]
    pub players: Vec<Player>,
    pub status: RoundStatus,
    pub date: String,
}

impl Round {
    #[must_use]
    pub fn player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status == RoundStatus::InProgress
    }

    /// Where scoring should resume: the first hole the first player has not
    /// recorded yet, or the last hole once everything is recorded so the round
    /// can be finished. Finished rounds and rounds nobody plays start at hole 1.
    #[must_use]
    pub fn resume_hole(&self) -> u32 {
        if !self.is_in_progress() {
            return 1;
        }
        let Some(first) = self.players.first() else {
            return 1;
        };
        self.course
            .holes_in_order()
            .into_iter()
            .find(|hole| {
                first
                    .score_for_hole(hole.id)
                    .is_some_and(|s| !s.is_recorded())
            })
            .map_or(self.course.hole_count().max(1), |hole| hole.hole_number)
    }
}
