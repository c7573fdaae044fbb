use std::fmt;

/// How a single hole score reads against par.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDisplay {
    Ace,
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    /// Anything worse than a triple.
    Other,
}

impl ScoreDisplay {
    /// Classifies `strokes` on a hole of `par`. Unrecorded (0) holes have no
    /// classification.
    #[must_use]
    pub fn for_hole(strokes: u32, par: u32) -> Option<Self> {
        if strokes == 0 {
            return None;
        }
        if strokes == 1 {
            return Some(Self::Ace);
        }
        let diff = i64::from(strokes) - i64::from(par);
        Some(match diff {
            i64::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::Other,
        })
    }
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreDisplay::Ace => "Ace",
            ScoreDisplay::Condor => "Condor",
            ScoreDisplay::Albatross => "Albatross",
            ScoreDisplay::Eagle => "Eagle",
            ScoreDisplay::Birdie => "Birdie",
            ScoreDisplay::Par => "Par",
            ScoreDisplay::Bogey => "Bogey",
            ScoreDisplay::DoubleBogey => "Double Bogey",
            ScoreDisplay::TripleBogey => "Triple Bogey",
            ScoreDisplay::Other => "Over",
        };
        write!(f, "{s}")
    }
}

/// Formats a relative-to-par total the way a scorecard shows it: `E`, `+2`, `-1`.
#[must_use]
pub fn relative_label(relative: i32) -> String {
    match relative {
        0 => "E".to_string(),
        r if r > 0 => format!("+{r}"),
        r => r.to_string(),
    }
}
