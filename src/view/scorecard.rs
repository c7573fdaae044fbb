use crate::model::score_display::relative_label;
use crate::model::{Round, ScoreDisplay};
use crate::mvu::round::RoundModel;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

const CELL_WIDTH: usize = 5;

/// Round dates come back either as plain dates or as timestamps.
#[must_use]
pub fn format_round_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%a, %b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Text rendering of a round: header, current hole, and the full grid.
pub struct Scorecard<'a>(pub &'a RoundModel);

impl fmt::Display for Scorecard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;
        let Some(round) = model.round.as_ref() else {
            return writeln!(f, "Round not loaded");
        };
        write_header(f, round)?;
        if round.is_in_progress() {
            write_current_hole(f, round, model.current_hole)?;
        }
        write_grid(f, round, model.current_hole)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, round: &Round) -> fmt::Result {
    let course = &round.course;
    if course.location.is_empty() {
        writeln!(f, "{}", course.name)?;
    } else {
        writeln!(f, "{} ({})", course.name, course.location)?;
    }
    writeln!(f, "{}", format_round_date(&round.date))?;
    writeln!(
        f,
        "Holes: {}   Par: {}   Status: {}",
        course.hole_count(),
        course.par(),
        round.status
    )?;
    writeln!(f)
}

fn write_current_hole(f: &mut fmt::Formatter<'_>, round: &Round, current: u32) -> fmt::Result {
    let Some(hole) = round.course.hole_by_number(current) else {
        return Ok(());
    };
    write!(
        f,
        "Hole {} of {} - Par {}",
        hole.hole_number,
        round.course.hole_count(),
        hole.par
    )?;
    match hole.length_feet {
        Some(feet) => writeln!(f, " - {feet} ft")?,
        None => writeln!(f)?,
    }
    let width = name_width(round);
    for player in &round.players {
        let strokes = player.score_for_hole(hole.id).map_or(0, |s| s.strokes);
        write!(f, "  {:<width$} {strokes:>3}", player.name)?;
        match ScoreDisplay::for_hole(strokes, hole.par) {
            Some(display) => writeln!(f, "  {display}")?,
            None => writeln!(f)?,
        }
    }
    writeln!(f)
}

fn write_grid(f: &mut fmt::Formatter<'_>, round: &Round, current: u32) -> fmt::Result {
    let holes = round.course.holes_in_order();
    let width = name_width(round);

    write!(f, "{:<width$}", "Player")?;
    for hole in &holes {
        let label = if hole.hole_number == current && round.is_in_progress() {
            format!("[{}]", hole.hole_number)
        } else {
            hole.hole_number.to_string()
        };
        write!(f, "{label:>CELL_WIDTH$}")?;
    }
    writeln!(f, "{:>CELL_WIDTH$}", "Tot")?;

    write!(f, "{:<width$}", "Par")?;
    for hole in &holes {
        write!(f, "{:>CELL_WIDTH$}", hole.par)?;
    }
    writeln!(f, "{:>CELL_WIDTH$}", round.course.par())?;

    for player in &round.players {
        write!(f, "{:<width$}", player.name)?;
        for hole in &holes {
            let cell = match player.score_for_hole(hole.id) {
                Some(score) if score.is_recorded() => score.strokes.to_string(),
                _ => "-".to_string(),
            };
            write!(f, "{cell:>CELL_WIDTH$}")?;
        }
        writeln!(f, "{:>CELL_WIDTH$}", relative_label(player.relative_to_par()))?;
    }
    Ok(())
}

fn name_width(round: &Round) -> usize {
    round
        .players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len())
        + 1
}
