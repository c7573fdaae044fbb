use rusty_disc::args::{self, CleanArgs, Command};
use rusty_disc::session::Session;
use rusty_disc::view::scorecard::Scorecard;
use rusty_disc::{HttpRoundApi, RoundScorer, StrokeDelta};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_disc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = args::args_checks();
    if let Err(e) = run(&args).await {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}

async fn run(args: &CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let token = resolve_token(args)?;
    let api = HttpRoundApi::new(&args.api_url, token.as_deref(), args.timeout)?;
    let scorer = RoundScorer::new(Arc::new(api));

    match &args.command {
        Command::Show {
            round_id,
            hole,
            json,
        } => {
            scorer.load(*round_id).await?;
            if let Some(target) = hole {
                move_to_hole(&scorer, *target).await;
            }
            let model = scorer.snapshot().await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&model.round)?);
            } else {
                print!("{}", Scorecard(&model));
            }
        }
        Command::Stroke {
            round_id,
            player_id,
            hole_number,
            direction,
        } => {
            scorer.load(*round_id).await?;
            let hole_id = scorer
                .snapshot()
                .await
                .round
                .as_ref()
                .and_then(|r| r.course.hole_by_number(*hole_number))
                .map(|h| h.id)
                .ok_or_else(|| format!("round {round_id} has no hole {hole_number}"))?;
            let delta = StrokeDelta::from(*direction);
            match scorer.adjust_stroke(*player_id, hole_id, delta).await? {
                Some(strokes) => info!(player_id, hole_number, strokes, "stroke recorded"),
                None => {
                    return Err(format!(
                        "player {player_id} has no score on hole {hole_number}"
                    )
                    .into());
                }
            }
            move_to_hole(&scorer, *hole_number).await;
            print!("{}", Scorecard(&scorer.snapshot().await));
        }
        Command::Finish { round_id } => {
            scorer.load(*round_id).await?;
            scorer.finish_round().await?;
            info!(round_id, "round completed");
            print!("{}", Scorecard(&scorer.snapshot().await));
        }
    }
    Ok(())
}

fn resolve_token(args: &CleanArgs) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Some(token) = &args.token {
        return Ok(Some(token.clone()));
    }
    match &args.session_file {
        Some(path) => Ok(Session::load(path)?.bearer_token().map(str::to_string)),
        None => Ok(None),
    }
}

/// Walks the pointer one hole at a time so it stays clamped to the course.
async fn move_to_hole(scorer: &RoundScorer, target: u32) {
    let mut current = scorer.current_hole().await;
    while current < target {
        let next = scorer.advance_hole().await;
        if next == current {
            break;
        }
        current = next;
    }
    while current > target {
        let next = scorer.retreat_hole().await;
        if next == current {
            break;
        }
        current = next;
    }
}
