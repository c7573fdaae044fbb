mod common;

use common::{MockRoundApi, ROUND_ID, build_round};
use rusty_disc::model::RoundStatus;
use rusty_disc::{ApiError, OpState, RoundScorer, ScorerError};
use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test3_hole_pointer_is_clamped() -> Result<(), Box<dyn Error>> {
    let api = Arc::new(MockRoundApi::with_round(build_round(
        &[3, 3, 3],
        &[("Ada", vec![0, 0, 0])],
    )));
    let scorer = RoundScorer::new(api.clone());
    scorer.load(ROUND_ID).await?;

    assert_eq!(scorer.retreat_hole().await, 1);
    assert_eq!(scorer.advance_hole().await, 2);
    assert_eq!(scorer.advance_hole().await, 3);
    assert_eq!(scorer.advance_hole().await, 3);
    assert_eq!(scorer.retreat_hole().await, 2);

    // navigation never reaches the server
    assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.score_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test3_pointer_without_round_stays_put() {
    let scorer = RoundScorer::new(Arc::new(MockRoundApi::default()));
    assert_eq!(scorer.advance_hole().await, 1);
    assert_eq!(scorer.retreat_hole().await, 1);
    assert_eq!(scorer.course_par().await, 0);
}

#[tokio::test]
async fn test3_finish_round_flips_status_on_confirmation() -> Result<(), Box<dyn Error>> {
    let api = Arc::new(MockRoundApi::with_round(build_round(
        &[3, 3],
        &[("Ada", vec![3, 3])],
    )));
    let scorer = RoundScorer::new(api.clone());
    scorer.load(ROUND_ID).await?;

    scorer.finish_round().await?;

    let model = scorer.snapshot().await;
    assert_eq!(model.status(), Some(RoundStatus::Completed));
    assert_eq!(model.finish_state, OpState::Idle);
    assert_eq!(
        api.server_round(ROUND_ID).map(|r| r.status),
        Some(RoundStatus::Completed)
    );

    // a second finish has nothing left to do
    scorer.finish_round().await?;
    assert_eq!(api.status_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test3_failed_finish_keeps_round_in_progress() -> Result<(), Box<dyn Error>> {
    let api = Arc::new(MockRoundApi::with_round(build_round(
        &[3, 3],
        &[("Ada", vec![3, 3])],
    )));
    let scorer = RoundScorer::new(api.clone());
    scorer.load(ROUND_ID).await?;

    api.set_fail_status(true);
    let err = scorer.finish_round().await.unwrap_err();

    assert_eq!(err, ScorerError::Update(ApiError::Network("timed out".into())));
    let model = scorer.snapshot().await;
    assert_eq!(model.status(), Some(RoundStatus::InProgress));
    assert_eq!(model.finish_state, OpState::Error(err));

    api.set_fail_status(false);
    scorer.finish_round().await?;
    assert_eq!(scorer.snapshot().await.status(), Some(RoundStatus::Completed));
    Ok(())
}

#[tokio::test]
async fn test3_finish_not_confirmed_by_server_is_an_error() -> Result<(), Box<dyn Error>> {
    let api = Arc::new(MockRoundApi::with_round(build_round(
        &[3, 3],
        &[("Ada", vec![3, 3])],
    )));
    let scorer = RoundScorer::new(api.clone());
    scorer.load(ROUND_ID).await?;

    api.reply_status_with(RoundStatus::InProgress);
    let err = scorer.finish_round().await.unwrap_err();

    assert!(matches!(err, ScorerError::Update(ApiError::Unconfirmed(_))));
    let model = scorer.snapshot().await;
    assert_eq!(model.status(), Some(RoundStatus::InProgress));
    assert_eq!(model.finish_state, OpState::Error(err));
    assert_eq!(api.status_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test3_finish_without_round_does_nothing() -> Result<(), Box<dyn Error>> {
    let api = Arc::new(MockRoundApi::default());
    let scorer = RoundScorer::new(api.clone());
    scorer.finish_round().await?;
    assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
    Ok(())
}
