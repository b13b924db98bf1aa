//! Audit trail ordering and action tagging through the board facade.

use super::helpers::{BoardContext, context};
use choreboard::chore::{ports::HistoryLog, services::NewChore};
use choreboard::family::domain::MemberRole;
use eyre::{ensure, eyre};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timeline_records_every_operation_in_order(context: BoardContext) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(&parent, NewChore::new("Bake a cake"))
        .await?;

    context.board.take_chore(&parent, created.id()).await?;
    context.board.complete_chore(&parent, created.id()).await?;
    context
        .board
        .set_chore_status(&parent, created.id(), "verified")
        .await?;

    let timeline = context.board.chore_timeline(created.id()).await?;
    let tags: Vec<String> = timeline
        .iter()
        .map(|event| event.action().to_string())
        .collect();
    ensure!(
        tags == vec![
            "created".to_owned(),
            "taken".to_owned(),
            "completed".to_owned(),
            "status:verified".to_owned(),
        ],
        "unexpected timeline tags: {tags:?}"
    );

    ensure!(
        timeline.windows(2).all(|pair| match pair {
            [earlier, later] => earlier.created_at() <= later.created_at(),
            _ => true,
        }),
        "timeline not in non-decreasing timestamp order"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manual_failure_is_distinguished_from_the_sweep(
    context: BoardContext,
) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(&parent, NewChore::new("Repot the plants"))
        .await?;

    context.board.fail_chore(&parent, created.id()).await?;

    // The log itself agrees with the board's timeline read.
    let timeline = context.history.for_task(created.id()).await?;
    let failure = timeline
        .last()
        .ok_or_else(|| eyre!("missing failure event"))?;
    ensure!(
        failure.action().to_string() == "failed_manual",
        "manual failure not tagged failed_manual"
    );
    ensure!(
        failure.user_id().is_some(),
        "manual failure lost its actor attribution"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn double_completion_leaves_two_audit_events(context: BoardContext) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(&parent, NewChore::new("Sweep the chimney"))
        .await?;

    context.board.complete_chore(&parent, created.id()).await?;
    context.board.complete_chore(&parent, created.id()).await?;

    let completions = context
        .board
        .chore_timeline(created.id())
        .await?
        .into_iter()
        .filter(|event| event.action().to_string() == "completed")
        .count();
    ensure!(
        completions == 2,
        "expected two completed events, found {completions}"
    );
    Ok(())
}
