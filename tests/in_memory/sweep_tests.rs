//! Read-triggered sweep behaviour through the board facade.

use super::helpers::{BoardContext, context};
use choreboard::chore::{
    domain::{HistoryAction, TaskStatus},
    ports::TaskStore,
    services::{DisplayStatus, NewChore},
};
use choreboard::family::domain::MemberRole;
use eyre::{ensure, eyre};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_taken_chore_moves_from_active_to_history(
    context: BoardContext,
) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(
            &parent,
            NewChore {
                title: "Walk the dog".to_owned(),
                description: None,
                due_date: Some(chrono::Utc::now() - chrono::Duration::days(1)),
                reward_points: None,
                assignee_member_id: None,
            },
        )
        .await?;
    context.board.take_chore(&parent, created.id()).await?;

    let active = context.board.list_active(&parent).await?;
    ensure!(
        active.tasks.iter().all(|entry| entry.task.id() != created.id()),
        "overdue chore survived on the active board"
    );

    let history = context.board.list_history(&parent).await?;
    let entry = history
        .tasks
        .iter()
        .find(|entry| entry.task.id() == created.id())
        .ok_or_else(|| eyre!("swept chore missing from history"))?;
    ensure!(entry.task.status() == TaskStatus::Failed, "chore not failed");

    let system_failure = entry
        .timeline
        .iter()
        .find(|event| event.action() == HistoryAction::Failed)
        .ok_or_else(|| eyre!("missing failed event"))?;
    ensure!(
        system_failure.user_id().is_none(),
        "sweep failure carries an actor"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unassigned_overdue_chores_surface_only_as_derived_missed(
    context: BoardContext,
) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(
            &parent,
            NewChore {
                title: "Clean the windows".to_owned(),
                description: None,
                due_date: Some(chrono::Utc::now() - chrono::Duration::days(2)),
                reward_points: None,
                assignee_member_id: None,
            },
        )
        .await?;

    // The sweep leaves unassigned chores alone even when overdue.
    let stored = context
        .tasks
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre!("chore missing"))?;
    ensure!(
        stored.status() == TaskStatus::Unassigned,
        "unassigned chore was swept"
    );

    let overview = context.board.list_history_overview(&parent).await?;
    let row = overview
        .tasks
        .iter()
        .find(|row| row.task.id() == created.id())
        .ok_or_else(|| eyre!("overdue chore missing from the overview"))?;
    ensure!(
        row.display_status == DisplayStatus::Missed,
        "overview did not derive missed"
    );

    let timeline_view = context.board.list_history(&parent).await?;
    ensure!(
        timeline_view
            .tasks
            .iter()
            .all(|entry| entry.task.id() != created.id()),
        "still-active chore leaked into the timeline history view"
    );
    Ok(())
}
