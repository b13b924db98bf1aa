//! End-to-end board operation tests over the in-memory adapters.

use super::helpers::{BoardContext, context};
use choreboard::chore::{
    domain::TaskStatus,
    ports::{AssignmentStore, TaskStore},
    services::{BoardError, NewChore},
};
use choreboard::family::domain::{MemberRole, SessionCredential};
use eyre::{ensure, eyre};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_walkthrough(context: BoardContext) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let child = context.sign_in("Ola", MemberRole::Child)?;

    let created = context
        .board
        .create_chore(
            &parent,
            NewChore {
                title: "Wash the dishes".to_owned(),
                description: Some("After dinner".to_owned()),
                due_date: Some(chrono::Utc::now() + chrono::Duration::days(1)),
                reward_points: Some(20),
                assignee_member_id: None,
            },
        )
        .await?;
    ensure!(created.status() == TaskStatus::Unassigned, "fresh chore not unassigned");

    context.board.take_chore(&child, created.id()).await?;

    let active = context.board.list_active(&parent).await?;
    let entry = active
        .tasks
        .iter()
        .find(|entry| entry.task.id() == created.id())
        .ok_or_else(|| eyre!("taken chore missing from the active board"))?;
    ensure!(entry.task.status() == TaskStatus::Assigned, "status not assigned");
    ensure!(entry.assignees.len() == 1, "assignee missing from decoration");
    let assignee = entry
        .assignees
        .first()
        .ok_or_else(|| eyre!("missing assignee entry"))?;
    let profile = assignee
        .member
        .as_ref()
        .ok_or_else(|| eyre!("assignee lost its member profile"))?;
    ensure!(profile.name == "Ola", "wrong member decorated");

    context.board.complete_chore(&child, created.id()).await?;

    let rows = context.assignments.list_for_tasks(&[created.id()]).await?;
    ensure!(
        rows.iter().all(|row| row.completed_at().is_some()),
        "completion did not stamp the assignment rows"
    );

    let stored = context
        .tasks
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre!("chore missing"))?;
    ensure!(stored.status() == TaskStatus::Done, "chore not done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_and_family_checks_guard_every_operation(
    context: BoardContext,
) -> eyre::Result<()> {
    let stranger = SessionCredential::new("no-such-session");

    let listing = context.board.list_active(&stranger).await;
    ensure!(
        matches!(listing, Err(BoardError::NoSession)),
        "listing accepted an unknown credential"
    );

    let creation = context
        .board
        .create_chore(&stranger, NewChore::new("Anything"))
        .await;
    let Err(err) = creation else {
        return Err(eyre!("creation accepted an unknown credential"));
    };
    ensure!(err.http_status() == 401, "wrong status for missing session");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_overwrites_permit_backward_moves(context: BoardContext) -> eyre::Result<()> {
    let parent = context.sign_in("Anna", MemberRole::Parent)?;
    let created = context
        .board
        .create_chore(&parent, NewChore::new("Tidy the shed"))
        .await?;

    context.board.complete_chore(&parent, created.id()).await?;
    let ack = context
        .board
        .set_chore_status(&parent, created.id(), "unassigned")
        .await?;
    ensure!(
        ack.message == "status set to unassigned",
        "unexpected ack message: {}",
        ack.message
    );

    let stored = context
        .tasks
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre!("chore missing"))?;
    ensure!(
        stored.status() == TaskStatus::Unassigned,
        "backward overwrite was not applied"
    );
    Ok(())
}
