//! Then steps for chore board BDD scenarios.

use super::world::{ChoreBoardWorld, run_async};
use choreboard::chore::{
    domain::TaskStatus,
    ports::{AssignmentStore, HistoryLog, TaskStore},
    services::BoardError,
};
use rstest_bdd_macros::then;

#[then("the creation fails with a validation error")]
fn creation_fails_with_validation_error(world: &ChoreBoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_create_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("creation unexpectedly succeeded"))?;

    if !matches!(err, BoardError::Validation(_)) {
        return Err(eyre::eyre!("expected validation error, got {err:?}"));
    }
    if err.http_status() != 400 {
        return Err(eyre::eyre!("expected status 400, got {}", err.http_status()));
    }
    Ok(())
}

#[then(r#"the chore status is "{status}""#)]
fn chore_status_is(world: &ChoreBoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task_id = world.chore_id()?;
    let stored = run_async(world.tasks.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("chore missing from the store"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the chore has {count:usize} assignment rows")]
fn chore_has_assignment_rows(world: &ChoreBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let task_id = world.chore_id()?;
    let rows = run_async(world.assignments.list_for_tasks(&[task_id]))?;

    if rows.len() != count {
        return Err(eyre::eyre!(
            "expected {count} assignment rows, found {}",
            rows.len()
        ));
    }
    Ok(())
}

#[then(r#"the latest history action is "{action}""#)]
fn latest_history_action_is(world: &ChoreBoardWorld, action: String) -> Result<(), eyre::Report> {
    let task_id = world.chore_id()?;
    let events = run_async(world.history.for_task(task_id))?;
    let last = events
        .last()
        .ok_or_else(|| eyre::eyre!("no history events recorded"))?;

    let tag = last.action().to_string();
    if tag != action {
        return Err(eyre::eyre!("expected action {action}, found {tag}"));
    }
    Ok(())
}

#[then("the active board does not include the chore")]
fn active_board_excludes_chore(world: &ChoreBoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.chore_id()?;
    let listing = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the active board was never listed"))?;

    if listing.tasks.iter().any(|entry| entry.task.id() == task_id) {
        return Err(eyre::eyre!("chore still present on the active board"));
    }
    Ok(())
}
