//! When steps for chore board BDD scenarios.

use super::world::{ChoreBoardWorld, run_async};
use choreboard::chore::services::NewChore;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#""{name}" creates a chore titled "{title}""#)]
fn member_creates_chore(
    world: &mut ChoreBoardWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let credential = world.credential_for(&name)?;
    match run_async(world.board.create_chore(&credential, NewChore::new(title))) {
        Ok(created) => {
            world.chore = Some(created);
            world.last_create_error = None;
        }
        Err(err) => world.last_create_error = Some(err),
    }
    Ok(())
}

#[when(r#""{name}" takes the chore"#)]
fn member_takes_chore(world: &mut ChoreBoardWorld, name: String) -> Result<(), eyre::Report> {
    let credential = world.credential_for(&name)?;
    let task_id = world.chore_id()?;
    run_async(world.board.take_chore(&credential, task_id)).wrap_err("take chore")?;
    Ok(())
}

#[when(r#""{name}" completes the chore"#)]
fn member_completes_chore(world: &mut ChoreBoardWorld, name: String) -> Result<(), eyre::Report> {
    let credential = world.credential_for(&name)?;
    let task_id = world.chore_id()?;
    run_async(world.board.complete_chore(&credential, task_id)).wrap_err("complete chore")?;
    Ok(())
}

#[when(r#""{name}" lists the active board"#)]
fn member_lists_active_board(
    world: &mut ChoreBoardWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let credential = world.credential_for(&name)?;
    let listing = run_async(world.board.list_active(&credential)).wrap_err("list active board")?;
    world.last_board = Some(listing);
    Ok(())
}
