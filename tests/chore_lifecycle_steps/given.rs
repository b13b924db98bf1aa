//! Given steps for chore board BDD scenarios.

use super::world::{ChoreBoardWorld, run_async};
use choreboard::chore::services::NewChore;
use choreboard::family::domain::MemberRole;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a family with a signed-in parent "{name}""#)]
fn family_with_parent(world: &mut ChoreBoardWorld, name: String) -> Result<(), eyre::Report> {
    world.sign_in(&name, MemberRole::Parent)
}

#[given(r#"a signed-in child "{name}""#)]
fn signed_in_child(world: &mut ChoreBoardWorld, name: String) -> Result<(), eyre::Report> {
    world.sign_in(&name, MemberRole::Child)
}

#[given(r#"an unassigned chore "{title}""#)]
fn unassigned_chore(world: &mut ChoreBoardWorld, title: String) -> Result<(), eyre::Report> {
    let credential = world
        .credentials
        .values()
        .next()
        .cloned()
        .ok_or_else(|| eyre::eyre!("no signed-in member to create the chore"))?;

    let created = run_async(world.board.create_chore(&credential, NewChore::new(title)))
        .wrap_err("create chore in scenario setup")?;
    world.chore = Some(created);
    Ok(())
}

#[given(r#"an overdue unassigned chore "{title}""#)]
fn overdue_unassigned_chore(
    world: &mut ChoreBoardWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let credential = world
        .credentials
        .values()
        .next()
        .cloned()
        .ok_or_else(|| eyre::eyre!("no signed-in member to create the chore"))?;

    let payload = NewChore {
        title,
        description: None,
        due_date: Some(chrono::Utc::now() - chrono::Duration::days(1)),
        reward_points: None,
        assignee_member_id: None,
    };
    let created = run_async(world.board.create_chore(&credential, payload))
        .wrap_err("create overdue chore in scenario setup")?;
    world.chore = Some(created);
    Ok(())
}

#[given(r#""{name}" has taken the chore"#)]
fn member_has_taken_the_chore(
    world: &mut ChoreBoardWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let credential = world.credential_for(&name)?;
    let task_id = world.chore_id()?;
    run_async(world.board.take_chore(&credential, task_id))
        .wrap_err("take chore in scenario setup")?;
    Ok(())
}
