//! When steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::when;
use taskapp::task::services::ChangeStatusRequest;

fn change_status(world: &mut TaskStatusWorld, code: u32, status: u8) -> Result<(), eyre::Report> {
    let login_user = world.login_user()?.clone();
    let result = world
        .service
        .change_status(ChangeStatusRequest::new(code, status), &login_user);
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_change_result = Some(result);
    Ok(())
}

#[when("the task status is changed to {status:u8}")]
fn task_status_changed(world: &mut TaskStatusWorld, status: u8) -> Result<(), eyre::Report> {
    let code = world.last_task()?.code().value();
    change_status(world, code, status)
}

#[when("task {code:u32} has its status changed to {status:u8}")]
fn other_task_status_changed(
    world: &mut TaskStatusWorld,
    code: u32,
    status: u8,
) -> Result<(), eyre::Report> {
    change_status(world, code, status)
}
