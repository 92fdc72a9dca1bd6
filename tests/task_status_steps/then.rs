//! Then steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::then;
use taskapp::audit::ports::AuditLogRepository;
use taskapp::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

fn change_result(
    world: &TaskStatusWorld,
) -> Result<&Result<taskapp::task::domain::Task, TaskLifecycleError>, eyre::Report> {
    world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))
}

#[then(r#"the task status is "{label}""#)]
fn task_status_is(world: &TaskStatusWorld, label: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(label.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let code = world.last_task()?.code();
    let stored = world
        .service
        .find_task(code)
        .ok_or_else(|| eyre::eyre!("task {code} is no longer stored"))?;

    eyre::ensure!(
        stored.status() == expected,
        "expected status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the change log for the task has {count:usize} entries")]
fn change_log_has_entries(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let code = world.last_task()?.code();
    let trail = world
        .audit
        .find_by_task(code)
        .map_err(|err| eyre::eyre!("read change log: {err}"))?;

    eyre::ensure!(
        trail.len() == count,
        "expected {count} change log entries, found {}",
        trail.len()
    );
    Ok(())
}

#[then("the status change fails with an invalid status transition error")]
fn fails_with_invalid_transition(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition { .. }
        ))
    ) {
        eyre::bail!("expected InvalidStatusTransition error, got {result:?}");
    }
    Ok(())
}

#[then("the status change fails with an invalid status error")]
fn fails_with_invalid_status(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        eyre::bail!("expected InvalidStatus error, got {result:?}");
    }
    Ok(())
}

#[then("the status change fails with a task not found error")]
fn fails_with_task_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = change_result(world)?;
    if !matches!(result, Err(TaskLifecycleError::TaskNotFound(_))) {
        eyre::bail!("expected TaskNotFound error, got {result:?}");
    }
    Ok(())
}
