//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use eisenflow::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

fn last_domain_error(world: &TaskWorkflowWorld) -> Result<&TaskDomainError, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(TaskLifecycleError::Domain(err))) => Ok(err),
        Some(other) => Err(eyre::eyre!("expected a domain error, got {other:?}")),
        None => Err(eyre::eyre!("missing operation result in scenario world")),
    }
}

#[then(r#"the task "{title}" is in status "{status}""#)]
fn task_has_status(
    world: &TaskWorkflowWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let task = run_async(world.service.get(world.task_id(&title)?))?;
    eyre::ensure!(
        task.status() == expected,
        "expected {title:?} in {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the move fails with a WIP limit error")]
fn move_fails_with_wip_limit(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let err = last_domain_error(world)?;
    eyre::ensure!(
        matches!(err, TaskDomainError::WipLimitExceeded { .. }),
        "expected WIP limit error, got {err}"
    );
    Ok(())
}

#[then("the move fails with an invalid transition error")]
fn move_fails_with_invalid_transition(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let err = last_domain_error(world)?;
    eyre::ensure!(
        matches!(err, TaskDomainError::InvalidTransition { .. }),
        "expected invalid transition error, got {err}"
    );
    Ok(())
}

#[then("the start fails with an invalid state error")]
fn start_fails_with_invalid_state(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let err = last_domain_error(world)?;
    eyre::ensure!(
        matches!(err, TaskDomainError::InvalidState { .. }),
        "expected invalid state error, got {err}"
    );
    Ok(())
}
