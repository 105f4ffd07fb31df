//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use eisenflow::task::{
    domain::{TaskStatus, WipLimit},
    services::{CreateTaskRequest, TransitionTaskRequest},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a board with a WIP limit of {limit:u32}")]
fn board_with_wip_limit(world: &mut TaskWorkflowWorld, limit: u32) -> Result<(), eyre::Report> {
    world.reset_board(WipLimit::new(limit).wrap_err("construct scenario WIP limit")?);
    Ok(())
}

#[given(r#"a task titled "{title}" has been created"#)]
fn task_created(world: &mut TaskWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(title.clone())))
        .wrap_err("create task for scenario setup")?;
    world.tasks_by_title.insert(title, created.id());
    Ok(())
}

#[given(r#"a task titled "{title}" is in status "{status}""#)]
fn task_in_status(
    world: &mut TaskWorkflowWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())?;
    task_created(world, title.clone())?;
    let task_id = world.task_id(&title)?;

    let mut current = TaskStatus::Backlog;
    while current != target {
        let next = current
            .next()
            .ok_or_else(|| eyre::eyre!("status {target} is unreachable from {current}"))?;
        run_async(
            world
                .service
                .transition(TransitionTaskRequest::new(task_id, next)),
        )
        .wrap_err_with(|| format!("move {title:?} to {next} in scenario setup"))?;
        current = next;
    }
    Ok(())
}
