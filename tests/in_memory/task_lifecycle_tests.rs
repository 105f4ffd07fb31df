//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use eisenflow::task::{
    domain::{Priority, TaskDomainError, TaskStatus, WipLimit},
    ports::TaskFilter,
    services::{
        CreateTaskRequest, PatchTaskRequest, TaskLifecycleError, TransitionTaskRequest,
    },
};
use rstest::rstest;

use super::helpers::{TestService, service, single_slot_service, task_at};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create(
            CreateTaskRequest::new("Renew the passport")
                .with_description("expires in June")
                .with_tags(vec!["admin".to_owned()]),
        )
        .await?;

    let fetched = service.get(created.id()).await?;

    eyre::ensure!(fetched == created);
    eyre::ensure!(fetched.status() == TaskStatus::Backlog);
    eyre::ensure!(fetched.created_at() == fetched.updated_at());
    eyre::ensure!(!fetched.suggestion().explanation().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn do_first_override_lands_in_todo_and_can_finish(
    service: TestService,
) -> Result<(), eyre::Report> {
    let task_id = task_at(&service, "Restore the backups", &[]).await?;

    let prioritised = service
        .override_priority(task_id, Priority::new(true, true))
        .await?;
    eyre::ensure!(prioritised.status() == TaskStatus::Todo);

    for status in [TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done] {
        service
            .transition(TransitionTaskRequest::new(task_id, status))
            .await?;
    }

    let done = service.get(task_id).await?;
    eyre::ensure!(done.status() == TaskStatus::Done);
    eyre::ensure!(done.status().is_terminal());
    eyre::ensure!(done.updated_at() >= prioritised.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_tasks_cannot_move(service: TestService) -> Result<(), eyre::Report> {
    let task_id = task_at(
        &service,
        "Archive receipts",
        &[
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done,
        ],
    )
    .await?;

    for target in TaskStatus::ALL {
        let result = service
            .transition(TransitionTaskRequest::new(task_id, target))
            .await;
        eyre::ensure!(
            matches!(
                result,
                Err(TaskLifecycleError::Domain(
                    TaskDomainError::InvalidTransition { .. }
                ))
            ),
            "DONE -> {target} should be rejected, got {result:?}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_within_in_progress_is_not_a_transition(
    single_slot_service: TestService,
) -> Result<(), eyre::Report> {
    let task_id = task_at(
        &single_slot_service,
        "Write the report",
        &[TaskStatus::Todo, TaskStatus::InProgress],
    )
    .await?;

    let result = single_slot_service
        .transition(TransitionTaskRequest::new(task_id, TaskStatus::InProgress))
        .await;

    eyre::ensure!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidTransition { .. }
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wip_limit_of_one_admits_a_single_task(
    single_slot_service: TestService,
) -> Result<(), eyre::Report> {
    task_at(
        &single_slot_service,
        "Fix the outage",
        &[TaskStatus::Todo, TaskStatus::InProgress],
    )
    .await?;
    let blocked = task_at(&single_slot_service, "Plan the offsite", &[TaskStatus::Todo]).await?;

    let result = single_slot_service
        .transition(TransitionTaskRequest::new(blocked, TaskStatus::InProgress))
        .await;

    let err = result.expect_err("second task should be blocked");
    eyre::ensure!(err.to_string() == "WIP limit exceeded (1/1)", "{err}");
    eyre::ensure!(single_slot_service.get(blocked).await?.status() == TaskStatus::Todo);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raising_the_limit_admits_more_work(
    single_slot_service: TestService,
) -> Result<(), eyre::Report> {
    task_at(
        &single_slot_service,
        "Fix the outage",
        &[TaskStatus::Todo, TaskStatus::InProgress],
    )
    .await?;
    let waiting = task_at(&single_slot_service, "Plan the offsite", &[TaskStatus::Todo]).await?;

    single_slot_service
        .set_wip_limit(WipLimit::new(2)?)
        .await?;
    single_slot_service
        .transition(TransitionTaskRequest::new(waiting, TaskStatus::InProgress))
        .await?;

    let in_progress = single_slot_service
        .list(TaskFilter::with_status(TaskStatus::InProgress))
        .await?;
    eyre::ensure!(in_progress.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_moves_never_exceed_the_limit(
    single_slot_service: TestService,
) -> Result<(), eyre::Report> {
    let mut candidates = Vec::new();
    for index in 0..6 {
        candidates.push(
            task_at(
                &single_slot_service,
                &format!("Candidate {index}"),
                &[TaskStatus::Todo],
            )
            .await?,
        );
    }

    let shared = Arc::new(single_slot_service);
    let handles: Vec<_> = candidates
        .into_iter()
        .map(|task_id| {
            let service = Arc::clone(&shared);
            tokio::spawn(async move {
                service
                    .transition(TransitionTaskRequest::new(task_id, TaskStatus::InProgress))
                    .await
            })
        })
        .collect();

    let mut admitted = 0_usize;
    for handle in handles {
        if handle.await?.is_ok() {
            admitted += 1;
        }
    }

    eyre::ensure!(admitted == 1, "admitted {admitted} tasks");
    eyre::ensure!(
        shared
            .list(TaskFilter::with_status(TaskStatus::InProgress))
            .await?
            .len()
            == 1
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_keeps_workflow_state(service: TestService) -> Result<(), eyre::Report> {
    let task_id = task_at(&service, "Sort the attic", &[TaskStatus::Todo]).await?;
    service
        .override_priority(task_id, Priority::new(false, true))
        .await?;

    let patched = service
        .patch_metadata(
            task_id,
            PatchTaskRequest::new()
                .with_title("Sort the attic and garage")
                .with_due_date(Some("2030-01-01".to_owned())),
        )
        .await?;

    eyre::ensure!(patched.content().title().as_str() == "Sort the attic and garage");
    eyre::ensure!(patched.content().due_date().map(|due| due.as_str()) == Some("2030-01-01"));
    eyre::ensure!(patched.status() == TaskStatus::Todo);
    eyre::ensure!(patched.priority() == Priority::new(false, true));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backlog_warning_follows_the_threshold(service: TestService) -> Result<(), eyre::Report> {
    let settings = service.settings().await?;
    for index in 0..=settings.backlog_warn_threshold() {
        task_at(&service, &format!("Someday {index}"), &[]).await?;
    }

    let backlog = service
        .list(TaskFilter::with_status(TaskStatus::Backlog))
        .await?;

    eyre::ensure!(settings.backlog_exceeds_threshold(backlog.len()));
    Ok(())
}
