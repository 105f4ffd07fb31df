//! Untyped request bodies validated and applied through the service.

use eisenflow::task::{
    domain::{Effort, TaskStatus},
    validation::{
        ValidationError, parse_create_task, parse_patch_task, parse_priority,
        parse_settings_update, parse_task_filter, parse_task_id, parse_transition,
    },
};
use rstest::rstest;
use serde_json::json;

use super::helpers::{TestService, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn json_bodies_drive_a_task_to_done(service: TestService) -> Result<(), eyre::Report> {
    let create = parse_create_task(&json!({
        "title": "Prepare the compliance audit",
        "effort": "L",
        "tags": ["work"],
    }))?;
    let created = service.create(create).await?;
    let task_id = parse_task_id(&created.id().to_string())?;

    let priority = parse_priority(&json!({"importance": true, "urgency": true}))?;
    service.override_priority(task_id, priority).await?;

    for status in ["IN_PROGRESS", "REVIEW", "DONE"] {
        let request = parse_transition(task_id, &json!({ "toStatus": status }))?;
        service.transition(request).await?;
    }

    let done = service.get(task_id).await?;
    eyre::ensure!(done.status() == TaskStatus::Done);
    eyre::ensure!(done.content().effort() == Some(Effort::Large));
    eyre::ensure!(done.suggestion().importance());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_body_clears_optional_fields(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create(parse_create_task(&json!({
            "title": "Book flights",
            "dueDate": "2030-05-01",
            "effort": "S",
        }))?)
        .await?;

    let patch = parse_patch_task(&json!({"dueDate": null, "effort": null}))?;
    let patched = service.patch_metadata(created.id(), patch).await?;

    eyre::ensure!(patched.content().due_date().is_none());
    eyre::ensure!(patched.content().effort().is_none());
    eyre::ensure!(patched.content().title().as_str() == "Book flights");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_body_updates_the_limit(service: TestService) -> Result<(), eyre::Report> {
    let update = parse_settings_update(&json!({"wipLimit": 5}))?;
    let settings = service.update_settings(update).await?;
    eyre::ensure!(settings.wip_limit().get() == 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filter_query_narrows_the_listing(service: TestService) -> Result<(), eyre::Report> {
    let started = service
        .create(parse_create_task(&json!({"title": "Started"}))?)
        .await?;
    service
        .create(parse_create_task(&json!({"title": "Parked"}))?)
        .await?;
    service.start(started.id()).await?;

    let listed = service
        .list(parse_task_filter(None, Some("BACKLOG"))?)
        .await?;

    eyre::ensure!(listed.len() == 1);
    eyre::ensure!(listed.first().map(|task| task.id()) == Some(started.id()));
    Ok(())
}

#[rstest]
fn malformed_bodies_never_reach_the_service() {
    assert_eq!(
        parse_create_task(&json!({"description": "no title"})),
        Err(ValidationError::MissingTitle)
    );
    assert!(parse_priority(&json!({"importance": 1, "urgency": 0})).is_err());
    assert!(parse_task_id("not-a-uuid").is_err());
}
