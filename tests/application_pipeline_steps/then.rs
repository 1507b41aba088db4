//! Then steps for application pipeline BDD scenarios.

use super::world::{PipelineWorld, run_async};
use rstest_bdd_macros::then;
use talentboard::pipeline::{
    domain::{Application, InternalApplicationStatus, TaskStatus},
    ports::ApplicationRepository,
    services::PipelineErrorKind,
};

fn expected_kind(name: &str) -> Result<PipelineErrorKind, eyre::Report> {
    match name {
        "incomplete_submission" => Ok(PipelineErrorKind::IncompleteSubmission),
        "permission_denied" => Ok(PipelineErrorKind::PermissionDenied),
        "invalid_status" => Ok(PipelineErrorKind::InvalidStatus),
        "task_already_active" => Ok(PipelineErrorKind::TaskAlreadyActive),
        other => Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    }
}

fn reload(world: &PipelineWorld) -> Result<Application, eyre::Report> {
    let id = world.application()?.id();
    run_async(world.applications.find_by_id(id))?
        .ok_or_else(|| eyre::eyre!("application {id} vanished"))
}

#[then(r#"the operation fails with "{kind}""#)]
fn operation_fails_with(world: &PipelineWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = expected_kind(&kind)?;
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected {kind}, but the operation succeeded"))?;
    if error.kind() != expected {
        return Err(eyre::eyre!("expected {kind}, got {error:?}"));
    }
    Ok(())
}

#[then(r#"the internal status is "{status}""#)]
fn internal_status_is(world: &PipelineWorld, status: String) -> Result<(), eyre::Report> {
    let expected = InternalApplicationStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let application = reload(world)?;
    if application.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            application.status()
        ));
    }
    Ok(())
}

#[then(r#"the applicant sees the status "{status}""#)]
fn applicant_sees_status(world: &PipelineWorld, status: String) -> Result<(), eyre::Report> {
    let view = run_async(
        world
            .service
            .applicant_view(world.applicant()?, world.application()?.id()),
    )?;
    if view.status.external.as_str() != status {
        return Err(eyre::eyre!(
            "expected external status {status}, found {}",
            view.status.external.as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &PipelineWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected task status in scenario: {err}"))?;
    let application = reload(world)?;
    let found = application.task().map(|task| task.status());
    if found != Some(expected) {
        return Err(eyre::eyre!("expected task status {expected}, found {found:?}"));
    }
    Ok(())
}

#[then("the application has no task")]
fn application_has_no_task(world: &PipelineWorld) -> Result<(), eyre::Report> {
    let application = reload(world)?;
    if let Some(task) = application.task() {
        return Err(eyre::eyre!("expected no task, found {}", task.id()));
    }
    Ok(())
}
