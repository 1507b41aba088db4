//! When steps for application pipeline BDD scenarios.

use super::world::{PipelineWorld, run_async};
use rstest_bdd_macros::when;
use talentboard::pipeline::{
    domain::{ReviewDecision, TaskSubmission},
    services::{
        ReviewTaskRequest, SendTaskRequest, SetApplicationStatusRequest, SubmitTaskRequest,
    },
};

#[when(r#"the reviewer sends the task "{title}" due in {days:u16} days"#)]
fn reviewer_sends_task(
    world: &mut PipelineWorld,
    title: String,
    days: u16,
) -> Result<(), eyre::Report> {
    let request =
        SendTaskRequest::new(world.application()?.id(), title).with_deadline_days(days);
    let outcome = run_async(world.service.send_task(world.reviewer()?, request));
    world.record(outcome);
    Ok(())
}

#[when("the applicant submits the task with no links")]
fn applicant_submits_nothing(world: &mut PipelineWorld) -> Result<(), eyre::Report> {
    let request = SubmitTaskRequest::new(world.application()?.id(), TaskSubmission::default());
    let outcome = run_async(world.service.submit_task(world.applicant()?, request));
    world.record(outcome);
    Ok(())
}

#[when(r#"the applicant submits the task with GitHub link "{link}""#)]
fn applicant_submits_link(world: &mut PipelineWorld, link: String) -> Result<(), eyre::Report> {
    let submission = TaskSubmission {
        github_link: Some(link),
        ..TaskSubmission::default()
    };
    let request = SubmitTaskRequest::new(world.application()?.id(), submission);
    let outcome = run_async(world.service.submit_task(world.applicant()?, request));
    world.record(outcome);
    Ok(())
}

#[when(r#"the reviewer approves the task with feedback "{feedback}""#)]
fn reviewer_approves(world: &mut PipelineWorld, feedback: String) -> Result<(), eyre::Report> {
    let request = ReviewTaskRequest::new(world.application()?.id(), ReviewDecision::Approved)
        .with_feedback(feedback);
    let outcome = run_async(world.service.review_task(world.reviewer()?, request));
    world.record(outcome);
    Ok(())
}

#[when(r#"the reviewer sets the status to "{status}""#)]
fn reviewer_sets_status(world: &mut PipelineWorld, status: String) -> Result<(), eyre::Report> {
    let request = SetApplicationStatusRequest::new(world.application()?.id(), status);
    let outcome = run_async(
        world
            .service
            .set_application_status(world.reviewer()?, request),
    );
    world.record(outcome);
    Ok(())
}
