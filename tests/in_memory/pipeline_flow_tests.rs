//! End-to-end application and task lifecycle over in-memory adapters.

use super::helpers::{Board, board, developer_job, repository_link};
use rstest::rstest;
use talentboard::{
    access::Actor,
    pipeline::{
        domain::{
            ExternalApplicationStatus, InternalApplicationStatus, Job, JobType,
            PipelineDomainError, ReviewDecision, StackId, StackRef, SubmissionField,
            SubmissionFieldKind, TaskStatus, TaskSubmission, TaskType, UserId,
        },
        services::{
            PipelineError, PipelineErrorKind, ReviewTaskRequest, SendTaskRequest,
            SetApplicationStatusRequest, SubmitTaskRequest,
        },
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn design_task_is_started_submitted_and_rejected(board: Board) -> eyre::Result<()> {
    let stack = StackId::new();
    let job = board
        .post(
            Job::new("Product Designer", StackRef::new(stack, "Design"), JobType::Designer)
                .with_submission_fields([
                    SubmissionField::required(SubmissionFieldKind::FigmaLink, "Figma File"),
                    SubmissionField::optional(SubmissionFieldKind::ProjectVideo, "Walkthrough"),
                ]),
        )
        .await?;
    let (seeker, application) = board.apply(&job).await?;
    let admin = Actor::super_admin(UserId::new());

    let sent = board
        .service
        .send_task(
            &admin,
            SendTaskRequest::new(application.id(), "Redesign checkout")
                .with_requirements(["Mobile first".to_owned()])
                .with_resources(["https://example.com/brand".to_owned()])
                .with_deadline_days(7),
        )
        .await?;
    eyre::ensure!(sent.task_type() == TaskType::Design);
    eyre::ensure!(sent.deadline_days() == 7);

    let started = board.service.start_task(&seeker, application.id()).await?;
    eyre::ensure!(started.status() == TaskStatus::InProgress);
    let view = board.service.applicant_view(&seeker, application.id()).await?;
    eyre::ensure!(view.status.external == ExternalApplicationStatus::TaskAssigned);

    let submission = TaskSubmission {
        figma_link: Some("https://figma.com/file/abc".to_owned()),
        ..TaskSubmission::default()
    };
    let submitted = board
        .service
        .submit_task(
            &seeker,
            SubmitTaskRequest::new(application.id(), submission).with_notes("Two variants"),
        )
        .await?;
    eyre::ensure!(submitted.submission_notes() == Some("Two variants"));

    let reviewing = board.service.begin_task_review(&admin, application.id()).await?;
    eyre::ensure!(reviewing.status() == TaskStatus::Reviewing);

    let reviewed = board
        .service
        .review_task(
            &admin,
            ReviewTaskRequest::new(application.id(), ReviewDecision::Rejected)
                .with_feedback("Contrast is too low"),
        )
        .await?;
    eyre::ensure!(reviewed.status() == TaskStatus::Rejected);
    eyre::ensure!(reviewed.reviewed_at().is_some());

    let outcome = board.service.applicant_view(&seeker, application.id()).await?;
    eyre::ensure!(outcome.status.external == ExternalApplicationStatus::Rejected);
    eyre::ensure!(
        outcome.task.as_ref().and_then(|task| task.feedback()) == Some("Contrast is too low")
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopened_application_gets_a_fresh_task(board: Board) -> eyre::Result<()> {
    let job = board.post(developer_job(StackId::new())).await?;
    let (seeker, application) = board.apply(&job).await?;
    let admin = Actor::super_admin(UserId::new());
    let first = board
        .service
        .send_task(&admin, SendTaskRequest::new(application.id(), "First"))
        .await?;
    board
        .service
        .submit_task(&seeker, SubmitTaskRequest::new(application.id(), repository_link()))
        .await?;
    board
        .service
        .review_task(
            &admin,
            ReviewTaskRequest::new(application.id(), ReviewDecision::Rejected),
        )
        .await?;

    let refused = board
        .service
        .send_task(&admin, SendTaskRequest::new(application.id(), "Second"))
        .await;
    eyre::ensure!(matches!(
        refused,
        Err(PipelineError::Domain(PipelineDomainError::ApplicationTerminal { .. }))
    ));

    board
        .service
        .set_application_status(
            &admin,
            SetApplicationStatusRequest::new(application.id(), "screening"),
        )
        .await?;
    let second = board
        .service
        .send_task(&admin, SendTaskRequest::new(application.id(), "Second"))
        .await?;

    let listed = board.service.reviewer_applications(&admin, None).await?;
    let stored = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected the application in the listing"))?;
    eyre::ensure!(stored.task().map(|task| task.id()) == Some(second.id()));
    eyre::ensure!(
        stored.task_history().iter().map(|task| task.id()).collect::<Vec<_>>()
            == vec![first.id()]
    );
    eyre::ensure!(stored.status() == InternalApplicationStatus::TaskSent);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submission_after_review_is_refused(board: Board) -> eyre::Result<()> {
    let job = board.post(developer_job(StackId::new())).await?;
    let (seeker, application) = board.apply(&job).await?;
    let admin = Actor::super_admin(UserId::new());
    board
        .service
        .send_task(&admin, SendTaskRequest::new(application.id(), "Todo"))
        .await?;
    board
        .service
        .submit_task(&seeker, SubmitTaskRequest::new(application.id(), repository_link()))
        .await?;
    board
        .service
        .review_task(
            &admin,
            ReviewTaskRequest::new(application.id(), ReviewDecision::Approved),
        )
        .await?;

    let again = board
        .service
        .submit_task(&seeker, SubmitTaskRequest::new(application.id(), repository_link()))
        .await;

    eyre::ensure!(
        again.map_err(|err| err.kind()).err() == Some(PipelineErrorKind::InvalidTaskState)
    );
    let view = board.service.applicant_view(&seeker, application.id()).await?;
    eyre::ensure!(view.status.external == ExternalApplicationStatus::Waiting);
    Ok(())
}
