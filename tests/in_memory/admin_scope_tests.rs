//! Invite acceptance and stack-scoped administration.

use super::helpers::{Board, board, developer_job};
use mockable::DefaultClock;
use rstest::rstest;
use talentboard::{
    access::{Actor, AdminInvite, Capabilities, Capability},
    pipeline::{
        domain::{ApplicationId, InternalApplicationStatus, StackId, UserId},
        services::{PipelineErrorKind, SetApplicationStatusRequest},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invited_admin_manages_only_assigned_stack(board: Board) -> eyre::Result<()> {
    let (rust, design) = (StackId::new(), StackId::new());
    let rust_job = board.post(developer_job(rust)).await?;
    let design_job = board.post(developer_job(design)).await?;
    let (_, in_rust) = board.apply(&rust_job).await?;
    let (_, in_design) = board.apply(&design_job).await?;

    let owner = Actor::super_admin(UserId::new());
    let mut invite = AdminInvite::issue(
        &owner,
        "lead@example.com",
        [rust],
        Capabilities::none().with(Capability::ChangeApplicationStatus, true),
        board.service.config(),
        &DefaultClock,
    )?;
    let lead = invite.accept(UserId::new(), &DefaultClock)?;

    board
        .service
        .set_application_status(&lead, SetApplicationStatusRequest::new(in_rust.id(), "screening"))
        .await?;
    let denied = board
        .service
        .set_application_status(
            &lead,
            SetApplicationStatusRequest::new(in_design.id(), "screening"),
        )
        .await;
    eyre::ensure!(
        denied.map_err(|err| err.kind()).err() == Some(PipelineErrorKind::PermissionDenied)
    );

    let scoped: Vec<ApplicationId> = board
        .service
        .reviewer_applications(&lead, None)
        .await?
        .iter()
        .map(|application| application.id())
        .collect();
    eyre::ensure!(scoped == vec![in_rust.id()]);

    let everything = board.service.reviewer_applications(&owner, None).await?;
    eyre::ensure!(everything.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_narrows_reviewer_listing(board: Board) -> eyre::Result<()> {
    let stack = StackId::new();
    let first_job = board.post(developer_job(stack)).await?;
    let second_job = board.post(developer_job(stack)).await?;
    let (_, screened) = board.apply(&first_job).await?;
    board.apply(&second_job).await?;
    let admin = Actor::super_admin(UserId::new());
    board
        .service
        .set_application_status(
            &admin,
            SetApplicationStatusRequest::new(screened.id(), "screening"),
        )
        .await?;

    let listed = board
        .service
        .reviewer_applications(&admin, Some(InternalApplicationStatus::Screening))
        .await?;

    eyre::ensure!(listed.len() == 1);
    eyre::ensure!(listed.first().map(|application| application.id()) == Some(screened.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn job_seekers_cannot_use_admin_listings(board: Board) -> eyre::Result<()> {
    let job = board.post(developer_job(StackId::new())).await?;
    let (seeker, _) = board.apply(&job).await?;

    let listing = board.service.reviewer_applications(&seeker, None).await;
    let overdue = board.service.overdue_tasks(&seeker).await;

    eyre::ensure!(
        listing.map_err(|err| err.kind()).err() == Some(PipelineErrorKind::PermissionDenied)
    );
    eyre::ensure!(
        overdue.map_err(|err| err.kind()).err() == Some(PipelineErrorKind::PermissionDenied)
    );
    Ok(())
}
