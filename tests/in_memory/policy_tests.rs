//! Configured transition policy and task defaults.

use super::helpers::{Board, developer_job};
use talentboard::{
    access::Actor,
    config::PipelineConfig,
    pipeline::{
        domain::{InternalApplicationStatus, StackId, UserId},
        services::{PipelineErrorKind, SendTaskRequest, SetApplicationStatusRequest},
    },
};

#[tokio::test(flavor = "multi_thread")]
async fn locked_terminal_policy_keeps_hires_final() -> eyre::Result<()> {
    let board = Board::with_config(PipelineConfig::locked_terminal());
    let job = board.post(developer_job(StackId::new())).await?;
    let (_, application) = board.apply(&job).await?;
    let admin = Actor::super_admin(UserId::new());
    board
        .service
        .set_application_status(&admin, SetApplicationStatusRequest::new(application.id(), "hired"))
        .await?;

    let reopened = board
        .service
        .set_application_status(
            &admin,
            SetApplicationStatusRequest::new(application.id(), "screening"),
        )
        .await;
    eyre::ensure!(
        reopened.map_err(|err| err.kind()).err()
            == Some(PipelineErrorKind::TransitionNotAllowed)
    );

    let repeated = board
        .service
        .set_application_status(&admin, SetApplicationStatusRequest::new(application.id(), "hired"))
        .await?;
    eyre::ensure!(repeated.status() == InternalApplicationStatus::Hired);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn configured_deadlines_apply_to_tasks() -> eyre::Result<()> {
    let board = Board::with_config(PipelineConfig::from_json(
        r#"{ "default_deadline_days": 3, "max_deadline_days": 14 }"#,
    )?);
    let job = board.post(developer_job(StackId::new())).await?;
    let (_, application) = board.apply(&job).await?;
    let admin = Actor::super_admin(UserId::new());

    let too_long = board
        .service
        .send_task(
            &admin,
            SendTaskRequest::new(application.id(), "Todo").with_deadline_days(30),
        )
        .await;
    eyre::ensure!(
        too_long.map_err(|err| err.kind()).err() == Some(PipelineErrorKind::InvalidInput)
    );

    let task = board
        .service
        .send_task(&admin, SendTaskRequest::new(application.id(), "Todo"))
        .await?;
    eyre::ensure!(task.deadline_days() == 3);
    Ok(())
}
