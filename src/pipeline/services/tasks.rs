//! Task assignment, submission, and review operations.
//!
//! `review_task` is the only place the task sub-state drives the
//! application status: approval moves to `interview`, rejection to
//! `rejected`.

use crate::access::{Actor, Capability, authorize_applicant};
use crate::pipeline::{
    domain::{Application, ApplicationId, AssessmentTask, PipelineDomainError},
    ports::{ApplicationRepository, JobRepository},
};
use mockable::Clock;
use tracing::info;

use super::{
    PipelineResult, PipelineService, ReviewTaskRequest, SendTaskRequest, SubmitTaskRequest,
};

impl<A, J, C> PipelineService<A, J, C>
where
    A: ApplicationRepository,
    J: JobRepository,
    C: Clock + Send + Sync,
{
    /// Sends a task and moves the application to `task_sent`.
    ///
    /// Submission fields and the deadline come from the request, else the
    /// job, else the configuration. Designer jobs get design tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::PipelineError::ApplicationNotFound`],
    /// [`super::PipelineError::Access`] without `canSendTasks`, or a domain
    /// error: `ApplicationTerminal`, `TaskAlreadyActive`, or invalid task
    /// contents.
    pub async fn send_task(
        &self,
        actor: &Actor,
        request: SendTaskRequest,
    ) -> PipelineResult<AssessmentTask> {
        let mut application = self.load(request.application_id).await?;
        Self::guard(actor, Capability::SendTasks, &application)?;

        let job = self.jobs.find_by_id(application.job().job_id).await?;
        let assignment = request.into_assignment(job.as_ref(), &self.config);
        let task = application
            .assign_task(assignment, self.config.max_deadline_days, &*self.clock)?
            .clone();
        self.applications.update(&application).await?;
        info!(
            application_id = %application.id(),
            task_id = %task.id(),
            deadline = %task.deadline(),
            actor_id = %actor.id(),
            "task sent"
        );
        Ok(task)
    }

    /// Marks the applicant's pending task as started.
    ///
    /// # Errors
    ///
    /// Returns [`super::PipelineError::ApplicationNotFound`],
    /// [`super::PipelineError::Access`] for anyone but the applicant, or a
    /// task state error.
    pub async fn start_task(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
    ) -> PipelineResult<AssessmentTask> {
        let mut application = self.load(application_id).await?;
        Self::deny_logged(authorize_applicant(actor, application.applicant().id))?;

        application.start_task(&*self.clock)?;
        self.applications.update(&application).await?;
        let task = current_task(&application)?;
        info!(application_id = %application_id, task_id = %task.id(), "task started");
        Ok(task)
    }

    /// Records the applicant's submission and moves to `task_submitted`.
    ///
    /// # Errors
    ///
    /// Returns [`super::PipelineError::ApplicationNotFound`],
    /// [`super::PipelineError::Access`] for anyone but the applicant, or a
    /// domain error: no open task, or `IncompleteSubmission` when a required
    /// field is missing.
    pub async fn submit_task(
        &self,
        actor: &Actor,
        request: SubmitTaskRequest,
    ) -> PipelineResult<AssessmentTask> {
        let SubmitTaskRequest {
            application_id,
            submission,
            notes,
        } = request;
        let mut application = self.load(application_id).await?;
        Self::deny_logged(authorize_applicant(actor, application.applicant().id))?;

        application.submit_task(submission, notes, &*self.clock)?;
        self.applications.update(&application).await?;
        let task = current_task(&application)?;
        info!(application_id = %application_id, task_id = %task.id(), "task submitted");
        Ok(task)
    }

    /// Marks a submitted task as under review and moves to `task_reviewing`.
    ///
    /// # Errors
    ///
    /// Returns [`super::PipelineError::ApplicationNotFound`],
    /// [`super::PipelineError::Access`] without `canReviewTasks`, or a task
    /// state error.
    pub async fn begin_task_review(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
    ) -> PipelineResult<AssessmentTask> {
        let mut application = self.load(application_id).await?;
        Self::guard(actor, Capability::ReviewTasks, &application)?;

        application.begin_task_review(&*self.clock)?;
        self.applications.update(&application).await?;
        let task = current_task(&application)?;
        info!(
            application_id = %application_id,
            task_id = %task.id(),
            actor_id = %actor.id(),
            "task review started"
        );
        Ok(task)
    }

    /// Records a review decision and advances the application.
    ///
    /// # Errors
    ///
    /// Returns [`super::PipelineError::ApplicationNotFound`],
    /// [`super::PipelineError::Access`] without `canReviewTasks`, or a task
    /// state error when the task is not awaiting review.
    pub async fn review_task(
        &self,
        actor: &Actor,
        request: ReviewTaskRequest,
    ) -> PipelineResult<AssessmentTask> {
        let ReviewTaskRequest {
            application_id,
            decision,
            feedback,
        } = request;
        let mut application = self.load(application_id).await?;
        Self::guard(actor, Capability::ReviewTasks, &application)?;

        application.review_task(decision, feedback, &*self.clock)?;
        self.applications.update(&application).await?;
        let task = current_task(&application)?;
        info!(
            application_id = %application_id,
            task_id = %task.id(),
            task_status = %task.status(),
            application_status = %application.status(),
            actor_id = %actor.id(),
            "task reviewed"
        );
        Ok(task)
    }
}

fn current_task(
    application: &Application,
) -> Result<AssessmentTask, PipelineDomainError> {
    application
        .task()
        .cloned()
        .ok_or(PipelineDomainError::NoTask(application.id()))
}
