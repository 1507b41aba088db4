//! Application pipeline orchestration service.

use crate::access::{
    AccessError, Actor, ActorRole, Capability, authorize, authorize_applicant, authorize_listing,
};
use crate::config::PipelineConfig;
use crate::pipeline::{
    domain::{
        ApplicantApplicationView, Application, ApplicationId, InternalApplicationStatus, JobId,
        JobStatus, Rating, TaskStatus,
    },
    ports::{ApplicationQuery, ApplicationRepository, JobRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    AnnotateApplicationRequest, PipelineError, PipelineResult, SetApplicationStatusRequest,
    SubmitApplicationRequest,
};

/// Application pipeline orchestration service.
///
/// Each operation loads the application, mutates a local copy, and writes it
/// back only when every check has passed, so a failed call leaves stored
/// state untouched.
#[derive(Clone)]
pub struct PipelineService<A, J, C>
where
    A: ApplicationRepository,
    J: JobRepository,
    C: Clock + Send + Sync,
{
    pub(super) applications: Arc<A>,
    pub(super) jobs: Arc<J>,
    pub(super) clock: Arc<C>,
    pub(super) config: PipelineConfig,
}

impl<A, J, C> PipelineService<A, J, C>
where
    A: ApplicationRepository,
    J: JobRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(applications: Arc<A>, jobs: Arc<J>, clock: Arc<C>) -> Self {
        Self::with_config(applications, jobs, clock, PipelineConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        applications: Arc<A>,
        jobs: Arc<J>,
        clock: Arc<C>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            applications,
            jobs,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Submits a job seeker's application in the `applied` status.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Access`] when the actor applies on someone
    /// else's behalf, [`PipelineError::JobNotFound`],
    /// [`PipelineError::JobNotAccepting`] for paused or closed jobs, or a
    /// repository error such as a duplicate application.
    pub async fn submit_application(
        &self,
        actor: &Actor,
        request: SubmitApplicationRequest,
    ) -> PipelineResult<Application> {
        let SubmitApplicationRequest {
            job_id,
            applicant,
            cover_letter,
            cv,
        } = request;
        Self::deny_logged(authorize_applicant(actor, applicant.id))?;

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(PipelineError::JobNotFound(job_id))?;
        if job.status() != JobStatus::Active {
            return Err(PipelineError::JobNotAccepting(job_id));
        }

        let mut application = Application::submit(&job, applicant, &*self.clock);
        if let Some(letter) = cover_letter {
            application = application.with_cover_letter(letter);
        }
        if let Some(reference) = cv {
            application = application.with_cv(reference);
        }
        self.applications.store(&application).await?;
        info!(
            application_id = %application.id(),
            job_id = %job_id,
            applicant_id = %actor.id(),
            "application submitted"
        );
        Ok(application)
    }

    /// Replaces an application's internal status.
    ///
    /// Any status may follow any other under the default
    /// [`crate::pipeline::domain::StatusTransitionPolicy::Permissive`] policy.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ApplicationNotFound`],
    /// [`PipelineError::Access`] without `canChangeApplicationStatus`,
    /// [`PipelineError::InvalidStatus`] for unknown status names, or a
    /// policy refusal. Permission is checked before the name is parsed.
    pub async fn set_application_status(
        &self,
        actor: &Actor,
        request: SetApplicationStatusRequest,
    ) -> PipelineResult<Application> {
        let mut application = self.load(request.application_id).await?;
        Self::guard(actor, Capability::ChangeApplicationStatus, &application)?;
        let status = InternalApplicationStatus::try_from(request.status.as_str())?;

        let previous = application.status();
        application.set_status(status, self.config.transition_policy, &*self.clock)?;
        self.applications.update(&application).await?;
        info!(
            application_id = %application.id(),
            from = %previous,
            to = %status,
            actor_id = %actor.id(),
            "application status changed"
        );
        Ok(application)
    }

    /// Replaces the admin-only notes and rating.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ApplicationNotFound`],
    /// [`PipelineError::Access`] without `canViewApplicantDetails`, or
    /// [`PipelineError::Domain`] for a rating outside 1..=5.
    pub async fn annotate_application(
        &self,
        actor: &Actor,
        request: AnnotateApplicationRequest,
    ) -> PipelineResult<Application> {
        let mut application = self.load(request.application_id).await?;
        Self::guard(actor, Capability::ViewApplicantDetails, &application)?;
        let rating = request.rating.map(Rating::new).transpose()?;

        application.annotate(request.notes, rating, &*self.clock);
        self.applications.update(&application).await?;
        debug!(application_id = %application.id(), "application annotated");
        Ok(application)
    }

    /// Returns the applicant's view of one of their applications.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ApplicationNotFound`] or
    /// [`PipelineError::Access`] when the actor is not the applicant.
    pub async fn applicant_view(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
    ) -> PipelineResult<ApplicantApplicationView> {
        let application = self.load(application_id).await?;
        Self::deny_logged(authorize_applicant(actor, application.applicant().id))?;
        Ok(ApplicantApplicationView::from(&application))
    }

    /// Returns the actor's own applications as applicant views.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Repository`] when the lookup fails.
    pub async fn applicant_applications(
        &self,
        actor: &Actor,
    ) -> PipelineResult<Vec<ApplicantApplicationView>> {
        let query = ApplicationQuery::all().for_applicant(actor.id());
        let applications = self.applications.query(&query).await?;
        debug!(applicant_id = %actor.id(), count = applications.len(), "listed applicant applications");
        Ok(applications
            .iter()
            .map(ApplicantApplicationView::from)
            .collect())
    }

    /// Lists applications in the admin's stacks, optionally by status.
    ///
    /// Contact details are redacted for admins without
    /// `canViewApplicantDetails`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Access`] for non-admins or
    /// [`PipelineError::Repository`] when the lookup fails.
    pub async fn reviewer_applications(
        &self,
        actor: &Actor,
        status: Option<InternalApplicationStatus>,
    ) -> PipelineResult<Vec<Application>> {
        if !actor.role().is_admin() {
            return Self::deny_logged(Err(AccessError::AdminRequired { actor: actor.id() }));
        }
        let mut query = Self::scope(actor);
        if let Some(filter) = status {
            query = query.with_status(filter);
        }
        let applications = self.applications.query(&query).await?;
        Ok(Self::redact_for(actor, applications))
    }

    /// Lists the applications to one job, oldest first.
    ///
    /// Stack admins see nothing for jobs outside their stacks. Contact details
    /// are redacted as in [`Self::reviewer_applications`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Access`] for non-admins or
    /// [`PipelineError::Repository`] when the lookup fails.
    pub async fn job_applications(
        &self,
        actor: &Actor,
        job_id: JobId,
    ) -> PipelineResult<Vec<Application>> {
        if !actor.role().is_admin() {
            return Self::deny_logged(Err(AccessError::AdminRequired { actor: actor.id() }));
        }
        let query = Self::scope(actor).for_job(job_id);
        let applications = self.applications.query(&query).await?;
        debug!(job_id = %job_id, count = applications.len(), "listed job applications");
        Ok(Self::redact_for(actor, applications))
    }

    /// Lists applications in the admin's stacks whose task awaits a review
    /// decision, whether or not a reviewer has picked it up.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Access`] without `canReviewTasks` or
    /// [`PipelineError::Repository`] when the lookup fails.
    pub async fn pending_reviews(&self, actor: &Actor) -> PipelineResult<Vec<Application>> {
        Self::deny_logged(authorize_listing(actor, Capability::ReviewTasks))?;
        let query = Self::scope(actor).with_task_statuses(
            TaskStatus::ALL
                .into_iter()
                .filter(|status| status.awaits_decision()),
        );
        Ok(self.applications.query(&query).await?)
    }

    /// Lists applications in the admin's stacks whose task is open past its
    /// deadline. Nothing is transitioned; callers decide how to follow up.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Access`] without `canSendTasks` or
    /// [`PipelineError::Repository`] when the lookup fails.
    pub async fn overdue_tasks(&self, actor: &Actor) -> PipelineResult<Vec<Application>> {
        Self::deny_logged(authorize_listing(actor, Capability::SendTasks))?;
        let now = self.clock.utc();
        let applications = self.applications.query(&Self::scope(actor)).await?;
        Ok(applications
            .into_iter()
            .filter(|application| application.task().is_some_and(|task| task.is_overdue(now)))
            .collect())
    }

    pub(super) async fn load(&self, id: ApplicationId) -> PipelineResult<Application> {
        self.applications
            .find_by_id(id)
            .await?
            .ok_or(PipelineError::ApplicationNotFound(id))
    }

    pub(super) fn guard(
        actor: &Actor,
        capability: Capability,
        application: &Application,
    ) -> PipelineResult<()> {
        Self::deny_logged(authorize(actor, capability, application.stack_id()))
    }

    pub(super) fn deny_logged<T>(outcome: Result<T, AccessError>) -> PipelineResult<T> {
        outcome.map_err(|err| {
            warn!(error = %err, "pipeline operation denied");
            PipelineError::from(err)
        })
    }

    fn redact_for(actor: &Actor, applications: Vec<Application>) -> Vec<Application> {
        if actor
            .capabilities()
            .grants(Capability::ViewApplicantDetails)
        {
            return applications;
        }
        applications
            .into_iter()
            .map(Application::with_redacted_contact)
            .collect()
    }

    fn scope(actor: &Actor) -> ApplicationQuery {
        match actor.role() {
            ActorRole::StackAdmin => {
                ApplicationQuery::all().in_stacks(actor.assigned_stacks().iter().copied())
            }
            ActorRole::SuperAdmin => ApplicationQuery::all(),
            ActorRole::JobSeeker => ApplicationQuery::all().for_applicant(actor.id()),
        }
    }
}
