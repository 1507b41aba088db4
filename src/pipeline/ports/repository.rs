//! Repository port for application persistence and lookup.

use crate::pipeline::domain::{
    Application, ApplicationId, InternalApplicationStatus, JobId, StackId, TaskStatus, UserId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Typed predicate for [`ApplicationRepository::query`].
///
/// Unset criteria match everything; set criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationQuery {
    applicant: Option<UserId>,
    job: Option<JobId>,
    stacks: Option<Vec<StackId>>,
    status: Option<InternalApplicationStatus>,
    task_statuses: Option<Vec<TaskStatus>>,
}

impl ApplicationQuery {
    /// Creates a query matching every application.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one applicant.
    #[must_use]
    pub const fn for_applicant(mut self, applicant: UserId) -> Self {
        self.applicant = Some(applicant);
        self
    }

    /// Restricts to one job.
    #[must_use]
    pub const fn for_job(mut self, job: JobId) -> Self {
        self.job = Some(job);
        self
    }

    /// Restricts to the given stacks.
    #[must_use]
    pub fn in_stacks(mut self, stacks: impl IntoIterator<Item = StackId>) -> Self {
        self.stacks = Some(stacks.into_iter().collect());
        self
    }

    /// Restricts to one internal status.
    #[must_use]
    pub const fn with_status(mut self, status: InternalApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to applications whose current task has any of the given
    /// statuses.
    #[must_use]
    pub fn with_task_statuses(mut self, statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        self.task_statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Returns whether `application` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, application: &Application) -> bool {
        let applicant_ok = self
            .applicant
            .is_none_or(|id| application.applicant().id == id);
        let job_ok = self.job.is_none_or(|id| application.job().job_id == id);
        let stack_ok = self
            .stacks
            .as_ref()
            .is_none_or(|stacks| stacks.contains(&application.stack_id()));
        let status_ok = self
            .status
            .is_none_or(|status| application.status() == status);
        let task_ok = self.task_statuses.as_ref().is_none_or(|statuses| {
            application
                .task()
                .is_some_and(|task| statuses.contains(&task.status()))
        });
        applicant_ok && job_ok && stack_ok && status_ok && task_ok
    }
}

/// Application persistence contract.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::DuplicateApplication`] when the
    /// applicant already applied to the same job.
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()>;

    /// Persists changes to an existing application, embedded task included.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::NotFound`] when the application
    /// does not exist.
    async fn update(&self, application: &Application) -> ApplicationRepositoryResult<()>;

    /// Finds an application by identifier.
    ///
    /// Returns `None` when the application does not exist.
    async fn find_by_id(&self, id: ApplicationId)
    -> ApplicationRepositoryResult<Option<Application>>;

    /// Returns every application matching `query`, oldest first.
    async fn query(&self, query: &ApplicationQuery)
    -> ApplicationRepositoryResult<Vec<Application>>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// The applicant already has an application for the job.
    #[error("applicant {applicant} already applied to job {job}")]
    DuplicateApplication {
        /// Applicant.
        applicant: UserId,
        /// Job.
        job: JobId,
    },

    /// The application was not found.
    #[error("application not found: {0}")]
    NotFound(ApplicationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
