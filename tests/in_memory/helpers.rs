//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use talentboard::{
    access::Actor,
    config::PipelineConfig,
    pipeline::{
        adapters::memory::{InMemoryApplicationRepository, InMemoryJobRepository},
        domain::{
            ApplicantSnapshot, Application, Job, JobType, StackId, StackRef, TaskSubmission,
            UserId,
        },
        ports::JobRepository,
        services::{PipelineService, SubmitApplicationRequest},
    },
};

/// Service type used by the in-memory tests.
pub type TestService =
    PipelineService<InMemoryApplicationRepository, InMemoryJobRepository, DefaultClock>;

/// A service plus the job repository it reads from.
pub struct Board {
    /// The service under test.
    pub service: TestService,
    /// Job repository shared with the service.
    pub jobs: Arc<InMemoryJobRepository>,
}

impl Board {
    /// Creates a board with the given configuration.
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        let jobs = Arc::new(InMemoryJobRepository::new());
        let service = PipelineService::with_config(
            Arc::new(InMemoryApplicationRepository::new()),
            Arc::clone(&jobs),
            Arc::new(DefaultClock),
            config,
        );
        Self { service, jobs }
    }

    /// Stores a job and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the job cannot be stored.
    pub async fn post(&self, job: Job) -> eyre::Result<Job> {
        self.jobs.store(&job).await?;
        Ok(job)
    }

    /// Applies to `job` as a fresh job seeker.
    ///
    /// # Errors
    ///
    /// Returns an error if the application is refused.
    pub async fn apply(&self, job: &Job) -> eyre::Result<(Actor, Application)> {
        let seeker = Actor::job_seeker(UserId::new());
        let applicant = ApplicantSnapshot::new(seeker.id(), "Grace Hopper", "grace@example.com");
        let application = self
            .service
            .submit_application(
                &seeker,
                SubmitApplicationRequest::new(job.id(), applicant)
                    .with_cv("https://files.example.com/cv.pdf", "cv.pdf"),
            )
            .await?;
        Ok((seeker, application))
    }
}

/// Provides a board with the default configuration.
#[fixture]
pub fn board() -> Board {
    Board::with_config(PipelineConfig::default())
}

/// Builds a developer job in `stack`.
#[must_use]
pub fn developer_job(stack: StackId) -> Job {
    Job::new("Platform Engineer", StackRef::new(stack, "Rust"), JobType::Developer)
}

/// Builds a submission carrying only a repository link.
#[must_use]
pub fn repository_link() -> TaskSubmission {
    TaskSubmission {
        github_link: Some("https://github.com/grace/compiler".to_owned()),
        ..TaskSubmission::default()
    }
}
