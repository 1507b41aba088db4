//! Shared world state for application pipeline BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use talentboard::{
    access::Actor,
    pipeline::{
        adapters::memory::{InMemoryApplicationRepository, InMemoryJobRepository},
        domain::Application,
        services::{PipelineError, PipelineService},
    },
};

/// Service type used by the BDD world.
pub type TestPipelineService =
    PipelineService<InMemoryApplicationRepository, InMemoryJobRepository, DefaultClock>;

/// Scenario world for application pipeline behaviour tests.
pub struct PipelineWorld {
    pub service: TestPipelineService,
    pub applications: Arc<InMemoryApplicationRepository>,
    pub jobs: Arc<InMemoryJobRepository>,
    pub applicant: Option<Actor>,
    pub reviewer: Option<Actor>,
    pub application: Option<Application>,
    pub last_error: Option<PipelineError>,
}

impl PipelineWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let applications = Arc::new(InMemoryApplicationRepository::new());
        let jobs = Arc::new(InMemoryJobRepository::new());
        let service = PipelineService::new(
            Arc::clone(&applications),
            Arc::clone(&jobs),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            applications,
            jobs,
            applicant: None,
            reviewer: None,
            application: None,
            last_error: None,
        }
    }

    /// Returns the application created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no application was created yet.
    pub fn application(&self) -> Result<&Application, eyre::Report> {
        self.application
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing application in scenario world"))
    }

    /// Returns the applicant actor.
    ///
    /// # Errors
    ///
    /// Returns an error if no applicant was set up.
    pub fn applicant(&self) -> Result<&Actor, eyre::Report> {
        self.applicant
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing applicant in scenario world"))
    }

    /// Returns the reviewer actor.
    ///
    /// # Errors
    ///
    /// Returns an error if no reviewer was set up.
    pub fn reviewer(&self) -> Result<&Actor, eyre::Report> {
        self.reviewer
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing reviewer in scenario world"))
    }

    /// Records the outcome of an operation, keeping the error for `then`
    /// steps.
    pub fn record<T>(&mut self, outcome: Result<T, PipelineError>) {
        self.last_error = outcome.err();
    }
}

impl Default for PipelineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PipelineWorld {
    PipelineWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
