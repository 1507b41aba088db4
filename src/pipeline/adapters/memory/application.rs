//! In-memory application repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pipeline::{
    domain::{Application, ApplicationId, JobId, UserId},
    ports::{
        ApplicationQuery, ApplicationRepository, ApplicationRepositoryError,
        ApplicationRepositoryResult,
    },
};

/// Thread-safe in-memory application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    state: Arc<RwLock<InMemoryApplicationState>>,
}

#[derive(Debug, Default)]
struct InMemoryApplicationState {
    applications: HashMap<ApplicationId, Application>,
    applicant_job_index: HashMap<(UserId, JobId), ApplicationId>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ApplicationRepositoryError {
    ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let key = (application.applicant().id, application.job().job_id);
        if state.applicant_job_index.contains_key(&key) {
            return Err(ApplicationRepositoryError::DuplicateApplication {
                applicant: key.0,
                job: key.1,
            });
        }

        state.applicant_job_index.insert(key, application.id());
        state
            .applications
            .insert(application.id(), application.clone());
        Ok(())
    }

    async fn update(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .applications
            .get_mut(&application.id())
            .ok_or(ApplicationRepositoryError::NotFound(application.id()))?;
        *slot = application.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.applications.get(&id).cloned())
    }

    async fn query(
        &self,
        query: &ApplicationQuery,
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut matches: Vec<Application> = state
            .applications
            .values()
            .filter(|application| query.matches(application))
            .cloned()
            .collect();
        matches.sort_by_key(Application::applied_at);
        Ok(matches)
    }
}
