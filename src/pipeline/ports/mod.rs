//! Port contracts for the application pipeline.
//!
//! Ports define infrastructure-agnostic interfaces used by pipeline services.

pub mod job;
pub mod repository;

pub use job::{JobRepository, JobRepositoryError, JobRepositoryResult};
pub use repository::{
    ApplicationQuery, ApplicationRepository, ApplicationRepositoryError,
    ApplicationRepositoryResult,
};
