//! In-memory adapters backing the pipeline ports.

mod application;
mod job;

pub use application::InMemoryApplicationRepository;
pub use job::InMemoryJobRepository;
