//! Application status pipeline and task review lifecycle.
//!
//! Admins move applications through a detailed internal status while
//! applicants see only a derived external projection. Assessment tasks
//! run a sub-state machine of their own; reviewing a task is the one point
//! where it drives the application status. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
