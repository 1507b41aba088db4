//! Talentboard: job application pipeline core.
//!
//! This crate holds the part of the job board with real state-machine
//! logic: the application status pipeline, its applicant-facing projection,
//! and the assessment task lifecycle, all behind a flat capability gate.
//!
//! # Architecture
//!
//! Talentboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`access`]: Actors, capabilities, invites, and the authorization gate
//! - [`pipeline`]: Application status, projection, and task lifecycle
//! - [`config`]: Tunable pipeline behaviour

pub mod access;
pub mod config;
pub mod pipeline;
