//! Pipeline configuration.
//!
//! Hosts construct [`PipelineConfig`] directly or load it from JSON; every
//! field has a default so partial documents are accepted.
//!
//! # Examples
//!
//! ```
//! use talentboard::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_json(r#"{ "default_deadline_days": 7 }"#)
//!     .expect("valid config");
//! assert_eq!(config.default_deadline_days, 7);
//! assert_eq!(config.max_deadline_days, 60);
//! ```

use crate::pipeline::domain::{StatusTransitionPolicy, SubmissionField, SubmissionFieldKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable pipeline behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Task deadline used when neither the request nor the job sets one.
    pub default_deadline_days: u16,
    /// Longest accepted task deadline.
    pub max_deadline_days: u16,
    /// Submission fields used when neither the request nor the job sets any.
    pub default_submission_fields: Vec<SubmissionField>,
    /// Days an admin invite stays valid.
    pub invite_validity_days: u16,
    /// Rules for manual status changes.
    pub transition_policy: StatusTransitionPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_deadline_days: 5,
            max_deadline_days: 60,
            default_submission_fields: vec![
                SubmissionField::required(SubmissionFieldKind::GithubLink, "GitHub Repository"),
                SubmissionField::optional(SubmissionFieldKind::FileUpload, "Project Files"),
            ],
            invite_validity_days: 7,
            transition_policy: StatusTransitionPolicy::Permissive,
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this shape.
    #[error("invalid pipeline configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid pipeline configuration: {0}")]
    Invalid(&'static str),
}

impl PipelineConfig {
    /// Returns a configuration that refuses to reopen hired or rejected
    /// applications.
    #[must_use]
    pub fn locked_terminal() -> Self {
        Self {
            transition_policy: StatusTransitionPolicy::LockTerminal,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or
    /// [`ConfigError::Invalid`] when [`Self::validate`] fails.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the deadline settings are coherent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a deadline is zero or the
    /// default exceeds the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_deadline_days == 0 {
            return Err(ConfigError::Invalid("max_deadline_days must be positive"));
        }
        if self.default_deadline_days == 0 || self.default_deadline_days > self.max_deadline_days {
            return Err(ConfigError::Invalid(
                "default_deadline_days must be within 1..=max_deadline_days",
            ));
        }
        if self.invite_validity_days == 0 {
            return Err(ConfigError::Invalid("invite_validity_days must be positive"));
        }
        Ok(())
    }
}
