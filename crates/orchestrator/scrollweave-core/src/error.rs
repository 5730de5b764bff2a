//! Registration-time error taxonomy.
//!
//! Runtime degradation (a target vanishing mid-page, a zero-area
//! container) never surfaces here; those paths log and no-op so one
//! broken feature cannot block the rest of the page. Errors are reserved
//! for host mistakes detectable at registration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A referenced container/element path did not resolve.
    #[error("target '{0}' not found")]
    MissingTarget(String),

    /// A computed width/height was zero or negative where a positive
    /// extent is required.
    #[error("invalid dimension for '{target}': {value}")]
    InvalidDimension { target: String, value: f32 },

    /// A visualization section id was registered twice.
    #[error("section '{0}' already registered")]
    DuplicateSection(String),

    /// A directive failed basic validation.
    #[error("invalid directive: {0}")]
    InvalidDirective(String),
}
