//! Core Error Types
//!
//! Defines the error types used across the PragValues workspace. These are
//! dependency-free (only thiserror + std) to keep the core crate lightweight.
//!
//! Invalid session transitions are deliberately NOT errors; the state machine
//! treats them as no-ops. Errors here cover contract violations (scoring an
//! incomplete sheet, out-of-range scores) and bad configuration data.

use thiserror::Error;

/// Core error type for the PragValues workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Question bank or other configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// An answer sheet was scored before every question was answered
    #[error("Incomplete answer sheet: {answered} of {expected} questions answered")]
    IncompleteSheet { answered: usize, expected: usize },

    /// A raw score value outside the valid [10, 40] range
    #[error("Score out of range: {0} (expected 10..=40)")]
    ScoreOutOfRange(u32),

    /// Results were requested before the assessment reached the results stage
    #[error("Assessment not finished: current stage is {0}")]
    NotFinished(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
