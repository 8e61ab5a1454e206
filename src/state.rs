//! Application State
//!
//! State owned by the running shell. A single assessment service mutated by
//! one sequential actor, so no locking is needed.

use crate::services::AssessmentService;
use crate::utils::error::AppResult;

/// State threaded through the command layer
#[derive(Debug)]
pub struct AppState {
    assessment: AssessmentService,
}

impl AppState {
    /// Create app state over the built-in question bank
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            assessment: AssessmentService::new()?,
        })
    }

    /// Read access to the assessment service
    pub fn assessment(&self) -> &AssessmentService {
        &self.assessment
    }

    /// Write access to the assessment service
    pub fn assessment_mut(&mut self) -> &mut AssessmentService {
        &mut self.assessment
    }
}
