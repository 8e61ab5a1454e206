//! View Snapshot Model
//!
//! What the presentation layer needs at any moment: the stage, the current
//! prompt and answer, the navigation gates, and overall progress.

use serde::Serialize;

use pragvalues_core::{Answer, Stage};

/// Point-in-time view of the assessment for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    /// Current stage of the flow
    pub stage: Stage,
    /// Part heading while a question stage is active
    pub part_label: Option<String>,
    /// Zero-based question cursor
    pub current_index: usize,
    /// Statement text for the current question, if one is showing
    pub prompt: Option<String>,
    /// Answer recorded for the current question, if any
    pub answer: Option<Answer>,
    /// Whether the Next action would move forward
    pub is_advance_allowed: bool,
    /// Whether the Back action is offered at all
    pub is_retreat_allowed: bool,
    /// Overall progress through the twenty questions, rounded percent
    pub progress_percent: u8,
}
