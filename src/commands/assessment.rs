//! Assessment Commands
//!
//! Named commands for every user action on the assessment: begin, answer,
//! next, back, reset, plus the view/results queries. Mutating commands
//! report whether the transition applied; rejected transitions are ordinary
//! no-ops, never errors.

use tracing::debug;

use pragvalues_core::Answer;

use crate::models::{ResultsSummary, ViewSnapshot};
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Leave the intro screen and show the first question
pub fn begin(state: &mut AppState) -> bool {
    debug!("command: begin");
    state.assessment_mut().begin()
}

/// Record an answer for the current question
pub fn answer(state: &mut AppState, answer: Answer) -> bool {
    debug!(answer = %answer, "command: answer");
    state.assessment_mut().answer(answer)
}

/// Move forward one question, the next axis, or the results screen
pub fn next(state: &mut AppState) -> bool {
    debug!("command: next");
    state.assessment_mut().next()
}

/// Move back one question
pub fn back(state: &mut AppState) -> bool {
    debug!("command: back");
    state.assessment_mut().back()
}

/// Discard all progress and return to the intro screen
pub fn reset(state: &mut AppState) {
    debug!("command: reset");
    state.assessment_mut().restart();
}

/// Current presentation-layer snapshot
pub fn view(state: &AppState) -> ViewSnapshot {
    state.assessment().snapshot()
}

/// Completion payload, available once the assessment is finished
pub fn results(state: &AppState) -> AppResult<ResultsSummary> {
    state.assessment().results()
}
