//! Results Summary Model
//!
//! The completion payload handed to the presentation layer: both scores,
//! the classified profile, the per-axis pole names, and the normalized plot
//! point for the compass.

use serde::Serialize;

use pragvalues_compass::PlotPoint;
use pragvalues_core::{classify, Axis, AxisScore, Outcome};

/// Everything the results screen shows for a finished assessment
#[derive(Debug, Clone, Serialize)]
pub struct ResultsSummary {
    pub strategic_score: u32,
    pub cultural_score: u32,
    /// Classified profile title
    pub title: String,
    /// Classified profile description
    pub description: String,
    /// Pole the strategic score falls on (Principled / Pragmatist)
    pub strategic_pole: String,
    /// Pole the cultural score falls on (Cosmopolitan / Paleo)
    pub cultural_pole: String,
    /// Normalized plotting coordinates for the compass marker
    pub plot: PlotPoint,
}

impl ResultsSummary {
    /// Build the summary for a score pair
    pub fn from_scores(strategic: AxisScore, cultural: AxisScore) -> Self {
        let profile = classify(strategic, cultural);
        Self {
            strategic_score: strategic.value(),
            cultural_score: cultural.value(),
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            strategic_pole: Axis::Strategic.pole_name(strategic.band()).to_string(),
            cultural_pole: Axis::Cultural.pole_name(cultural.band()).to_string(),
            plot: PlotPoint::from_scores(strategic, cultural),
        }
    }

    /// Build the summary from a finished session's outcome
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self::from_scores(outcome.strategic, outcome.cultural)
    }
}
