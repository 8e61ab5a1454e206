//! Scorer and Classifier
//!
//! Reduces a completed answer sheet to an axis score and maps the score pair
//! onto one of the four fixed profiles. The band predicates partition the
//! whole score-pair space, so classification is total and deterministic.

use crate::error::{CoreError, CoreResult};
use crate::models::{AnswerSheet, AxisScore, Band, QUESTIONS_PER_AXIS};

/// Sum a completed sheet into its axis score.
///
/// Callers are expected to score only fully answered sheets; an incomplete
/// sheet is a contract violation and fails loudly rather than producing a
/// misleading partial sum.
pub fn score(sheet: &AnswerSheet) -> CoreResult<AxisScore> {
    if !sheet.is_complete() {
        return Err(CoreError::IncompleteSheet {
            answered: sheet.answered_count(),
            expected: QUESTIONS_PER_AXIS,
        });
    }
    let total = sheet.entries().iter().flatten().map(|a| a.points()).sum();
    AxisScore::new(total)
}

/// One of the four named assessment outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Display title
    pub title: &'static str,
    /// Full outcome description
    pub description: &'static str,
    /// Lines of the label pinned to this profile's compass quadrant
    pub quadrant_label: &'static [&'static str],
}

/// Strategic low, cultural low
pub const RADICAL_COSMOPOLITAN: Profile = Profile {
    title: "The Radical Cosmopolitan",
    description: "You are a principled libertarian who rejects compromise and believes in a \
        consistent, rights-based philosophy. Your focus is on social liberalism, open borders, \
        and anti-war positions, and you see nationalism and social conservatism as major threats \
        to liberty. You believe the culture war is a distraction from the core principles of \
        individual rights and free markets.",
    quadrant_label: &["Radical", "Cosmopolitan"],
};

/// Strategic high, cultural low
pub const BELTWAY_PRAGMATIST: Profile = Profile {
    title: "The Beltway Pragmatist",
    description: "You believe in compromising to achieve mainstream acceptance and political \
        relevance. Your cultural sensibilities align more with classical liberals or moderate \
        Democrats than with the populist right. You prioritize appearing \"sensible\" and \
        professional, often through coalitions with the mainstream establishment.",
    quadrant_label: &["Beltway", "Pragmatist"],
};

/// Strategic low, cultural high
pub const PRINCIPLED_PALEOLIBERTARIAN: Profile = Profile {
    title: "The Principled Paleolibertarian",
    description: "You are a philosophically radical libertarian who rejects pragmatism, but \
        your analysis leads you to conclusions that align with the cultural right. You use \
        property rights theory to defend concepts like covenant communities and immigration \
        restrictionism on principle. You see compromisers as unprincipled opportunists.",
    quadrant_label: &["Principled", "Paleolibertarian"],
};

/// Strategic high, cultural high
pub const NEO_PRAG: Profile = Profile {
    title: "The Neo-Prag",
    description: "You are a pragmatist whose central strategy is to win short-term \"culture \
        war\" victories by aligning with the anti-establishment right. You see \"what works\" in \
        terms of gaining followers and influence within this sphere. You are willing to \
        compromise or abandon core libertarian principles in order to combat what you perceive \
        as the greater threat of cultural leftism.",
    quadrant_label: &["Neo-Prag"],
};

/// All profiles in quadrant order: top-left, top-right, bottom-left, bottom-right
pub const PROFILES: [&Profile; 4] = [
    &RADICAL_COSMOPOLITAN,
    &BELTWAY_PRAGMATIST,
    &PRINCIPLED_PALEOLIBERTARIAN,
    &NEO_PRAG,
];

/// Map a score pair onto its profile
pub fn classify(strategic: AxisScore, cultural: AxisScore) -> &'static Profile {
    match (strategic.band(), cultural.band()) {
        (Band::Low, Band::Low) => &RADICAL_COSMOPOLITAN,
        (Band::High, Band::Low) => &BELTWAY_PRAGMATIST,
        (Band::Low, Band::High) => &PRINCIPLED_PALEOLIBERTARIAN,
        (Band::High, Band::High) => &NEO_PRAG,
    }
}
