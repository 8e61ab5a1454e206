//! Assessment Session
//!
//! The stage/index state machine driving one assessment attempt. Transitions
//! are total functions: invalid calls are no-ops reported through the return
//! value, never errors. The results stage is reachable only by answering
//! every question, which is what lets `outcome` score both sheets safely.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::models::{Answer, AnswerSheet, Axis, AxisScore, QUESTIONS_PER_AXIS};
use crate::scoring::{self, Profile};

/// Stage of the assessment flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Welcome screen, before any question is shown
    #[default]
    Intro,
    /// Answering the strategic axis
    Strategic,
    /// Answering the cultural axis
    Cultural,
    /// Assessment finished, scores available
    Results,
}

impl Stage {
    /// The axis being answered in this stage, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Stage::Strategic => Some(Axis::Strategic),
            Stage::Cultural => Some(Axis::Cultural),
            Stage::Intro | Stage::Results => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Intro => "intro",
            Stage::Strategic => "strategic",
            Stage::Cultural => "cultural",
            Stage::Results => "results",
        };
        write!(f, "{name}")
    }
}

/// Scores and profile of a finished assessment
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub strategic: AxisScore,
    pub cultural: AxisScore,
    pub profile: &'static Profile,
}

/// One assessment attempt: current stage, question cursor, and the two
/// per-axis answer sheets. Lives entirely in memory; `reset` is the only way
/// back to the intro stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    stage: Stage,
    current: usize,
    strategic: AnswerSheet,
    cultural: AnswerSheet,
}

impl Session {
    /// Create a fresh session at the intro stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Zero-based index of the question cursor
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The axis currently being answered, if any
    pub fn active_axis(&self) -> Option<Axis> {
        self.stage.axis()
    }

    /// The answer sheet for an axis
    pub fn sheet(&self, axis: Axis) -> &AnswerSheet {
        match axis {
            Axis::Strategic => &self.strategic,
            Axis::Cultural => &self.cultural,
        }
    }

    /// The answer recorded for the current question, if any
    pub fn current_answer(&self) -> Option<Answer> {
        self.active_axis()
            .and_then(|axis| self.sheet(axis).get(self.current))
    }

    /// Leave the intro stage and show the first strategic question.
    /// No-op unless the session is at the intro stage.
    pub fn start(&mut self) -> bool {
        if self.stage != Stage::Intro {
            return false;
        }
        self.stage = Stage::Strategic;
        self.current = 0;
        true
    }

    /// Record an answer for the current question, overwriting any prior
    /// value. No-op outside the question stages.
    pub fn record_answer(&mut self, answer: Answer) -> bool {
        let index = self.current;
        match self.active_axis() {
            Some(Axis::Strategic) => self.strategic.record(index, answer),
            Some(Axis::Cultural) => self.cultural.record(index, answer),
            None => false,
        }
    }

    /// Whether the current question has been answered, gating `advance`
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Whether `retreat` would move the cursor. False outside the question
    /// stages and at the very first question, which cannot lead back to the
    /// intro stage.
    pub fn can_retreat(&self) -> bool {
        match self.stage {
            Stage::Strategic => self.current > 0,
            Stage::Cultural => true,
            Stage::Intro | Stage::Results => false,
        }
    }

    /// Move to the next question, the next axis, or the results stage.
    /// No-op while the current question is unanswered.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if self.current < QUESTIONS_PER_AXIS - 1 {
            self.current += 1;
            return true;
        }
        match self.stage {
            Stage::Strategic => {
                self.stage = Stage::Cultural;
                self.current = 0;
                true
            }
            Stage::Cultural => {
                self.stage = Stage::Results;
                true
            }
            Stage::Intro | Stage::Results => false,
        }
    }

    /// Move back one question, crossing from the first cultural question to
    /// the last strategic one. No-op at the first strategic question.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        if self.current > 0 {
            self.current -= 1;
        } else {
            self.stage = Stage::Strategic;
            self.current = QUESTIONS_PER_AXIS - 1;
        }
        true
    }

    /// Discard all progress and return to the intro stage. Always succeeds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the assessment has reached the results stage
    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Results
    }

    /// Overall progress through the twenty questions, in percent
    pub fn overall_progress(&self) -> f64 {
        let step = (self.current + 1) as f64 / QUESTIONS_PER_AXIS as f64 * 50.0;
        match self.stage {
            Stage::Intro => 0.0,
            Stage::Strategic => step,
            Stage::Cultural => 50.0 + step,
            Stage::Results => 100.0,
        }
    }

    /// Score both sheets and classify the result.
    ///
    /// Only valid at the results stage, where the state machine guarantees
    /// both sheets are fully answered.
    pub fn outcome(&self) -> CoreResult<Outcome> {
        if self.stage != Stage::Results {
            return Err(CoreError::NotFinished(self.stage.to_string()));
        }
        let strategic = scoring::score(&self.strategic)?;
        let cultural = scoring::score(&self.cultural)?;
        Ok(Outcome {
            strategic,
            cultural,
            profile: scoring::classify(strategic, cultural),
        })
    }
}
