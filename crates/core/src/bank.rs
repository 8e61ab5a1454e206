//! Question Bank
//!
//! The static statement corpus, shipped as an embedded TOML document and
//! validated against the fixed ten-statements-per-axis contract at load time.
//! Statement content is opaque configuration; the core never interprets it.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::models::{Axis, QUESTIONS_PER_AXIS};

/// The built-in statement corpus
const BUILTIN_QUESTIONS: &str = include_str!("../assets/questions.toml");

#[derive(Debug, Deserialize)]
struct BankFile {
    strategic: Vec<String>,
    cultural: Vec<String>,
}

/// Ordered statements for both axes, addressable by (axis, index)
#[derive(Debug, Clone)]
pub struct QuestionBank {
    strategic: Vec<String>,
    cultural: Vec<String>,
}

impl QuestionBank {
    /// Load the built-in question bank
    pub fn builtin() -> CoreResult<Self> {
        Self::from_toml(BUILTIN_QUESTIONS)
    }

    /// Parse a question bank from a TOML document.
    ///
    /// Each axis must carry exactly ten statements.
    pub fn from_toml(doc: &str) -> CoreResult<Self> {
        let file: BankFile =
            toml::from_str(doc).map_err(|e| CoreError::config(e.to_string()))?;
        for (axis, statements) in [
            (Axis::Strategic, &file.strategic),
            (Axis::Cultural, &file.cultural),
        ] {
            if statements.len() != QUESTIONS_PER_AXIS {
                return Err(CoreError::config(format!(
                    "{} has {} statements, expected {}",
                    axis,
                    statements.len(),
                    QUESTIONS_PER_AXIS
                )));
            }
        }
        Ok(Self {
            strategic: file.strategic,
            cultural: file.cultural,
        })
    }

    /// All statements of one axis in question order
    pub fn statements(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Strategic => &self.strategic,
            Axis::Cultural => &self.cultural,
        }
    }

    /// The statement at (axis, index), if the index is in range
    pub fn prompt(&self, axis: Axis, index: usize) -> Option<&str> {
        self.statements(axis).get(index).map(String::as_str)
    }
}
