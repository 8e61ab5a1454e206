//! PragValues Core
//!
//! Question bank, answer model, session state machine, scorer, and
//! classifier for the PragValues assessment. This crate has no dependency on
//! rendering or any application shell.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `models` - Axis, agreement scale, answer sheet, and axis score types
//! - `bank` - The embedded, validated statement corpus
//! - `session` - The intro/strategic/cultural/results state machine
//! - `scoring` - Sheet summation and the four-profile classification

pub mod bank;
pub mod error;
pub mod models;
pub mod scoring;
pub mod session;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Data Model ─────────────────────────────────────────────────────────
pub use models::{Answer, AnswerSheet, Axis, AxisScore, Band, LOW_BAND_MAX, QUESTIONS_PER_AXIS};

// ── Question Bank ──────────────────────────────────────────────────────
pub use bank::QuestionBank;

// ── Session State Machine ──────────────────────────────────────────────
pub use session::{Outcome, Session, Stage};

// ── Scoring & Classification ───────────────────────────────────────────
pub use scoring::{classify, score, Profile, PROFILES};
