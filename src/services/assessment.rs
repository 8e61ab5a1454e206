//! Assessment Service
//!
//! Owns the question bank and the live session, and projects them into the
//! presentation-layer models. All mutation goes through the session's
//! command methods; invalid transitions stay no-ops.

use pragvalues_core::{Answer, Outcome, QuestionBank, Session};

use crate::models::{ResultsSummary, ViewSnapshot};
use crate::utils::error::AppResult;

/// One assessment attempt wired to its statement corpus
#[derive(Debug)]
pub struct AssessmentService {
    bank: QuestionBank,
    session: Session,
}

impl AssessmentService {
    /// Create a service over the built-in question bank
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_bank(QuestionBank::builtin()?))
    }

    /// Create a service over a specific question bank
    pub fn with_bank(bank: QuestionBank) -> Self {
        Self {
            bank,
            session: Session::new(),
        }
    }

    /// The underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Leave the intro screen and show the first question
    pub fn begin(&mut self) -> bool {
        self.session.start()
    }

    /// Record an answer for the current question
    pub fn answer(&mut self, answer: Answer) -> bool {
        self.session.record_answer(answer)
    }

    /// Move forward one question (gated on the current one being answered)
    pub fn next(&mut self) -> bool {
        self.session.advance()
    }

    /// Move back one question
    pub fn back(&mut self) -> bool {
        self.session.retreat()
    }

    /// Discard all progress and return to the intro screen
    pub fn restart(&mut self) {
        self.session.reset();
    }

    /// Project the session into the presentation-layer snapshot
    pub fn snapshot(&self) -> ViewSnapshot {
        let axis = self.session.active_axis();
        let index = self.session.current_index();
        ViewSnapshot {
            stage: self.session.stage(),
            part_label: axis.map(|a| a.part_label().to_string()),
            current_index: index,
            prompt: axis
                .and_then(|a| self.bank.prompt(a, index))
                .map(str::to_string),
            answer: self.session.current_answer(),
            is_advance_allowed: self.session.can_advance(),
            is_retreat_allowed: self.session.can_retreat(),
            progress_percent: self.session.overall_progress().round() as u8,
        }
    }

    /// Scores and profile of the finished assessment
    pub fn outcome(&self) -> AppResult<Outcome> {
        Ok(self.session.outcome()?)
    }

    /// The completion payload for the results screen
    pub fn results(&self) -> AppResult<ResultsSummary> {
        Ok(ResultsSummary::from_outcome(&self.session.outcome()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pragvalues_core::{Stage, QUESTIONS_PER_AXIS};

    fn service() -> AssessmentService {
        AssessmentService::new().unwrap()
    }

    fn answer_axis(service: &mut AssessmentService, answer: Answer) {
        for _ in 0..QUESTIONS_PER_AXIS {
            assert!(service.answer(answer));
            assert!(service.next());
        }
    }

    #[test]
    fn test_intro_snapshot() {
        let service = service();
        let snapshot = service.snapshot();
        assert_eq!(snapshot.stage, Stage::Intro);
        assert_eq!(snapshot.prompt, None);
        assert!(!snapshot.is_advance_allowed);
        assert!(!snapshot.is_retreat_allowed);
        assert_eq!(snapshot.progress_percent, 0);
    }

    #[test]
    fn test_question_snapshot_carries_prompt() {
        let mut service = service();
        service.begin();
        let snapshot = service.snapshot();
        assert_eq!(snapshot.stage, Stage::Strategic);
        assert_eq!(snapshot.part_label.as_deref(), Some("Part 1: Strategic Axis"));
        assert!(snapshot.prompt.unwrap().contains("political principle"));
        assert_eq!(snapshot.progress_percent, 5);
    }

    #[test]
    fn test_snapshot_gates_track_answers() {
        let mut service = service();
        service.begin();
        assert!(!service.snapshot().is_advance_allowed);
        service.answer(Answer::Agree);
        let snapshot = service.snapshot();
        assert!(snapshot.is_advance_allowed);
        assert_eq!(snapshot.answer, Some(Answer::Agree));
    }

    #[test]
    fn test_prompt_crosses_axis_boundary() {
        let mut service = service();
        service.begin();
        answer_axis(&mut service, Answer::Agree);
        let snapshot = service.snapshot();
        assert_eq!(snapshot.stage, Stage::Cultural);
        assert_eq!(snapshot.part_label.as_deref(), Some("Part 2: Cultural Axis"));
        assert!(snapshot.prompt.unwrap().contains("wokeism"));
    }

    #[test]
    fn test_results_after_completion() {
        let mut service = service();
        service.begin();
        answer_axis(&mut service, Answer::StronglyAgree);
        answer_axis(&mut service, Answer::StronglyAgree);
        let results = service.results().unwrap();
        assert_eq!(results.strategic_score, 40);
        assert_eq!(results.cultural_score, 40);
        assert_eq!(results.title, "The Neo-Prag");
    }

    #[test]
    fn test_results_before_completion_fails() {
        let service = service();
        assert!(service.results().is_err());
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut service = service();
        service.begin();
        service.answer(Answer::StronglyAgree);
        service.restart();
        let snapshot = service.snapshot();
        assert_eq!(snapshot.stage, Stage::Intro);
        assert_eq!(snapshot.current_index, 0);
    }
}
