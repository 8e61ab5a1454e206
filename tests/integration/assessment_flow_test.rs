//! Full Assessment Flow Tests
//!
//! Drives complete assessments through the command layer, the way any shell
//! would, and checks the scores, classification, and navigation rules.

use pragvalues::commands::assessment::{answer, back, begin, next, reset, results, view};
use pragvalues::state::AppState;
use pragvalues_core::{Answer, Stage, QUESTIONS_PER_AXIS};

fn answer_axis(state: &mut AppState, value: Answer) {
    for _ in 0..QUESTIONS_PER_AXIS {
        assert!(answer(state, value));
        assert!(next(state));
    }
}

#[test]
fn test_all_strongly_disagree_is_radical_cosmopolitan() {
    let mut state = AppState::new().unwrap();
    assert!(begin(&mut state));
    answer_axis(&mut state, Answer::StronglyDisagree);
    answer_axis(&mut state, Answer::StronglyDisagree);

    let summary = results(&state).unwrap();
    assert_eq!(summary.strategic_score, 10);
    assert_eq!(summary.cultural_score, 10);
    assert_eq!(summary.title, "The Radical Cosmopolitan");
    // Bottom-left of the drawable region once the vertical inversion applies
    assert_eq!(summary.plot.x_percent, 0.0);
    assert_eq!(summary.plot.y_percent, 0.0);
}

#[test]
fn test_all_strongly_agree_is_neo_prag() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    answer_axis(&mut state, Answer::StronglyAgree);
    answer_axis(&mut state, Answer::StronglyAgree);

    let summary = results(&state).unwrap();
    assert_eq!(summary.strategic_score, 40);
    assert_eq!(summary.cultural_score, 40);
    assert_eq!(summary.title, "The Neo-Prag");
    assert_eq!(summary.plot.x_percent, 100.0);
    assert_eq!(summary.plot.y_percent, 100.0);
}

#[test]
fn test_split_answers_pick_off_diagonal_profiles() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    answer_axis(&mut state, Answer::StronglyAgree);
    answer_axis(&mut state, Answer::StronglyDisagree);
    assert_eq!(results(&state).unwrap().title, "The Beltway Pragmatist");

    reset(&mut state);
    begin(&mut state);
    answer_axis(&mut state, Answer::StronglyDisagree);
    answer_axis(&mut state, Answer::StronglyAgree);
    assert_eq!(
        results(&state).unwrap().title,
        "The Principled Paleolibertarian"
    );
}

#[test]
fn test_progress_reporting_across_both_axes() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    assert_eq!(view(&state).progress_percent, 5);

    answer_axis(&mut state, Answer::Agree);
    // First cultural question
    let snapshot = view(&state);
    assert_eq!(snapshot.stage, Stage::Cultural);
    assert_eq!(snapshot.progress_percent, 55);
}

#[test]
fn test_navigation_respects_gates() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);

    // Next is rejected while unanswered; Back is hidden at the very start
    assert!(!next(&mut state));
    assert!(!view(&state).is_retreat_allowed);
    assert!(!back(&mut state));

    // Cross into the cultural axis, then step back to the last strategic
    // question
    answer_axis(&mut state, Answer::Agree);
    assert_eq!(view(&state).stage, Stage::Cultural);
    assert!(back(&mut state));
    let snapshot = view(&state);
    assert_eq!(snapshot.stage, Stage::Strategic);
    assert_eq!(snapshot.current_index, QUESTIONS_PER_AXIS - 1);

    // The earlier answer is still there and can be changed
    assert_eq!(snapshot.answer, Some(Answer::Agree));
    assert!(answer(&mut state, Answer::StronglyDisagree));
    assert_eq!(view(&state).answer, Some(Answer::StronglyDisagree));
}

#[test]
fn test_results_unavailable_until_finished() {
    let mut state = AppState::new().unwrap();
    assert!(results(&state).is_err());
    begin(&mut state);
    answer_axis(&mut state, Answer::Agree);
    assert!(results(&state).is_err());
}

#[test]
fn test_reset_supports_a_second_attempt() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    answer_axis(&mut state, Answer::StronglyAgree);
    answer_axis(&mut state, Answer::StronglyAgree);
    assert!(results(&state).is_ok());

    reset(&mut state);
    assert_eq!(view(&state).stage, Stage::Intro);
    assert_eq!(view(&state).progress_percent, 0);

    begin(&mut state);
    answer_axis(&mut state, Answer::StronglyDisagree);
    answer_axis(&mut state, Answer::StronglyDisagree);
    assert_eq!(results(&state).unwrap().title, "The Radical Cosmopolitan");
}
