//! Compass Export Tests
//!
//! Exercises PNG delivery from a finished session and from explicit scores.

use pragvalues::commands::assessment::{answer, begin, next};
use pragvalues::commands::export::{export_result, export_scores};
use pragvalues::state::AppState;
use pragvalues_core::{Answer, QUESTIONS_PER_AXIS};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn test_export_after_full_assessment() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    for _ in 0..2 * QUESTIONS_PER_AXIS {
        answer(&mut state, Answer::Agree);
        next(&mut state);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pragvalues-result.png");
    export_result(&state, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

#[test]
fn test_export_scores_matches_classification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explicit.png");
    let summary = export_scores(24, 25, &path).unwrap();

    // 24 is strategic-low, 25 is cultural-high
    assert_eq!(summary.title, "The Principled Paleolibertarian");
    assert!(path.exists());
}

#[test]
fn test_export_rejects_unfinished_session() {
    let mut state = AppState::new().unwrap();
    begin(&mut state);
    let dir = tempfile::tempdir().unwrap();
    assert!(export_result(&state, &dir.path().join("early.png")).is_err());
}

#[test]
fn test_export_is_deterministic_for_same_scores() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");
    export_scores(17, 33, &first).unwrap();
    export_scores(17, 33, &second).unwrap();
    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}
