//! Export Commands
//!
//! Renders the compass at the fixed export resolution and delivers it as a
//! PNG file. The only commands with a side effect beyond in-memory state.

use std::path::Path;

use tracing::info;

use pragvalues_compass::{render, save_png};
use pragvalues_core::AxisScore;

use crate::models::ResultsSummary;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Render the finished session's compass and write it to `path`
pub fn export_result(state: &AppState, path: &Path) -> AppResult<()> {
    let outcome = state.assessment().outcome()?;
    let image = render(outcome.strategic, outcome.cultural)?;
    save_png(&image, path)?;
    info!(path = %path.display(), "exported compass image");
    Ok(())
}

/// Render a compass for explicit raw scores and write it to `path`
pub fn export_scores(strategic: u32, cultural: u32, path: &Path) -> AppResult<ResultsSummary> {
    let strategic = AxisScore::new(strategic)?;
    let cultural = AxisScore::new(cultural)?;
    let image = render(strategic, cultural)?;
    save_png(&image, path)?;
    info!(path = %path.display(), "exported compass image");
    Ok(ResultsSummary::from_scores(strategic, cultural))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;
    use pragvalues_core::CoreError;

    #[test]
    fn test_export_requires_finished_session() {
        let state = AppState::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = export_result(&state, &dir.path().join("out.png")).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::NotFinished(_))));
    }

    #[test]
    fn test_export_scores_validates_range() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_scores(9, 25, &dir.path().join("out.png")).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::ScoreOutOfRange(9))));
    }

    #[test]
    fn test_export_scores_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let summary = export_scores(10, 40, &path).unwrap();
        assert_eq!(summary.title, "The Principled Paleolibertarian");
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
