//! PragValues Compass
//!
//! Score-to-geometry transforms, rasterized compass rendering, and PNG
//! export for PragValues results. The renderer is a pure function of the
//! score pair; export is the only operation with a side effect.
//!
//! ## Module Organization
//!
//! - `error` - Compass error types (`CompassError`, `CompassResult`)
//! - `geometry` - Score percent mapping, plot point, marker placement
//! - `palette` - The fixed chart color set
//! - `canvas` - Pixel-buffer draw target and gradient/blit helpers
//! - `render` - The layered chart composition
//! - `export` - PNG encoding and file delivery

pub mod canvas;
pub mod error;
pub mod export;
pub mod geometry;
pub mod palette;
pub mod render;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CompassError, CompassResult};

// ── Geometry ───────────────────────────────────────────────────────────
pub use geometry::{score_percent, PlotPoint, CHART_PADDING, CHART_SIZE, DRAWABLE_SIZE};

// ── Rendering & Export ─────────────────────────────────────────────────
pub use export::{save_png, to_png_bytes, DEFAULT_EXPORT_FILENAME};
pub use render::render;
