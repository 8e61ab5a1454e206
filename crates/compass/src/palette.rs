//! Compass Palette
//!
//! The fixed color set of the exported chart.

use embedded_graphics::pixelcolor::Rgb888;

/// Surface background
pub const BACKGROUND: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);

/// Light neutral grid lines
pub const GRID: Rgb888 = Rgb888::new(0xf1, 0xf5, 0xf9);

/// Bold crosshair axis dividers
pub const AXIS: Rgb888 = Rgb888::new(0x94, 0xa3, 0xb8);

/// Quadrant label text
pub const QUADRANT_TEXT: Rgb888 = Rgb888::new(0x47, 0x55, 0x69);

/// Dichotomy caption text
pub const CAPTION_TEXT: Rgb888 = Rgb888::new(0x33, 0x41, 0x55);

/// Solid ring under the marker disc
pub const MARKER_RING: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);

/// Start of the marker/badge gradient
pub const GRADIENT_START: Rgb888 = Rgb888::new(0x25, 0x63, 0xeb);

/// End of the marker/badge gradient
pub const GRADIENT_END: Rgb888 = Rgb888::new(0x33, 0x41, 0x55);

/// Badge legend text
pub const BADGE_TEXT: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);
