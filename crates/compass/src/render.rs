//! Compass Renderer
//!
//! Layered composition of the result compass: background, grid, crosshair
//! axis dividers, quadrant labels, dichotomy captions, the score marker, and
//! the badge. Pure with respect to the score pair; every invocation with the
//! same scores produces the same pixels.

use embedded_graphics::mono_font::ascii::{FONT_7X13_BOLD, FONT_9X15_BOLD, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Text};
use image::RgbImage;

use pragvalues_core::scoring::{
    BELTWAY_PRAGMATIST, NEO_PRAG, PRINCIPLED_PALEOLIBERTARIAN, RADICAL_COSMOPOLITAN,
};
use pragvalues_core::{Axis, AxisScore};

use crate::canvas::Canvas;
use crate::error::CompassResult;
use crate::geometry::{self, PlotPoint, CHART_PADDING, CHART_SIZE, DRAWABLE_SIZE};
use crate::palette;

const GRID_DIVISIONS: u32 = 10;
const MARKER_RING_RADIUS: i32 = 16;
const MARKER_RADIUS: i32 = 12;
const BADGE_WIDTH: u32 = 90;
const BADGE_HEIGHT: u32 = 28;
const BADGE_LABEL: &str = "PragValues";

/// Render the compass for a score pair at the fixed export resolution
pub fn render(strategic: AxisScore, cultural: AxisScore) -> CompassResult<RgbImage> {
    let mut canvas = Canvas::new(CHART_SIZE, CHART_SIZE, palette::BACKGROUND);
    draw_grid(&mut canvas)?;
    draw_axes(&mut canvas)?;
    draw_quadrant_labels(&mut canvas)?;
    draw_captions(&mut canvas)?;
    draw_marker(&mut canvas, &PlotPoint::from_scores(strategic, cultural))?;
    draw_badge(&mut canvas)?;
    Ok(canvas.into_image())
}

/// Uniform 10x10 grid over the drawable region, 11 lines each direction
fn draw_grid(canvas: &mut Canvas) -> CompassResult<()> {
    let style = PrimitiveStyle::with_stroke(palette::GRID, 1);
    let near = CHART_PADDING as i32;
    let far = (CHART_PADDING + DRAWABLE_SIZE) as i32;
    for i in 0..=GRID_DIVISIONS {
        let pos = (CHART_PADDING + i * DRAWABLE_SIZE / GRID_DIVISIONS) as i32;
        Line::new(Point::new(pos, near), Point::new(pos, far))
            .into_styled(style)
            .draw(canvas)?;
        Line::new(Point::new(near, pos), Point::new(far, pos))
            .into_styled(style)
            .draw(canvas)?;
    }
    Ok(())
}

/// Bold crosshair through the center of the drawable region
fn draw_axes(canvas: &mut Canvas) -> CompassResult<()> {
    let style = PrimitiveStyle::with_stroke(palette::AXIS, 3);
    let near = CHART_PADDING as i32;
    let far = (CHART_PADDING + DRAWABLE_SIZE) as i32;
    let mid = (CHART_PADDING + DRAWABLE_SIZE / 2) as i32;
    Line::new(Point::new(mid, near), Point::new(mid, far))
        .into_styled(style)
        .draw(canvas)?;
    Line::new(Point::new(near, mid), Point::new(far, mid))
        .into_styled(style)
        .draw(canvas)?;
    Ok(())
}

/// Profile names pinned near the four corners, independent of the result
fn draw_quadrant_labels(canvas: &mut Canvas) -> CompassResult<()> {
    let style = MonoTextStyle::new(&FONT_9X15_BOLD, palette::QUADRANT_TEXT);
    let near = CHART_PADDING as i32;
    let far = (CHART_PADDING + DRAWABLE_SIZE) as i32;
    let (left, right) = (near + 16, far - 16);

    let top_left = RADICAL_COSMOPOLITAN.quadrant_label;
    Text::new(top_left[0], Point::new(left, near + 24), style).draw(canvas)?;
    Text::new(top_left[1], Point::new(left, near + 40), style).draw(canvas)?;

    let top_right = BELTWAY_PRAGMATIST.quadrant_label;
    Text::with_alignment(top_right[0], Point::new(right, near + 24), style, Alignment::Right)
        .draw(canvas)?;
    Text::with_alignment(top_right[1], Point::new(right, near + 40), style, Alignment::Right)
        .draw(canvas)?;

    let bottom_left = PRINCIPLED_PALEOLIBERTARIAN.quadrant_label;
    Text::new(bottom_left[0], Point::new(left, far - 24), style).draw(canvas)?;
    Text::new(bottom_left[1], Point::new(left, far - 8), style).draw(canvas)?;

    let bottom_right = NEO_PRAG.quadrant_label;
    Text::with_alignment(bottom_right[0], Point::new(right, far - 16), style, Alignment::Right)
        .draw(canvas)?;
    Ok(())
}

/// Dichotomy captions: strategic along the bottom edge, cultural rotated
/// along the left edge
fn draw_captions(canvas: &mut Canvas) -> CompassResult<()> {
    let style = MonoTextStyle::new(&FONT_9X18_BOLD, palette::CAPTION_TEXT);
    let mid = (CHART_PADDING + DRAWABLE_SIZE / 2) as i32;

    Text::with_alignment(
        Axis::Strategic.dichotomy_ascii(),
        Point::new(mid, CHART_SIZE as i32 - 16),
        style,
        Alignment::Center,
    )
    .draw(canvas)?;

    // The left caption is drawn onto a horizontal strip, then blitted
    // rotated so it reads bottom-to-top
    let text = Axis::Cultural.dichotomy_ascii();
    let strip_width = text.len() as u32 * 9 + 2;
    let mut strip = Canvas::new(strip_width, 22, palette::BACKGROUND);
    Text::new(text, Point::new(1, 16), style).draw(&mut strip)?;
    canvas.blit_rotated_ccw(&strip, 16, mid);
    Ok(())
}

/// Bordered gradient dot at the score position
fn draw_marker(canvas: &mut Canvas, point: &PlotPoint) -> CompassResult<()> {
    let (x, y) = geometry::marker_center(point);
    let (x, y) = (x.round() as i32, y.round() as i32);
    Circle::with_center(Point::new(x, y), (MARKER_RING_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(palette::MARKER_RING))
        .draw(canvas)?;
    canvas.fill_gradient_disc(
        x,
        y,
        MARKER_RADIUS,
        palette::GRADIENT_START,
        palette::GRADIENT_END,
    );
    Ok(())
}

/// Branded badge anchored under the bottom-right of the drawable region
fn draw_badge(canvas: &mut Canvas) -> CompassResult<()> {
    let x = (CHART_PADDING + DRAWABLE_SIZE - BADGE_WIDTH) as i32;
    let y = (CHART_SIZE - 32 - BADGE_HEIGHT / 2) as i32;
    canvas.fill_gradient_rect(
        x,
        y,
        BADGE_WIDTH,
        BADGE_HEIGHT,
        palette::GRADIENT_START,
        palette::GRADIENT_END,
    );
    let style = MonoTextStyle::new(&FONT_7X13_BOLD, palette::BADGE_TEXT);
    Text::with_alignment(
        BADGE_LABEL,
        Point::new(x + BADGE_WIDTH as i32 / 2, y + 18),
        style,
        Alignment::Center,
    )
    .draw(canvas)?;
    Ok(())
}
