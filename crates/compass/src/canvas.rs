//! Raster Canvas
//!
//! Pixel-buffer draw target bridging `embedded-graphics` primitives onto an
//! `image` RGB buffer, plus the gradient fills and rotated blit the
//! primitive set does not cover. Out-of-bounds pixels are clipped silently.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;
use image::{Rgb, RgbImage};

/// Square RGB drawing surface
pub struct Canvas {
    buffer: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a background color
    pub fn new(width: u32, height: u32, background: Rgb888) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, to_rgb(background)),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Consume the canvas into its pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// Fill a disc with a top-left to bottom-right linear gradient
    pub fn fill_gradient_disc(&mut self, cx: i32, cy: i32, radius: i32, from: Rgb888, to: Rgb888) {
        // Gradient parameter is the projection onto the (1, 1) diagonal,
        // spanning from (-r, -r) to (r, r)
        let span = (4 * radius) as f64;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let t = ((dx + radius + dy + radius) as f64 / span).clamp(0.0, 1.0);
                self.put(cx + dx, cy + dy, lerp(from, to, t));
            }
        }
    }

    /// Fill an axis-aligned rectangle with a diagonal linear gradient
    pub fn fill_gradient_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        from: Rgb888,
        to: Rgb888,
    ) {
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                let t = (col as f64 / width as f64 + row as f64 / height as f64) / 2.0;
                self.put(x + col, y + row, lerp(from, to, t));
            }
        }
    }

    /// Copy `src` rotated 90° counter-clockwise, so its contents read
    /// bottom-to-top, with the rotated block centered at (cx, cy)
    pub fn blit_rotated_ccw(&mut self, src: &Canvas, cx: i32, cy: i32) {
        let (w, h) = (src.width() as i32, src.height() as i32);
        let x0 = cx - h / 2;
        let y0 = cy - w / 2;
        for sy in 0..h {
            for sx in 0..w {
                let pixel = *src.buffer.get_pixel(sx as u32, sy as u32);
                self.put_rgb(x0 + sy, y0 + (w - 1 - sx), pixel);
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb888) {
        self.put_rgb(x, y, to_rgb(color));
    }

    fn put_rgb(&mut self, x: i32, y: i32, pixel: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.buffer.width() && (y as u32) < self.buffer.height()
        {
            self.buffer.put_pixel(x as u32, y as u32, pixel);
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.buffer.width(), self.buffer.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, color);
        }
        Ok(())
    }
}

fn to_rgb(color: Rgb888) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

fn lerp(from: Rgb888, to: Rgb888, t: f64) -> Rgb888 {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb888::new(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}
