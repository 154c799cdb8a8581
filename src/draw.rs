//! Scan conversion of lines, rectangles, circles and triangles
//!
//! Everything here is written against [`PixelSink`], the minimal capability
//! of writing one pixel and reporting the canvas size. [`Primitives`] is
//! implemented for every sink, so the same calls draw into a bare
//! [`PixelBuffer`](crate::PixelBuffer), a [`Display`](crate::Display) or any
//! user type.
//!
//! All arithmetic is integer-only. Shapes whose bounding box misses the
//! canvas are skipped before iterating, and loops over partially visible
//! shapes are clamped to the canvas rows and columns.
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::{Color, PixelBuffer, Primitives};
//!
//! let mut canvas = match PixelBuffer::new(128, 32, [0u8; 512]) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//!
//! canvas.fill_rect(10, 5, 20, 10, Color::On);
//! canvas.circle(64, 16, 10, Color::On);
//! canvas.line(0, 31, 127, 0, Color::On);
//! canvas.fill_triangle(100, 2, 120, 2, 110, 20, Color::On);
//!
//! assert!(canvas.get(15, 10));
//! assert!(!canvas.get(35, 10));
//! ```

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// A canvas that individual pixels can be written to
pub trait PixelSink {
    /// Canvas size as (width, height) in pixels
    fn bounds(&self) -> (i32, i32);

    /// Write one pixel
    ///
    /// Implementations must ignore coordinates outside `bounds()`.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

impl<B> PixelSink for PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn bounds(&self) -> (i32, i32) {
        (i32::from(self.width()), i32::from(self.height()))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        PixelBuffer::set_pixel(self, x, y, color);
    }
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn bounds(&self) -> (i32, i32) {
        (**self).bounds()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color);
    }
}

/// Whether any part of the box `[x_min, x_max] x [y_min, y_max]` is on the canvas
fn intersects<S: PixelSink + ?Sized>(
    sink: &S,
    (x_min, x_max): (i64, i64),
    (y_min, y_max): (i64, i64),
) -> bool {
    let (width, height) = widened_bounds(sink);
    x_max >= 0 && y_max >= 0 && x_min < width && y_min < height
}

/// Canvas size widened for overflow-free coordinate arithmetic
fn widened_bounds<S: PixelSink + ?Sized>(sink: &S) -> (i64, i64) {
    let (width, height) = sink.bounds();
    (i64::from(width), i64::from(height))
}

/// Write one pixel given in widened coordinates
fn plot<S: PixelSink + ?Sized>(sink: &mut S, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        sink.set_pixel(x, y, color);
    }
}

/// Horizontal span, iterating only over the visible columns
fn hspan<S: PixelSink + ?Sized>(sink: &mut S, x: i64, y: i64, len: i64, color: Color) {
    let (width, height) = widened_bounds(sink);
    if len <= 0 || y < 0 || y >= height {
        return;
    }
    for col in x.max(0)..x.saturating_add(len).min(width) {
        plot(sink, col, y, color);
    }
}

/// Vertical span, iterating only over the visible rows
fn vspan<S: PixelSink + ?Sized>(sink: &mut S, x: i64, y: i64, len: i64, color: Color) {
    let (width, height) = widened_bounds(sink);
    if len <= 0 || x < 0 || x >= width {
        return;
    }
    for row in y.max(0)..y.saturating_add(len).min(height) {
        plot(sink, x, row, color);
    }
}

/// Whether octant offsets of `d` and more miss the canvas on either axis
///
/// The smaller coordinate of successive octant points never decreases, so
/// once this holds it holds for the rest of the octant.
fn octant_exhausted<S: PixelSink + ?Sized>(sink: &S, cx: i64, cy: i64, d: i64) -> bool {
    let (width, height) = widened_bounds(sink);
    (cx + d >= width && cx - d < 0) || (cy + d >= height && cy - d < 0)
}

/// Drawing primitives available on every [`PixelSink`]
///
/// Coordinates anywhere in the `i32` range are accepted; arithmetic is done
/// in wider integers and loops only visit rows and columns on the canvas.
pub trait Primitives: PixelSink {
    /// Horizontal span of `width` pixels starting at (x, y)
    fn hline(&mut self, x: i32, y: i32, width: i32, color: Color) {
        hspan(self, x.into(), y.into(), width.into(), color);
    }

    /// Vertical span of `height` pixels starting at (x, y)
    fn vline(&mut self, x: i32, y: i32, height: i32, color: Color) {
        vspan(self, x.into(), y.into(), height.into(), color);
    }

    /// Single-pixel Bresenham line from (x0, y0) to (x1, y1), both ends included
    ///
    /// Swapping the endpoints draws the same pixels. Steps before the canvas
    /// are skipped arithmetically instead of being walked.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        if !intersects(self, (x0.min(x1), x0.max(x1)), (y0.min(y1), y0.max(y1))) {
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y0;

        let (width, height) = widened_bounds(self);
        let limit = if steep { height } else { width };

        // The error term stays in [0, dx) after every step, which fixes how
        // many y steps the first `skipped` iterations take
        let skipped = (-x0).max(0);
        if skipped > 0 {
            let (dx, dy) = (i128::from(dx), i128::from(dy));
            let owed = i128::from(skipped) * dy - i128::from(err);
            let ysteps = if owed > 0 { (owed + dx - 1) / dx } else { 0 };
            err = (i128::from(err) - i128::from(skipped) * dy + ysteps * dx) as i64;
            y += ysteps as i64 * ystep;
        }

        for x in x0 + skipped..=x1.min(limit - 1) {
            if steep {
                plot(self, y, x, color);
            } else {
                plot(self, x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// One pixel wide rectangle outline with its top-left corner at (x, y)
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(width), i64::from(height));
        if w <= 0 || h <= 0 || !intersects(self, (x, x + w - 1), (y, y + h - 1)) {
            return;
        }
        hspan(self, x, y, w, color);
        hspan(self, x, y + h - 1, w, color);
        vspan(self, x, y, h, color);
        vspan(self, x + w - 1, y, h, color);
    }

    /// Solid rectangle with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(width), i64::from(height));
        if w <= 0 || h <= 0 || !intersects(self, (x, x + w - 1), (y, y + h - 1)) {
            return;
        }
        let (canvas_width, _) = widened_bounds(self);
        for col in x.max(0)..(x + w).min(canvas_width) {
            vspan(self, col, y, h, color);
        }
    }

    /// Midpoint circle outline centered on (x0, y0)
    ///
    /// A zero radius lights the center pixel; a negative radius draws nothing.
    fn circle(&mut self, x0: i32, y0: i32, radius: i32, color: Color) {
        let (cx, cy, r) = (i64::from(x0), i64::from(y0), i64::from(radius));
        if r < 0 || !intersects(self, (cx - r, cx + r), (cy - r, cy + r)) {
            return;
        }

        plot(self, cx, cy + r, color);
        plot(self, cx, cy - r, color);
        plot(self, cx + r, cy, color);
        plot(self, cx - r, cy, color);

        for (x, y) in Octant::new(r) {
            if octant_exhausted(self, cx, cy, x.min(y)) {
                break;
            }
            plot(self, cx + x, cy + y, color);
            plot(self, cx - x, cy + y, color);
            plot(self, cx + x, cy - y, color);
            plot(self, cx - x, cy - y, color);
            plot(self, cx + y, cy + x, color);
            plot(self, cx - y, cy + x, color);
            plot(self, cx + y, cy - x, color);
            plot(self, cx - y, cy - x, color);
        }
    }

    /// Solid circle centered on (x0, y0), built from vertical spans
    fn fill_circle(&mut self, x0: i32, y0: i32, radius: i32, color: Color) {
        let (cx, cy, r) = (i64::from(x0), i64::from(y0), i64::from(radius));
        if r < 0 || !intersects(self, (cx - r, cx + r), (cy - r, cy + r)) {
            return;
        }

        vspan(self, cx, cy - r, 2 * r + 1, color);
        for (x, y) in Octant::new(r) {
            if octant_exhausted(self, cx, cy, x.min(y)) {
                break;
            }
            vspan(self, cx + x, cy - y, 2 * y + 1, color);
            vspan(self, cx + y, cy - x, 2 * x + 1, color);
            vspan(self, cx - x, cy - y, 2 * y + 1, color);
            vspan(self, cx - y, cy - x, 2 * x + 1, color);
        }
    }

    /// Triangle outline through three points
    #[allow(clippy::too_many_arguments)]
    fn triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.line(x0, y0, x1, y1, color);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x0, y0, color);
    }

    /// Solid triangle through three points, swept as horizontal spans
    ///
    /// Edge positions are tracked with integer slope accumulators and floor
    /// division. Zero-height edges are divided by 1 instead of 0, and a
    /// triangle collapsed onto one row becomes a single span. Only rows on
    /// the canvas are swept.
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        // Sort vertices by y so that y0 <= y1 <= y2
        let [x0, y0, x1, y1, x2, y2] = [x0, y0, x1, y1, x2, y2].map(i64::from);
        let mut v = [(x0, y0), (x1, y1), (x2, y2)];
        v.sort_unstable_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        let x_range = (x0.min(x1).min(x2), x0.max(x1).max(x2));
        if !intersects(self, x_range, (y0, y2)) {
            return;
        }

        if y0 == y2 {
            let (a, b) = x_range;
            hspan(self, a, y0, b - a + 1, color);
            return;
        }

        let dx01 = i128::from(x1 - x0);
        let dy01 = nonzero(y1 - y0);
        let dx02 = i128::from(x2 - x0);
        let dy02 = nonzero(y2 - y0);
        let dx12 = i128::from(x2 - x1);
        let dy12 = nonzero(y2 - y1);

        let (_, height) = widened_bounds(self);
        let visible = |from: i64, to: i64| from.max(0)..=to.min(height - 1);

        // Upper half: rows y0..=last between edges 0-1 and 0-2. When the
        // bottom edge is flat, row y1 belongs to the upper half.
        let last = if y1 == y2 { y1 } else { y1 - 1 };
        let rows = visible(y0, last);
        let mut sa = dx01 * i128::from(*rows.start() - y0);
        let mut sb = dx02 * i128::from(*rows.start() - y0);
        for y in rows {
            let a = x0 + sa.div_euclid(dy01) as i64;
            let b = x0 + sb.div_euclid(dy02) as i64;
            sa += dx01;
            sb += dx02;
            hspan(self, a.min(b), y, (b - a).abs() + 1, color);
        }

        // Lower half: rows after `last` down to y2 between edges 1-2 and 0-2
        let rows = visible(last + 1, y2);
        let mut sa = dx12 * i128::from(*rows.start() - y1);
        let mut sb = dx02 * i128::from(*rows.start() - y0);
        for y in rows {
            let a = x1 + sa.div_euclid(dy12) as i64;
            let b = x0 + sb.div_euclid(dy02) as i64;
            sa += dx12;
            sb += dx02;
            hspan(self, a.min(b), y, (b - a).abs() + 1, color);
        }
    }
}

impl<T: PixelSink + ?Sized> Primitives for T {}

/// Substitute 1 for a zero edge height
fn nonzero(dy: i64) -> i128 {
    if dy == 0 { 1 } else { i128::from(dy) }
}

/// Points of one circle octant, walked with the midpoint decision variable
///
/// Yields (x, y) offsets from the center for x = 1, 2, ... while x < y,
/// starting from (0, radius), which the caller draws itself.
struct Octant {
    f: i64,
    ddf_x: i64,
    ddf_y: i64,
    x: i64,
    y: i64,
}

impl Octant {
    fn new(radius: i64) -> Self {
        Self {
            f: 1 - radius,
            ddf_x: 1,
            ddf_y: -2 * radius,
            x: 0,
            y: radius,
        }
    }
}

impl Iterator for Octant {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}
