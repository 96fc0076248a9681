/*
 *  display/framebuffer.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Owned RGB pixel surface and the primitive fills that draw into it
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::color::VerticalGradient;

/// A fixed-size RGB framebuffer.
///
/// Every write clips to `[0, width) x [0, height)`; coordinates may be
/// negative or past the edge and the out-of-range part is dropped.
/// The surface also remembers its background gradient so `clear` and the
/// rounded-rect corner punch can reproduce it.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    buf: Vec<Rgb888>,
    w: usize,
    h: usize,
    background: VerticalGradient,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32, bg_top: Rgb888, bg_bottom: Rgb888) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self {
            buf: vec![bg_top; w * h],
            w,
            h,
            background: VerticalGradient::new(bg_top, bg_bottom, height),
        }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    /// Immutable raw access, row-major
    pub fn as_slice(&self) -> &[Rgb888] { &self.buf }

    /// One row of pixels; panics if `y` is past the bottom edge.
    pub fn row(&self, y: usize) -> &[Rgb888] {
        &self.buf[y * self.w..(y + 1) * self.w]
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        self.idx(x, y).map(|i| self.buf[i])
    }

    /// The background gradient as a copyable sampler.
    pub fn background(&self) -> VerticalGradient { self.background }

    /// Replace the gradient that `clear` and the corner sampler reproduce.
    pub fn set_background(&mut self, background: VerticalGradient) {
        self.background = background;
    }

    /// Background colour at row `y`.
    pub fn background_at(&self, y: i32) -> Rgb888 {
        self.background.at(y)
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        self.idx_wide(x as i64, y as i64)
    }

    #[inline]
    fn idx_wide(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.w as i64 || y >= self.h as i64 {
            return None;
        }
        Some(y as usize * self.w + x as usize)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(i) = self.idx(x, y) {
            self.buf[i] = color;
        }
    }

    /// Write `color` over columns `[x0, x1)` of row `y`, clipped.
    fn fill_span(&mut self, y: i32, x0: i64, x1: i64, color: Rgb888) {
        if y < 0 || y as usize >= self.h {
            return;
        }
        let (x0, x1) = (x0.max(0), x1.min(self.w as i64));
        if x0 < x1 {
            let base = y as usize * self.w;
            self.buf[base + x0 as usize..base + x1 as usize].fill(color);
        }
    }

    fn fill_row(&mut self, y: i32, x: i32, w: i32, color: Rgb888) {
        self.fill_span(y, x as i64, x as i64 + w as i64, color);
    }

    /// Paint the whole surface with the background gradient,
    /// `top + (bottom - top) * (y / H)` per row.
    pub fn clear(&mut self) {
        for y in 0..self.h {
            let c = self.background.at(y as i32);
            self.buf[y * self.w..(y + 1) * self.w].fill(c);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb888) {
        for row in self.visible_rows(y, h) {
            self.fill_row(y.saturating_add(row), x, w, color);
        }
    }

    /// Row offsets `0..h` of a rectangle at `y` that land on the surface.
    fn visible_rows(&self, y: i32, h: i32) -> core::ops::Range<i32> {
        let (y, h) = (y as i64, h.max(0) as i64);
        let first = (-y).clamp(0, h);
        let last = (self.h as i64 - y).clamp(first, h);
        first as i32..last as i32
    }

    /// Rectangle whose rows blend from `top` to `bottom`, the last row
    /// landing exactly on `bottom`.
    pub fn fill_rect_v_gradient(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        top: Rgb888,
        bottom: Rgb888,
    ) {
        let span = if h > 1 { (h - 1) as u32 } else { 0 };
        let grad = VerticalGradient::new(top, bottom, span);
        for row in self.visible_rows(y, h) {
            self.fill_row(y.saturating_add(row), x, w, grad.at(row));
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive on row `y`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb888) {
        self.fill_span(y, x0 as i64, x1 as i64 + 1, color);
    }

    /// Filled rectangle with rounded corners.
    ///
    /// The full rectangle is filled, then every corner pixel outside the
    /// radius is overwritten with `background(y)`. This only looks right
    /// when the area behind the rectangle is exactly what `background`
    /// reproduces, i.e. the freshly cleared gradient. Drawing it over
    /// other content leaves gradient-coloured notches in the corners.
    pub fn rounded_rect<F>(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        fill: Rgb888,
        background: F,
    ) where
        F: Fn(i32) -> Rgb888,
    {
        self.fill_rect(x, y, w, h, fill);

        // corner math in i64 so rectangles near the i32 limits only clip
        let (x, y, w, h) = (x as i64, y as i64, w as i64, h as i64);
        let r = radius as i64;
        let r_sq = r * r;
        for dy in 0..r {
            for dx in 0..r {
                let dist_sq = (r - dx) * (r - dx) + (r - dy) * (r - dy);
                if dist_sq <= r_sq {
                    continue;
                }
                let corners = [
                    (x + dx, y + dy),
                    (x + w - 1 - dx, y + dy),
                    (x + dx, y + h - 1 - dy),
                    (x + w - 1 - dx, y + h - 1 - dy),
                ];
                for (cx, cy) in corners {
                    if let Some(i) = self.idx_wide(cx, cy) {
                        // in bounds, so cy fits an i32
                        self.buf[i] = background(cy as i32);
                    }
                }
            }
        }
    }
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            self.set_pixel(p.x, p.y, c);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // fast path used by glyph blocks
        let Size { width, height } = area.size;
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
            color,
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }
}
