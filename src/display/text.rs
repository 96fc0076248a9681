/*
 *  display/text.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Scaled bitmap text onto any RGB draw target
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

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::glyphs::{
    glyph, glyph_bit, DEGREE_SIZE, GLYPH_ADVANCE, GLYPH_DEGREE, GLYPH_HEIGHT, GLYPH_WIDTH,
};

/// Width in pixels of `text` at `scale`: six columns per character.
/// Saturates at `i32::MAX`.
pub fn string_width(text: &str, scale: u32) -> i32 {
    clamp_i32(text.chars().count() as i64 * GLYPH_ADVANCE as i64 * scale as i64)
}

#[inline]
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `base + cells * scale`, saturating; anything past the i32 range is
/// off every surface anyway.
#[inline]
fn offset(base: i32, cells: u32, scale: u32) -> i32 {
    clamp_i32(base as i64 + cells as i64 * scale as i64)
}

/// Blit one `scale x scale` block per set bit of the glyph cell.
pub fn draw_char<D>(
    target: &mut D,
    x: i32,
    y: i32,
    ch: char,
    color: Rgb888,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let rows = glyph(ch);
    let block = Size::new(scale, scale);
    for (row, bits) in rows.iter().enumerate().take(GLYPH_HEIGHT as usize) {
        for col in 0..GLYPH_WIDTH {
            if glyph_bit(*bits, col) {
                let origin = Point::new(offset(x, col, scale), offset(y, row as u32, scale));
                target.fill_solid(&Rectangle::new(origin, block), color)?;
            }
        }
    }
    Ok(())
}

pub fn draw_string<D>(
    target: &mut D,
    x: i32,
    y: i32,
    text: &str,
    color: Rgb888,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let mut px = x;
    for ch in text.chars() {
        draw_char(target, px, y, ch, color, scale)?;
        px = offset(px, GLYPH_ADVANCE, scale);
    }
    Ok(())
}

/// Centre `text` horizontally across the whole target.
pub fn draw_string_centered<D>(
    target: &mut D,
    y: i32,
    text: &str,
    color: Rgb888,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    let x = clamp_i32((target.size().width as i64 - string_width(text, scale) as i64) / 2);
    draw_string(target, x, y, text, color, scale)
}

/// Superscript degree mark, drawn from its own 3x3 bitmap.
pub fn draw_degree<D>(
    target: &mut D,
    x: i32,
    y: i32,
    color: Rgb888,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let block = Size::new(scale, scale);
    for (row, bits) in GLYPH_DEGREE.iter().enumerate() {
        for col in 0..DEGREE_SIZE {
            if bits & (0x04 >> col) != 0 {
                let origin = Point::new(offset(x, col, scale), offset(y, row as u32, scale));
                target.fill_solid(&Rectangle::new(origin, block), color)?;
            }
        }
    }
    Ok(())
}
