/*
 *  lib.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Library root
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

pub mod config;
pub mod display;
pub mod func_timer;
pub mod glyphs;
pub mod weather;
pub mod weather_glyph;

pub use display::color::Theme;
pub use display::compose::compose;
pub use display::drivers::{PngEncoder, TerminalEncoder};
pub use display::error::RenderError;
pub use display::framebuffer::PixelSurface;
pub use display::traits::FrameEncoder;
pub use weather::{DisplayRecord, ForecastDay, Readings, Timestamp};
