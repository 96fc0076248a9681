/*
 *  display/traits.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Encoder seam between a composed surface and its outputs
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

use crate::display::error::RenderError;
use crate::display::framebuffer::PixelSurface;

/// Serialises a finished surface to some destination.
///
/// Encoders only read the surface; composition must be complete before
/// one is handed the frame. Each call writes one whole frame.
pub trait FrameEncoder {
    /// Short name used in timing logs and error context
    fn name(&self) -> &'static str;

    fn encode(&mut self, surface: &PixelSurface) -> Result<(), RenderError>;
}
