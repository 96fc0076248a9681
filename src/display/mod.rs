/*
 *  display/mod.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Surface, drawing, layout and encoders
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

// Core trait definitions
pub mod traits;
pub mod error;
pub mod framebuffer;
pub mod color;

// Scaled bitmap text
pub mod text;

// Fixed screen coordinates
pub mod layout;

// Full scene painter
pub mod compose;

// Terminal and PNG encoders
pub mod drivers;

// Re-exports for convenience
pub use traits::FrameEncoder;
pub use error::RenderError;
pub use framebuffer::PixelSurface;
pub use color::{Theme, VerticalGradient};
pub use compose::compose;
