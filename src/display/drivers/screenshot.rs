/*
 *  display/drivers/screenshot.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  8-bit RGB PNG snapshot of a surface
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

use embedded_graphics::pixelcolor::RgbColor;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::display::error::RenderError;
use crate::display::framebuffer::PixelSurface;
use crate::display::traits::FrameEncoder;

/// Writes the frame to `path`, replacing whatever was there.
#[derive(Debug, Clone)]
pub struct PngEncoder {
    path: PathBuf,
}

impl PngEncoder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameEncoder for PngEncoder {
    fn name(&self) -> &'static str {
        "png"
    }

    fn encode(&mut self, surface: &PixelSurface) -> Result<(), RenderError> {
        check_dimensions(surface)?;

        let file = File::create(&self.path)?;
        let guard = PartialFile::new(&self.path);
        let mut out = BufWriter::new(file);
        encode_png(&mut out, surface)?;
        out.flush()?;
        guard.commit();

        info!(
            "screenshot saved to {} ({}x{})",
            self.path.display(),
            surface.width(),
            surface.height()
        );
        Ok(())
    }
}

fn check_dimensions(surface: &PixelSurface) -> Result<(), RenderError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(RenderError::EmptySurface { width, height });
    }
    Ok(())
}

/// Stream `surface` as a non-interlaced 8-bit RGB PNG into `out`, one
/// packed row at a time.
pub fn encode_png<W: Write>(out: W, surface: &PixelSurface) -> Result<(), RenderError> {
    check_dimensions(surface)?;

    let mut encoder = png::Encoder::new(out, surface.width() as u32, surface.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut row = Vec::with_capacity(surface.width() * 3);
    {
        let mut stream = writer.stream_writer()?;
        for y in 0..surface.height() {
            row.clear();
            for px in surface.row(y) {
                row.extend_from_slice(&[px.r(), px.g(), px.b()]);
            }
            stream.write_all(&row)?;
        }
        stream.finish()?;
    }
    writer.finish()?;
    debug!("png: streamed {} rows", surface.height());
    Ok(())
}

/// Removes the destination on drop unless the write was committed, so a
/// failed encode leaves nothing behind.
struct PartialFile<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> PartialFile<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for PartialFile<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match fs::remove_file(self.path) {
            Ok(()) => warn!("removed partial screenshot {}", self.path.display()),
            Err(e) => warn!("could not remove partial screenshot {}: {}", self.path.display(), e),
        }
    }
}
