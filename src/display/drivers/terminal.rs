/*
 *  display/drivers/terminal.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  24-bit ANSI half-block rendition of a surface
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

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::debug;
use std::io::Write;

use crate::display::error::RenderError;
use crate::display::framebuffer::PixelSurface;
use crate::display::traits::FrameEncoder;

pub const CURSOR_HOME_CLEAR: &[u8] = b"\x1b[H\x1b[2J";
pub const RESET: &[u8] = b"\x1b[0m";
/// U+2580 upper half block
pub const UPPER_HALF: &str = "\u{2580}";

/// Worst case per column: two `ESC[3x;2;rrr;ggg;bbbm` sequences plus the
/// three byte block character.
const BYTES_PER_COLUMN: usize = 48;
const ROW_TRAILER: usize = 16;

/// Writes each pair of surface rows as one line of text cells: the
/// foreground colour carries the upper pixel, the background the lower.
pub struct TerminalEncoder<W: Write> {
    out: W,
    line: Vec<u8>,
}

impl<W: Write> TerminalEncoder<W> {
    pub fn new(out: W) -> Self {
        Self { out, line: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn push_cell(&mut self, upper: Rgb888, lower: Rgb888) -> std::io::Result<()> {
        write!(
            self.line,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
            upper.r(),
            upper.g(),
            upper.b(),
            lower.r(),
            lower.g(),
            lower.b(),
            UPPER_HALF
        )
    }
}

impl<W: Write> FrameEncoder for TerminalEncoder<W> {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn encode(&mut self, surface: &PixelSurface) -> Result<(), RenderError> {
        let (w, h) = (surface.width(), surface.height());
        let needed = w * BYTES_PER_COLUMN + ROW_TRAILER;
        if self.line.capacity() < needed {
            self.line.reserve(needed - self.line.len());
        }

        self.out.write_all(CURSOR_HOME_CLEAR)?;

        for y in (0..h).step_by(2) {
            self.line.clear();
            let upper = surface.row(y);
            // odd final row pairs with itself
            let lower = if y + 1 < h { surface.row(y + 1) } else { upper };
            for (&top, &bottom) in upper.iter().zip(lower) {
                self.push_cell(top, bottom)?;
            }
            self.line.extend_from_slice(RESET);
            self.line.push(b'\n');
            self.out.write_all(&self.line)?;
        }

        self.out.write_all(RESET)?;
        self.out.flush()?;
        debug!("terminal: wrote {} text rows of {} cells", h.div_ceil(2), w);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts `write` calls so row batching can be checked.
    #[derive(Default)]
    struct CountingSink {
        bytes: Vec<u8>,
        writes: usize,
        flushes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn encode(surface: &PixelSurface) -> CountingSink {
        let mut enc = TerminalEncoder::new(CountingSink::default());
        enc.encode(surface).unwrap();
        enc.into_inner()
    }

    #[test]
    fn test_single_pixel_pair() {
        let mut s = PixelSurface::new(1, 2, Rgb888::BLACK, Rgb888::BLACK);
        s.set_pixel(0, 0, Rgb888::new(1, 2, 3));
        s.set_pixel(0, 1, Rgb888::new(255, 0, 128));
        let out = String::from_utf8(encode(&s).bytes).unwrap();
        assert_eq!(
            out,
            "\x1b[H\x1b[2J\x1b[38;2;1;2;3m\x1b[48;2;255;0;128m\u{2580}\x1b[0m\n\x1b[0m"
        );
    }

    #[test]
    fn test_odd_height_repeats_last_row() {
        let mut s = PixelSurface::new(2, 3, Rgb888::BLACK, Rgb888::BLACK);
        s.fill_rect(0, 2, 2, 1, Rgb888::new(9, 8, 7));
        let out = String::from_utf8(encode(&s).bytes).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        // two text rows plus the closing reset
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].matches("\x1b[38;2;9;8;7m\x1b[48;2;9;8;7m\u{2580}").count(), 2);
        assert_eq!(lines[2], "\x1b[0m");
    }

    #[test]
    fn test_one_write_per_text_row() {
        let s = PixelSurface::new(64, 16, Rgb888::BLACK, Rgb888::WHITE);
        let sink = encode(&s);
        // clear, 8 rows, final reset
        assert_eq!(sink.writes, 1 + 8 + 1);
        assert_eq!(sink.flushes, 1);
        let out = String::from_utf8(sink.bytes).unwrap();
        assert_eq!(out.matches(UPPER_HALF).count(), 64 * 8);
        assert_eq!(out.matches('\n').count(), 8);
        assert!(out.starts_with("\x1b[H\x1b[2J"));
        assert!(out.ends_with("\x1b[0m\n\x1b[0m"));
    }

    #[test]
    fn test_line_buffer_sized_for_worst_case() {
        let s = PixelSurface::new(40, 2, Rgb888::WHITE, Rgb888::WHITE);
        let mut enc = TerminalEncoder::new(Vec::new());
        enc.encode(&s).unwrap();
        assert!(enc.line.capacity() >= 40 * BYTES_PER_COLUMN + ROW_TRAILER);
        // 255;255;255 on 255;255;255 is the longest cell there is
        assert!(enc.line.len() <= 40 * BYTES_PER_COLUMN + ROW_TRAILER);
    }

    #[test]
    fn test_write_error_propagates() {
        let s = PixelSurface::new(4, 4, Rgb888::BLACK, Rgb888::BLACK);
        let mut enc = TerminalEncoder::new(BrokenPipe);
        assert!(matches!(enc.encode(&s), Err(RenderError::Io(_))));
    }

    #[test]
    fn test_empty_surface_still_resets() {
        let s = PixelSurface::new(0, 0, Rgb888::BLACK, Rgb888::BLACK);
        let out = encode(&s).bytes;
        assert_eq!(out, b"\x1b[H\x1b[2J\x1b[0m");
    }
}
