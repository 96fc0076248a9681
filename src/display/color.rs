/*
 *  display/color.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Palette roles, gradient sampling and colour serialization
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
use serde::{Deserialize, Serialize};

/// Linear interpolation of one 8-bit channel, truncated toward zero.
#[inline]
pub fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

/// Channel-wise interpolation between two colours.
pub fn lerp(a: Rgb888, b: Rgb888, t: f32) -> Rgb888 {
    Rgb888::new(
        lerp_channel(a.r(), b.r(), t),
        lerp_channel(a.g(), b.g(), t),
        lerp_channel(a.b(), b.b(), t),
    )
}

/// A top-to-bottom gradient sampled by row offset.
///
/// `span` is the divisor applied to the offset: the full surface height
/// for the background, `h - 1` for gradient-filled rectangles. A zero
/// span always yields `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalGradient {
    pub top: Rgb888,
    pub bottom: Rgb888,
    pub span: u32,
}

impl VerticalGradient {
    pub fn new(top: Rgb888, bottom: Rgb888, span: u32) -> Self {
        Self { top, bottom, span }
    }

    /// Colour at row offset `offset` from the gradient origin.
    pub fn at(&self, offset: i32) -> Rgb888 {
        if self.span == 0 {
            return self.top;
        }
        lerp(self.top, self.bottom, offset as f32 / self.span as f32)
    }
}

/// Semantic colour roles used by the scene composer.
///
/// `Default` is the classic WeatherStar 4000 palette: deep blue bands,
/// gold rules, cyan labels. Any role may be overridden from the YAML
/// config; missing roles keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(with = "rgb_triplet")]
    pub background_top: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub background_bottom: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub header_top: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub header_bottom: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub subheader_top: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub subheader_bottom: Rgb888,
    /// Gold accent bar and rules
    #[serde(with = "rgb_triplet")]
    pub accent: Rgb888,
    /// Thin blue rules and panel highlights
    #[serde(with = "rgb_triplet")]
    pub separator: Rgb888,
    /// Card and forecast box fill
    #[serde(with = "rgb_triplet")]
    pub panel: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub panel_rule: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub caption: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub primary_text: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub secondary_text: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub info_label: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub highlight: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub temp_high: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub temp_low: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub sun: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub sun_rays: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub cloud: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub dot_fair: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub dot_precip: Rgb888,
    #[serde(with = "rgb_triplet")]
    pub status_bar: Rgb888,
}

pub const GOLD: Rgb888 = Rgb888::new(255, 200, 50);
pub const CYAN: Rgb888 = Rgb888::new(100, 220, 255);
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(180, 190, 210);
pub const YELLOW: Rgb888 = Rgb888::new(255, 255, 100);
pub const PANEL_BLUE: Rgb888 = Rgb888::new(15, 25, 90);

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_top: Rgb888::new(20, 40, 120),
            background_bottom: Rgb888::new(5, 15, 60),
            header_top: Rgb888::new(40, 70, 170),
            header_bottom: Rgb888::new(30, 55, 140),
            subheader_top: Rgb888::new(30, 50, 140),
            subheader_bottom: Rgb888::new(20, 35, 110),
            accent: GOLD,
            separator: Rgb888::new(50, 80, 160),
            panel: PANEL_BLUE,
            panel_rule: Rgb888::new(40, 60, 130),
            caption: Rgb888::new(60, 120, 210),
            primary_text: Rgb888::WHITE,
            secondary_text: LIGHT_GRAY,
            info_label: CYAN,
            highlight: Rgb888::new(80, 220, 120),
            temp_high: Rgb888::new(255, 100, 80),
            temp_low: Rgb888::new(100, 180, 255),
            sun: YELLOW,
            sun_rays: Rgb888::new(255, 160, 50),
            cloud: LIGHT_GRAY,
            dot_fair: YELLOW,
            dot_precip: CYAN,
            status_bar: Rgb888::new(10, 15, 55),
        }
    }
}

impl Theme {
    /// Gradient painted behind everything by `PixelSurface::clear`.
    pub fn background(&self, height: u32) -> VerticalGradient {
        VerticalGradient::new(self.background_top, self.background_bottom, height)
    }
}

/// Serializes `Rgb888` as a `[r, g, b]` sequence.
pub mod rgb_triplet {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb888, s: S) -> Result<S::Ok, S::Error> {
        [color.r(), color.g(), color.b()].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgb888, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(d)?;
        Ok(Rgb888::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_truncates() {
        assert_eq!(lerp_channel(0, 100, 15.0 / 16.0), 93);
        assert_eq!(lerp_channel(120, 60, 0.5), 90);
        assert_eq!(lerp_channel(20, 5, 0.0), 20);
    }

    #[test]
    fn test_gradient_zero_span_is_top() {
        let g = VerticalGradient::new(Rgb888::RED, Rgb888::BLUE, 0);
        assert_eq!(g.at(0), Rgb888::RED);
        assert_eq!(g.at(7), Rgb888::RED);
    }

    #[test]
    fn test_gradient_endpoints() {
        let g = VerticalGradient::new(Rgb888::BLACK, Rgb888::WHITE, 4);
        assert_eq!(g.at(0), Rgb888::BLACK);
        assert_eq!(g.at(4), Rgb888::WHITE);
        assert_eq!(g.at(2), Rgb888::new(127, 127, 127));
    }

    #[test]
    fn test_theme_partial_yaml_keeps_defaults() {
        let theme: Theme = serde_yaml::from_str("accent: [1, 2, 3]\n").unwrap();
        assert_eq!(theme.accent, Rgb888::new(1, 2, 3));
        assert_eq!(theme.background_top, Theme::default().background_top);
    }

    #[test]
    fn test_theme_yaml_roundtrip() {
        let theme = Theme::default();
        let s = serde_yaml::to_string(&theme).unwrap();
        assert!(s.contains("accent:"));
        let back: Theme = serde_yaml::from_str(&s).unwrap();
        assert_eq!(back, theme);
    }
}
