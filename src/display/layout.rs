/*
 *  display/layout.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fixed pixel coordinates of the Local on the 8s screen
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

//! Every offset here is tuned for the 640x400 reference canvas. There is
//! no layout negotiation: regions that depend on the canvas size (full
//! width rules, the status bar) read it from the surface, everything else
//! is a literal.

/// Reference canvas, the WeatherStar 4000 NTSC-era output size
pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 400;

/// Inset of the shorter rules from both canvas edges
pub const RULE_MARGIN: i32 = 20;

// header
pub const ACCENT_BAR_HEIGHT: i32 = 4;
pub const HEADER_Y: i32 = 4;
pub const HEADER_HEIGHT: i32 = 36;
pub const HEADER_TEXT_Y: i32 = 10;
pub const HEADER_RULE_Y: i32 = 40;
pub const HEADER_SCALE: u32 = 2;
pub const TITLE: &str = "THE  WEATHER  CHANNEL";

// sub-header and location
pub const SUBHEADER_Y: i32 = 42;
pub const SUBHEADER_HEIGHT: i32 = 30;
pub const SUBHEADER_TEXT_Y: i32 = 48;
pub const SUBTITLE: &str = "LOCAL  FORECAST";
pub const LOCATION_RULE_Y: i32 = 73;
pub const LOCATION_Y: i32 = 80;
pub const LOCATION_SCALE: u32 = 2;

// current conditions card; `*_DY` offsets are relative to CARD_Y
pub const CARD_X: i32 = 20;
pub const CARD_Y: i32 = 104;
pub const CARD_HEIGHT: i32 = 140;
pub const CARD_RADIUS: i32 = 6;
pub const CARD_BEVEL_INSET: i32 = 2;
pub const CARD_CAPTION_X: i32 = 36;
pub const CARD_CAPTION_DY: i32 = 8;
pub const CARD_CAPTION_RULE_DY: i32 = 20;
/// Right end of the caption rule, measured from the canvas right edge
pub const CARD_CAPTION_RULE_RIGHT: i32 = 57;
pub const CARD_CAPTION: &str = "Current Conditions";

pub const SUN_X: i32 = 90;
pub const SUN_DY: i32 = 55;
pub const SUN_RADIUS: i32 = 18;
pub const CLOUD_X: i32 = 110;
pub const CLOUD_DY: i32 = 60;

pub const TEMP_X: i32 = 180;
pub const TEMP_DY: i32 = 30;
pub const TEMP_SCALE: u32 = 5;
/// The degree mark and unit letter are placed for exactly this many digits.
pub const TEMP_DIGITS: i32 = 2;
pub const DEGREE_SCALE: u32 = 3;
/// Degree mark footprint plus spacing before the unit letter
pub const DEGREE_ADVANCE: i32 = 12;
pub const UNIT_SCALE: u32 = 4;

pub const CONDITION_DY: i32 = 75;
pub const CONDITION_SCALE: u32 = 2;

pub const READING_ROWS_DY: [i32; 3] = [100, 112, 124];
pub const LEFT_LABEL_X: i32 = 36;
pub const LEFT_VALUE_X: i32 = LEFT_LABEL_X + 11 * 6;
pub const RIGHT_LABEL_X: i32 = 320;
pub const RIGHT_VALUE_X: i32 = RIGHT_LABEL_X + 12 * 6;

// extended forecast strip
pub const STRIP_Y: i32 = 252;
pub const STRIP_CAPTION_X: i32 = 30;
pub const STRIP_CAPTION_DY: i32 = 8;
pub const STRIP_RULE_DY: i32 = 20;
pub const STRIP_CAPTION: &str = "EXTENDED FORECAST";

pub const FORECAST_DAYS: usize = 5;
pub const BOX_WIDTH: i32 = 110;
pub const BOX_GAP: i32 = 10;
pub const BOX_DY: i32 = 26;
pub const BOX_HEIGHT: i32 = 95;
pub const BOX_DAY_DY: i32 = 4;
pub const BOX_DAY_SCALE: u32 = 2;
pub const BOX_TEXT_X: i32 = 8;
pub const BOX_HIGH_DY: i32 = 30;
pub const BOX_LOW_DY: i32 = 44;
pub const BOX_CONDITION_DY: i32 = 62;
/// Dot centre, measured in from the box's right edge
pub const BOX_DOT_INSET: i32 = 18;
pub const BOX_DOT_DY: i32 = 72;
/// The one forecast slot whose dot uses the precipitation colour
pub const PRECIP_DOT_INDEX: usize = 2;

// bottom status bar, anchored to the canvas bottom
pub const STATUS_HEIGHT: i32 = 30;
pub const STATUS_MARGIN: i32 = 20;
pub const STATUS_TEXT_DY: i32 = 10;
pub const STATUS_TIME_DY: i32 = 6;
pub const STATUS_TIME_SCALE: u32 = 2;
pub const STATUS_CAPTION: &str = "Local on the 8s";

/// Left edge of the first forecast box so the strip is centred.
pub fn forecast_box_start(canvas_width: i32) -> i32 {
    let n = FORECAST_DAYS as i32;
    (canvas_width - (n * BOX_WIDTH + (n - 1) * BOX_GAP)) / 2
}

/// Left edge of forecast box `index`.
pub fn forecast_box_x(canvas_width: i32, index: usize) -> i32 {
    forecast_box_start(canvas_width) + index as i32 * (BOX_WIDTH + BOX_GAP)
}
