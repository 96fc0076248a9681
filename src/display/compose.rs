/*
 *  display/compose.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Paints the full Local on the 8s screen, top to bottom
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

use arrayvec::ArrayString;
use core::convert::Infallible;
use core::fmt::Write;
use log::{debug, warn};

use crate::display::color::Theme;
use crate::display::framebuffer::PixelSurface;
use crate::display::layout::*;
use crate::display::text::{draw_degree, draw_string, draw_string_centered, string_width};
use crate::weather::{DisplayRecord, ForecastDay};
use crate::weather_glyph::{cloud, forecast_dot, sun};

/// Compose one complete frame into `surface`.
///
/// The surface takes the theme's background gradient and is cleared
/// first, so whatever it held before is gone.
/// Coordinates are the fixed 640x400 layout from `layout`; on another
/// canvas size the regions are simply clipped.
pub fn compose(surface: &mut PixelSurface, record: &DisplayRecord, theme: &Theme) {
    let Ok(()) = compose_regions(surface, record, theme);
}

fn compose_regions(
    surface: &mut PixelSurface,
    record: &DisplayRecord,
    theme: &Theme,
) -> Result<(), Infallible> {
    debug!("composing {}x{} frame for {}", surface.width(), surface.height(), record.location);
    surface.set_background(theme.background(surface.height() as u32));
    surface.clear();
    header(surface, theme)?;
    current_conditions(surface, record, theme)?;
    forecast_strip(surface, &record.forecast, theme)?;
    status_bar(surface, record, theme)?;
    Ok(())
}

fn header(s: &mut PixelSurface, theme: &Theme) -> Result<(), Infallible> {
    let w = s.width() as i32;

    s.fill_rect(0, 0, w, ACCENT_BAR_HEIGHT, theme.accent);

    s.fill_rect_v_gradient(0, HEADER_Y, w, HEADER_HEIGHT, theme.header_top, theme.header_bottom);
    draw_string_centered(s, HEADER_TEXT_Y, TITLE, theme.primary_text, HEADER_SCALE)?;

    s.hline(0, w - 1, HEADER_RULE_Y, theme.accent);
    s.hline(0, w - 1, HEADER_RULE_Y + 1, theme.accent);

    s.fill_rect_v_gradient(
        0,
        SUBHEADER_Y,
        w,
        SUBHEADER_HEIGHT,
        theme.subheader_top,
        theme.subheader_bottom,
    );
    draw_string_centered(s, SUBHEADER_TEXT_Y, SUBTITLE, theme.info_label, HEADER_SCALE)?;

    s.hline(RULE_MARGIN, w - 1 - RULE_MARGIN, LOCATION_RULE_Y, theme.separator);
    Ok(())
}

fn current_conditions(
    s: &mut PixelSurface,
    record: &DisplayRecord,
    theme: &Theme,
) -> Result<(), Infallible> {
    let w = s.width() as i32;

    draw_string_centered(s, LOCATION_Y, &record.location, theme.primary_text, LOCATION_SCALE)?;

    // the corner punch needs the untouched gradient behind the card
    let bg = s.background();
    s.rounded_rect(CARD_X, CARD_Y, w - 2 * CARD_X, CARD_HEIGHT, CARD_RADIUS, theme.panel, |y| {
        bg.at(y)
    });
    s.hline(
        CARD_X + CARD_BEVEL_INSET,
        w - 1 - CARD_X - CARD_BEVEL_INSET,
        CARD_Y + 1,
        theme.separator,
    );

    draw_string(s, CARD_CAPTION_X, CARD_Y + CARD_CAPTION_DY, CARD_CAPTION, theme.caption, 1)?;
    s.hline(
        CARD_CAPTION_X,
        w - CARD_CAPTION_RULE_RIGHT,
        CARD_Y + CARD_CAPTION_RULE_DY,
        theme.panel_rule,
    );

    // partly cloudy: sun first, cloud over its lower right
    sun(s, SUN_X, CARD_Y + SUN_DY, SUN_RADIUS, theme.sun, theme.sun_rays)?;
    cloud(s, CLOUD_X, CARD_Y + CLOUD_DY, theme.cloud)?;

    temperature_readout(s, record, theme)?;

    draw_string(
        s,
        TEMP_X,
        CARD_Y + CONDITION_DY,
        &record.condition,
        theme.secondary_text,
        CONDITION_SCALE,
    )?;

    let r = &record.readings;
    let left = [("Humidity:", &r.humidity), ("Wind:", &r.wind), ("Barometer:", &r.barometer)];
    let right = [("Dewpoint:", &r.dewpoint), ("Visibility:", &r.visibility), ("UV Index:", &r.uv_index)];

    for (i, dy) in READING_ROWS_DY.iter().enumerate() {
        let y = CARD_Y + dy;
        let (label, value) = left[i];
        draw_string(s, LEFT_LABEL_X, y, label, theme.info_label, 1)?;
        draw_string(s, LEFT_VALUE_X, y, value, theme.primary_text, 1)?;

        let (label, value) = right[i];
        // the UV reading is the one value picked out in the highlight colour
        let value_color = if i == right.len() - 1 { theme.highlight } else { theme.primary_text };
        draw_string(s, RIGHT_LABEL_X, y, label, theme.info_label, 1)?;
        draw_string(s, RIGHT_VALUE_X, y, value, value_color, 1)?;
    }
    Ok(())
}

/// Big digits, superscript degree mark, unit letter.
///
/// The mark and the letter sit at offsets accumulated for a two-digit
/// reading and are not re-measured; other widths overlap or leave a gap.
fn temperature_readout(
    s: &mut PixelSurface,
    record: &DisplayRecord,
    theme: &Theme,
) -> Result<(), Infallible> {
    // an i32 needs at most 11 characters
    let mut digits = ArrayString::<16>::new();
    let fitted = write!(&mut digits, "{}", record.temperature).is_ok();
    debug_assert!(fitted, "temperature overflowed its buffer");
    if digits.len() as i32 != TEMP_DIGITS {
        warn!(
            "temperature '{}' is not {} characters wide, degree mark will be misplaced",
            digits, TEMP_DIGITS
        );
    }

    let y = CARD_Y + TEMP_DY;
    let degree_x = TEMP_X + TEMP_DIGITS * 6 * TEMP_SCALE as i32;
    let unit_x = degree_x + DEGREE_ADVANCE;

    draw_string(s, TEMP_X, y, &digits, theme.primary_text, TEMP_SCALE)?;
    draw_degree(s, degree_x, y, theme.primary_text, DEGREE_SCALE)?;
    draw_string(s, unit_x, y, &record.temperature_unit, theme.primary_text, UNIT_SCALE)?;
    Ok(())
}

fn forecast_strip(
    s: &mut PixelSurface,
    days: &[ForecastDay; FORECAST_DAYS],
    theme: &Theme,
) -> Result<(), Infallible> {
    let w = s.width() as i32;

    s.hline(RULE_MARGIN, w - 1 - RULE_MARGIN, STRIP_Y, theme.accent);
    s.hline(RULE_MARGIN, w - 1 - RULE_MARGIN, STRIP_Y + 1, theme.accent);
    draw_string(s, STRIP_CAPTION_X, STRIP_Y + STRIP_CAPTION_DY, STRIP_CAPTION, theme.accent, 1)?;
    s.hline(RULE_MARGIN, w - 1 - RULE_MARGIN, STRIP_Y + STRIP_RULE_DY, theme.panel_rule);

    let by = STRIP_Y + BOX_DY;
    for (i, day) in days.iter().enumerate() {
        let bx = forecast_box_x(w, i);

        s.fill_rect(bx, by, BOX_WIDTH, BOX_HEIGHT, theme.panel);
        s.hline(bx, bx + BOX_WIDTH - 1, by, theme.separator);

        let dw = string_width(&day.day, BOX_DAY_SCALE);
        draw_string(s, bx + (BOX_WIDTH - dw) / 2, by + BOX_DAY_DY, &day.day, theme.primary_text, BOX_DAY_SCALE)?;

        // "Hi " plus an i32 is at most 14 characters
        let mut buf = ArrayString::<32>::new();
        let fitted = write!(&mut buf, "Hi {}", day.high).is_ok();
        debug_assert!(fitted, "high overflowed its buffer");
        draw_string(s, bx + BOX_TEXT_X, by + BOX_HIGH_DY, &buf, theme.temp_high, 1)?;
        buf.clear();
        let fitted = write!(&mut buf, "Lo {}", day.low).is_ok();
        debug_assert!(fitted, "low overflowed its buffer");
        draw_string(s, bx + BOX_TEXT_X, by + BOX_LOW_DY, &buf, theme.temp_low, 1)?;

        draw_string(s, bx + BOX_TEXT_X, by + BOX_CONDITION_DY, &day.condition, theme.secondary_text, 1)?;

        let dot = if i == PRECIP_DOT_INDEX { theme.dot_precip } else { theme.dot_fair };
        forecast_dot(s, bx + BOX_WIDTH - BOX_DOT_INSET, by + BOX_DOT_DY, dot)?;
    }
    Ok(())
}

fn status_bar(s: &mut PixelSurface, record: &DisplayRecord, theme: &Theme) -> Result<(), Infallible> {
    let w = s.width() as i32;
    let y = s.height() as i32 - STATUS_HEIGHT;

    s.fill_rect(0, y, w, STATUS_HEIGHT, theme.status_bar);
    s.hline(0, w - 1, y, theme.accent);
    s.hline(0, w - 1, y + 1, theme.accent);

    let ts = &record.timestamp;
    draw_string(s, STATUS_MARGIN, y + STATUS_TEXT_DY, &ts.date, theme.secondary_text, 1)?;

    let tw = string_width(&ts.time, STATUS_TIME_SCALE);
    draw_string(s, w - tw - STATUS_MARGIN, y + STATUS_TIME_DY, &ts.time, theme.primary_text, STATUS_TIME_SCALE)?;

    draw_string_centered(s, y + STATUS_TEXT_DY, STATUS_CAPTION, theme.accent, 1)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::Timestamp;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

    fn reference_frame(record: &DisplayRecord, theme: &Theme) -> PixelSurface {
        let mut s = PixelSurface::new(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            theme.background_top,
            theme.background_bottom,
        );
        compose(&mut s, record, theme);
        s
    }

    fn sample() -> DisplayRecord {
        DisplayRecord::sample(Timestamp {
            time: "10:25 PM".to_string(),
            date: "Saturday  Feb 07, 2026".to_string(),
        })
    }

    #[test]
    fn test_header_regions() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        assert_eq!(s.pixel(0, 0), Some(theme.accent));
        assert_eq!(s.pixel(639, 3), Some(theme.accent));
        assert_eq!(s.pixel(0, 4), Some(theme.header_top));
        assert_eq!(s.pixel(0, 39), Some(theme.header_bottom));
        assert_eq!(s.pixel(5, 40), Some(theme.accent));
        assert_eq!(s.pixel(5, 41), Some(theme.accent));
        assert_eq!(s.pixel(0, 42), Some(theme.subheader_top));
        assert_eq!(s.pixel(0, 71), Some(theme.subheader_bottom));
        assert_eq!(s.pixel(20, 73), Some(theme.separator));
        assert_eq!(s.pixel(619, 73), Some(theme.separator));
        assert_eq!(s.pixel(19, 73), Some(s.background_at(73)));
    }

    #[test]
    fn test_card_corners_show_background() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        assert_eq!(s.pixel(CARD_X, CARD_Y), Some(s.background_at(CARD_Y)));
        let bottom = CARD_Y + CARD_HEIGHT - 1;
        assert_eq!(s.pixel(619, bottom), Some(s.background_at(bottom)));
        assert_eq!(s.pixel(320, bottom), Some(theme.panel));
        // bevel highlight
        assert_eq!(s.pixel(300, CARD_Y + 1), Some(theme.separator));
    }

    #[test]
    fn test_icon_and_temperature() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        // exposed sun body, cloud overlapping the sun
        assert_eq!(s.pixel(80, CARD_Y + 45), Some(theme.sun));
        assert_eq!(s.pixel(110, CARD_Y + 60), Some(theme.cloud));
        // "6" at scale 5: top row of the glyph is ..XX. -> x 190..199
        assert_eq!(s.pixel(TEMP_X + 10, CARD_Y + TEMP_DY), Some(theme.primary_text));
        // degree mark top centre block at x 243..246
        assert_eq!(s.pixel(TEMP_X + 63, CARD_Y + TEMP_DY), Some(theme.primary_text));
        // 'F' left stem at scale 4
        assert_eq!(s.pixel(252, CARD_Y + TEMP_DY + 20), Some(theme.primary_text));
    }

    #[test]
    fn test_forecast_boxes_and_dots() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        let by = STRIP_Y + BOX_DY;
        for i in 0..FORECAST_DAYS {
            let bx = forecast_box_x(640, i);
            assert_eq!(s.pixel(bx + 1, by), Some(theme.separator));
            assert_eq!(s.pixel(bx + 1, by + 20), Some(theme.panel));
            let expect = if i == PRECIP_DOT_INDEX { theme.dot_precip } else { theme.dot_fair };
            assert_eq!(s.pixel(bx + BOX_WIDTH - BOX_DOT_INSET, by + BOX_DOT_DY), Some(expect));
        }
        // gap between boxes is background
        let gap_x = forecast_box_x(640, 0) + BOX_WIDTH + 2;
        assert_eq!(s.pixel(gap_x, by + 20), Some(s.background_at(by + 20)));
        assert_eq!(s.pixel(20, STRIP_Y), Some(theme.accent));
    }

    #[test]
    fn test_high_low_colours() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        let by = STRIP_Y + BOX_DY;
        let bx = forecast_box_x(640, 0);
        // 'H' left stem, 'L' left stem
        assert_eq!(s.pixel(bx + BOX_TEXT_X, by + BOX_HIGH_DY), Some(theme.temp_high));
        assert_eq!(s.pixel(bx + BOX_TEXT_X, by + BOX_LOW_DY), Some(theme.temp_low));
    }

    #[test]
    fn test_status_bar() {
        let theme = Theme::default();
        let s = reference_frame(&sample(), &theme);
        assert_eq!(s.pixel(0, 370), Some(theme.accent));
        assert_eq!(s.pixel(639, 371), Some(theme.accent));
        assert_eq!(s.pixel(0, 399), Some(theme.status_bar));
        // time "10:25 PM" is right aligned 20px from the edge at scale 2;
        // the trailing 'M' ends at column 4 of its cell
        let tw = string_width("10:25 PM", 2);
        let m_x = 640 - 20 - tw + 7 * 12;
        assert_eq!(s.pixel(m_x, 370 + STATUS_TIME_DY), Some(theme.primary_text));
        assert_eq!(s.pixel(m_x + 8, 370 + STATUS_TIME_DY), Some(theme.primary_text));
        assert_eq!(s.pixel(640 - 20, 370 + STATUS_TIME_DY), Some(theme.status_bar));
    }

    #[test]
    fn test_compose_is_repeatable() {
        let theme = Theme::default();
        let record = sample();
        let a = reference_frame(&record, &theme);
        let mut b = a.clone();
        compose(&mut b, &record, &theme);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_theme_is_injected() {
        let theme = Theme { accent: Rgb888::MAGENTA, ..Theme::default() };
        let s = reference_frame(&sample(), &theme);
        assert_eq!(s.pixel(0, 0), Some(Rgb888::MAGENTA));
        assert_eq!(s.pixel(0, 370), Some(Rgb888::MAGENTA));
    }

    #[test]
    fn test_theme_background_replaces_surface_gradient() {
        let red = Rgb888::new(200, 0, 0);
        let theme = Theme { background_top: red, background_bottom: red, ..Theme::default() };
        let defaults = Theme::default();
        // surface built with the stock gradient; the theme must win
        let mut s = PixelSurface::new(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            defaults.background_top,
            defaults.background_bottom,
        );
        compose(&mut s, &sample(), &theme);
        assert_eq!(s.pixel(5, 90), Some(red));
        assert_eq!(s.background_at(200), red);
        // punched card corner shows the themed background too
        assert_eq!(s.pixel(CARD_X, CARD_Y), Some(red));
        let gap_x = forecast_box_x(640, 0) + BOX_WIDTH + 2;
        assert_eq!(s.pixel(gap_x, STRIP_Y + BOX_DY + 20), Some(red));
    }

    #[test]
    fn test_extreme_readings_fit_their_buffers() {
        let theme = Theme::default();
        let mut record = sample();
        record.temperature = i32::MIN;
        for day in record.forecast.iter_mut() {
            day.high = i32::MIN;
            day.low = i32::MAX;
        }
        let s = reference_frame(&record, &theme);
        // leading '-' of "-2147483648": middle row of the glyph, scale 5
        assert_eq!(s.pixel(TEMP_X, CARD_Y + TEMP_DY + 15), Some(theme.primary_text));
        // "Hi -2147483648": the '-' in cell 3 of the first box
        let bx = forecast_box_x(640, 0);
        assert_eq!(s.pixel(bx + BOX_TEXT_X + 18, STRIP_Y + BOX_DY + BOX_HIGH_DY + 3), Some(theme.temp_high));
    }

    #[test]
    fn test_small_canvas_clips_without_panic() {
        let theme = Theme::default();
        let mut s = PixelSurface::new(64, 16, theme.background_top, theme.background_bottom);
        let mut record = sample();
        record.temperature = 104;
        compose(&mut s, &record, &theme);
        // the status bar is anchored to the bottom and covers the whole strip
        assert_eq!(s.pixel(0, 0), Some(theme.status_bar));
    }
}
