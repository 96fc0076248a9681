/*
 *  weather.rs
 *
 *  WeatherStar - local on the 8s
 *	(c) 2020-26 Stuart Hunter
 *
 *	The display record handed to the scene composer
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::display::layout::FORECAST_DAYS;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Secondary readings, already formatted by whoever fetched them
/// ("72%", "W 12 mph", "30.12 in", ...).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readings {
    pub humidity: String,
    pub wind: String,
    pub barometer: String,
    pub dewpoint: String,
    pub visibility: String,
    pub uv_index: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short label, e.g. "SAT"
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

/// Time and date strings for the status bar. The composer never reads
/// a clock; the caller formats these.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// e.g. "8:30 PM"
    pub time: String,
    /// e.g. "Saturday  Feb 07, 2026"
    pub date: String,
}

impl Timestamp {
    /// WeatherStar style: 12-hour clock without a leading zero, long
    /// weekday and short month.
    pub fn from_datetime<Tz>(dt: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let time = dt.format("%I:%M %p").to_string();
        let time = time.strip_prefix('0').map(str::to_string).unwrap_or(time);
        Self {
            time,
            date: dt.format("%A  %b %d, %Y").to_string(),
        }
    }
}

fn default_unit() -> String {
    "F".to_string()
}

/// Everything the Local on the 8s screen shows. Immutable input to the
/// composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub location: String,
    pub temperature: i32,
    /// Unit letter drawn after the degree mark
    #[serde(default = "default_unit")]
    pub temperature_unit: String,
    pub condition: String,
    pub readings: Readings,
    pub forecast: [ForecastDay; FORECAST_DAYS],
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl DisplayRecord {
    /// The classic San Francisco demo screen.
    pub fn sample(timestamp: Timestamp) -> Self {
        let day = |day: &str, high, low, condition: &str| ForecastDay {
            day: day.to_string(),
            high,
            low,
            condition: condition.to_string(),
        };
        Self {
            location: "San Francisco, CA".to_string(),
            temperature: 62,
            temperature_unit: default_unit(),
            condition: "Partly Cloudy".to_string(),
            readings: Readings {
                humidity: "72%".to_string(),
                wind: "W 12 mph".to_string(),
                barometer: "30.12 in".to_string(),
                dewpoint: "54 F".to_string(),
                visibility: "10 mi".to_string(),
                uv_index: "3 Moderate".to_string(),
            },
            forecast: [
                day("SAT", 68, 52, "Sunny"),
                day("SUN", 65, 50, "Cloudy"),
                day("MON", 58, 48, "Rain"),
                day("TUE", 61, 49, "P.Cloud"),
                day("WED", 70, 54, "Sunny"),
            ],
            timestamp,
        }
    }

    pub fn from_yaml(s: &str) -> Result<Self, RecordError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let s = fs::read_to_string(path)?;
        Self::from_yaml(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_timestamp_strips_leading_zero() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 2, 7, 20, 30, 0)
            .unwrap();
        let ts = Timestamp::from_datetime(&dt);
        assert_eq!(ts.time, "8:30 PM");
        assert_eq!(ts.date, "Saturday  Feb 07, 2026");
    }

    #[test]
    fn test_timestamp_keeps_two_digit_hour() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 7, 22, 25, 0).unwrap();
        assert_eq!(Timestamp::from_datetime(&dt).time, "10:25 PM");
    }

    #[test]
    fn test_sample_has_five_days() {
        let r = DisplayRecord::sample(Timestamp::default());
        assert_eq!(r.forecast.len(), 5);
        assert_eq!(r.forecast[2].condition, "Rain");
    }

    #[test]
    fn test_yaml_roundtrip_and_default_unit() {
        let r = DisplayRecord::sample(Timestamp::default());
        let mut v = serde_yaml::to_value(&r).unwrap();
        v.as_mapping_mut().unwrap().remove("temperature_unit");
        let back: DisplayRecord = serde_yaml::from_value(v).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_wrong_forecast_length_rejected() {
        let yaml = r#"
location: Nowhere
temperature: 1
condition: Fog
readings: { humidity: "", wind: "", barometer: "", dewpoint: "", visibility: "", uv_index: "" }
forecast:
  - { day: MON, high: 1, low: 0, condition: Fog }
"#;
        assert!(matches!(DisplayRecord::from_yaml(yaml), Err(RecordError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DisplayRecord::load(Path::new("/nonexistent/record.yaml")).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }
}
