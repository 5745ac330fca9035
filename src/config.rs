use crate::layout::LayoutError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_PADDING_DAYS: u32 = 7;
pub const DEFAULT_PROXIMITY_THRESHOLD: f32 = 2.5;
pub const DEFAULT_MAX_STACK_LEVEL: i32 = 5;
pub const DEFAULT_FALLBACK_MONTH: u32 = 10;

/// Month the axis opens on when there are no records to derive a start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallbackMonth {
    pub month: u32,
    /// Fixed year. When absent the most recent occurrence of `month` on or
    /// before "now" is used.
    pub year: Option<i32>,
}

impl Default for FallbackMonth {
    fn default() -> Self {
        Self {
            month: DEFAULT_FALLBACK_MONTH,
            year: None,
        }
    }
}

impl FallbackMonth {
    pub fn first_day(&self, today: NaiveDate) -> Option<NaiveDate> {
        if let Some(year) = self.year {
            return NaiveDate::from_ymd_opt(year, self.month, 1);
        }
        let this_year = NaiveDate::from_ymd_opt(today.year(), self.month, 1)?;
        if this_year <= today {
            Some(this_year)
        } else {
            NaiveDate::from_ymd_opt(today.year() - 1, self.month, 1)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub lead_padding_days: u32,
    pub trail_padding_days: u32,
    /// Collision distance on the percent axis.
    pub proximity_threshold: f32,
    pub max_stack_level: i32,
    pub fallback_axis_month_start: FallbackMonth,
    pub marker_interval_days: u32,
    pub countdown_target: Option<DateTime<Utc>>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lead_padding_days: DEFAULT_PADDING_DAYS,
            trail_padding_days: DEFAULT_PADDING_DAYS,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            max_stack_level: DEFAULT_MAX_STACK_LEVEL,
            fallback_axis_month_start: FallbackMonth::default(),
            marker_interval_days: DEFAULT_PADDING_DAYS,
            countdown_target: None,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            return Err(LayoutError::config(format!(
                "proximityThreshold must be a positive number, got {}",
                self.proximity_threshold
            )));
        }
        if self.max_stack_level < 0 {
            return Err(LayoutError::config(format!(
                "maxStackLevel must not be negative, got {}",
                self.max_stack_level
            )));
        }
        if self.marker_interval_days == 0 {
            return Err(LayoutError::config("markerIntervalDays must be at least 1"));
        }
        let month = self.fallback_axis_month_start.month;
        if !(1..=12).contains(&month) {
            return Err(LayoutError::config(format!(
                "fallbackAxisMonthStart.month must be in 1..=12, got {month}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    lead_padding_days: Option<i64>,
    trail_padding_days: Option<i64>,
    proximity_threshold: Option<f32>,
    max_stack_level: Option<i32>,
    fallback_axis_month_start: Option<FallbackMonthFile>,
    marker_interval_days: Option<u32>,
    countdown_target: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FallbackMonthFile {
    Month(u32),
    Full { month: u32, year: Option<i32> },
}

/// Loads a JSON5 config file over the defaults and validates the result.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Like [`load_config`] but leaves validation to the caller, so overrides can
/// be applied first.
pub fn read_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    Ok(merge_config(&contents)?)
}

pub fn parse_config(contents: &str) -> Result<LayoutConfig, LayoutError> {
    let config = merge_config(contents)?;
    config.validate()?;
    Ok(config)
}

/// Merges the keys present in `contents` over the defaults. Type and range
/// errors of individual keys are reported; cross-field rules are not checked.
pub fn merge_config(contents: &str) -> Result<LayoutConfig, LayoutError> {
    let parsed: ConfigFile =
        json5::from_str(contents).map_err(|err| LayoutError::config(err.to_string()))?;
    let mut config = LayoutConfig::default();

    if let Some(v) = parsed.lead_padding_days {
        config.lead_padding_days = padding_days("leadPaddingDays", v)?;
    }
    if let Some(v) = parsed.trail_padding_days {
        config.trail_padding_days = padding_days("trailPaddingDays", v)?;
    }
    if let Some(v) = parsed.proximity_threshold {
        config.proximity_threshold = v;
    }
    if let Some(v) = parsed.max_stack_level {
        config.max_stack_level = v;
    }
    if let Some(v) = parsed.fallback_axis_month_start {
        config.fallback_axis_month_start = match v {
            FallbackMonthFile::Month(month) => FallbackMonth { month, year: None },
            FallbackMonthFile::Full { month, year } => FallbackMonth { month, year },
        };
    }
    if let Some(v) = parsed.marker_interval_days {
        config.marker_interval_days = v;
    }
    if let Some(v) = parsed.countdown_target {
        config.countdown_target = Some(parse_instant(&v)?);
    }
    Ok(config)
}

fn padding_days(key: &str, value: i64) -> Result<u32, LayoutError> {
    u32::try_from(value)
        .map_err(|_| LayoutError::config(format!("{key} must be a non-negative day count, got {value}")))
}

/// Parses an RFC 3339 timestamp, or a bare date taken as midnight UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, LayoutError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| LayoutError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn reads_json5_with_comments() {
        let config = parse_config(
            r#"{
                // tighter packing for the wide dashboard
                proximityThreshold: 1.5,
                maxStackLevel: 3,
                fallbackAxisMonthStart: { month: 9, year: 2024 },
                countdownTarget: "2025-11-01",
            }"#,
        )
        .unwrap();
        assert_eq!(config.proximity_threshold, 1.5);
        assert_eq!(config.max_stack_level, 3);
        assert_eq!(
            config.fallback_axis_month_start,
            FallbackMonth { month: 9, year: Some(2024) }
        );
        assert_eq!(
            config.countdown_target.unwrap().to_rfc3339(),
            "2025-11-01T00:00:00+00:00"
        );
    }

    #[test]
    fn rejects_non_positive_threshold() {
        for threshold in ["0", "-1.0"] {
            let err = parse_config(&format!("{{ proximityThreshold: {threshold} }}")).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn rejects_negative_stack_level_and_padding() {
        assert!(parse_config("{ maxStackLevel: -1 }").is_err());
        assert!(parse_config("{ leadPaddingDays: -3 }").is_err());
        assert!(parse_config("{ fallbackAxisMonthStart: 13 }").is_err());
        assert!(parse_config("{ markerIntervalDays: 0 }").is_err());
    }

    #[test]
    fn fallback_month_picks_latest_occurrence() {
        let october = FallbackMonth::default();
        let today = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(
            october.first_day(today),
            NaiveDate::from_ymd_opt(2025, 10, 1)
        );
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(
            october.first_day(today),
            NaiveDate::from_ymd_opt(2025, 10, 1)
        );
    }

    #[test]
    fn merge_leaves_validation_to_the_caller() {
        let config = merge_config("{ proximityThreshold: 0, maxStackLevel: -2 }").unwrap();
        assert_eq!(config.proximity_threshold, 0.0);
        assert_eq!(config.max_stack_level, -2);
        assert!(config.validate().is_err());
        // per-key range errors still surface
        assert!(merge_config("{ trailPaddingDays: -1 }").is_err());
    }
}
