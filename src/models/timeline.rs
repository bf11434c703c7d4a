use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Window presets relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Week,
    #[default]
    Month,
    Quarter,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Week => "week",
            Preset::Month => "month",
            Preset::Quarter => "quarter",
        }
    }
}

/// Timeframe as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
    Custom,
}

/// Caller-supplied custom range; either side may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Everything the resolver needs besides "now". `custom` is `Some` only
/// when the custom timeframe is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimelineSelection {
    pub preset: Preset,
    pub custom: Option<CustomRange>,
}

impl TimelineSelection {
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            custom: None,
        }
    }

    pub fn custom(preset: Preset, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            preset,
            custom: Some(CustomRange { start, end }),
        }
    }
}

/// Inclusive `[start, end]` calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineWindow {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
