// src/models/activity.rs

//! Activity tiers derived from a location's average crowd report.
//!
//! Tiers use half-open intervals, lower bound inclusive:
//! - N/A: no reports (average <= 0, NaN or absent)
//! - Not busy: 0 < average < 1
//! - Slightly busy: 1 <= average < 2
//! - Busy: 2 <= average < 3
//! - Very busy: 3 <= average < 4
//! - Extremely busy: average >= 4

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete busyness bucket for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTier {
    #[default]
    NoReports,
    NotBusy,
    SlightlyBusy,
    Busy,
    VeryBusy,
    ExtremelyBusy,
}

/// Semantic style category for a tier. Presentation maps these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    Neutral,
    Calm,
    Mild,
    Moderate,
    High,
    Critical,
}

/// Lower bounds (inclusive) checked from the top down.
/// Values at or below zero never reach this table.
const TIER_BOUNDS: [(f64, ActivityTier); 5] = [
    (4.0, ActivityTier::ExtremelyBusy),
    (3.0, ActivityTier::VeryBusy),
    (2.0, ActivityTier::Busy),
    (1.0, ActivityTier::SlightlyBusy),
    (0.0, ActivityTier::NotBusy),
];

/// Classify an average report value into a tier.
pub fn classify(value: f64) -> ActivityTier {
    if value.is_nan() || value <= 0.0 {
        return ActivityTier::NoReports;
    }

    TIER_BOUNDS
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(ActivityTier::NoReports, |(_, tier)| *tier)
}

/// Classify an average that may be missing from the status record.
pub fn classify_average(value: Option<f64>) -> ActivityTier {
    value.map_or(ActivityTier::NoReports, classify)
}

impl ActivityTier {
    /// All tiers, least to most busy.
    pub const ALL: [ActivityTier; 6] = [
        ActivityTier::NoReports,
        ActivityTier::NotBusy,
        ActivityTier::SlightlyBusy,
        ActivityTier::Busy,
        ActivityTier::VeryBusy,
        ActivityTier::ExtremelyBusy,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ActivityTier::NoReports => "N/A",
            ActivityTier::NotBusy => "Not busy",
            ActivityTier::SlightlyBusy => "Slightly busy",
            ActivityTier::Busy => "Busy",
            ActivityTier::VeryBusy => "Very busy",
            ActivityTier::ExtremelyBusy => "Extremely busy",
        }
    }

    pub fn style(self) -> StyleTag {
        match self {
            ActivityTier::NoReports => StyleTag::Neutral,
            ActivityTier::NotBusy => StyleTag::Calm,
            ActivityTier::SlightlyBusy => StyleTag::Mild,
            ActivityTier::Busy => StyleTag::Moderate,
            ActivityTier::VeryBusy => StyleTag::High,
            ActivityTier::ExtremelyBusy => StyleTag::Critical,
        }
    }
}

impl fmt::Display for ActivityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl StyleTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Neutral => "neutral",
            StyleTag::Calm => "calm",
            StyleTag::Mild => "mild",
            StyleTag::Moderate => "moderate",
            StyleTag::High => "high",
            StyleTag::Critical => "critical",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
