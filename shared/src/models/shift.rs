//! Shift Model (staff schedule)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::timestamp;

/// Position worked during a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPosition {
    Barista,
    Baker,
    Cashier,
    Server,
    Kitchen,
    Manager,
    Cleaner,
}

impl ShiftPosition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Barista => "Barista",
            Self::Baker => "Baker",
            Self::Cashier => "Cashier",
            Self::Server => "Server",
            Self::Kitchen => "Kitchen",
            Self::Manager => "Manager",
            Self::Cleaner => "Cleaner",
        }
    }
}

/// Shift record - one employee working one position at one branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub employee_id: i64,
    pub branch_id: i64,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_time: DateTime<Utc>,
    pub position: ShiftPosition,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Shift {
    /// Scheduled length; zero when the record is inverted
    pub fn duration(&self) -> Duration {
        let d = self.end_time - self.start_time;
        if d < Duration::zero() { Duration::zero() } else { d }
    }

    /// Scheduled length in fractional hours
    pub fn hours(&self) -> f64 {
        self.duration().num_minutes() as f64 / 60.0
    }

    /// Whether a new shift for the same employee overlaps this one
    pub fn overlaps(&self, other: &ShiftCreate) -> bool {
        self.employee_id == other.employee_id
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

/// Create shift payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub employee_id: i64,
    pub branch_id: i64,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_time: DateTime<Utc>,
    pub position: ShiftPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update shift payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::serde_helpers::timestamp_opt"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::serde_helpers::timestamp_opt"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ShiftPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
