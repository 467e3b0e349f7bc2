//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Reservation errors (3xxx)
    Reservation,
    /// Waitlist errors (4xxx)
    Waitlist,
    /// Shift and staff errors (5xxx)
    Shift,
    /// Loyalty errors (6xxx)
    Loyalty,
    /// Catalog errors (7xxx)
    Catalog,
    /// System errors (8xxx and above)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Reservation,
            4000..5000 => Self::Waitlist,
            5000..6000 => Self::Shift,
            6000..7000 => Self::Loyalty,
            7000..8000 => Self::Catalog,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Reservation => "reservation",
            Self::Waitlist => "waitlist",
            Self::Shift => "shift",
            Self::Loyalty => "loyalty",
            Self::Catalog => "catalog",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
