//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::timestamp;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Cancelled,
    NoShow,
    Completed,
}

/// Table reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub branch_id: i64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub party_size: u32,
    #[serde(with = "timestamp")]
    pub reserved_for: DateTime<Utc>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create reservation payload
///
/// Built through [`crate::validation::ReservationForm::validate`] so it
/// never leaves the client with a missing or out-of-range field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub branch_id: i64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub party_size: u32,
    #[serde(with = "timestamp")]
    pub reserved_for: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Status transition payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}
