//! Waitlist Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::serde_helpers::timestamp_opt;

/// Waitlist entry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistStatus {
    Waiting,
    Notified,
    Seated,
    Cancelled,
    NoShow,
}

impl WaitlistStatus {
    pub const ALL: [WaitlistStatus; 5] = [
        Self::Waiting,
        Self::Notified,
        Self::Seated,
        Self::Cancelled,
        Self::NoShow,
    ];

    /// Wire value, also used as the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Notified => "notified",
            Self::Seated => "seated",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Still occupying a place in the queue
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Waiting | Self::Notified)
    }
}

impl fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Waitlist entry (one waiting party)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: i64,
    #[serde(default)]
    pub branch_id: Option<i64>,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub party_size: u32,
    pub status: WaitlistStatus,
    pub quote_number: String,
    /// Quoted wait in minutes
    #[serde(default)]
    pub estimated_wait: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp_opt")]
    pub notified_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp_opt")]
    pub seated_at: Option<DateTime<Utc>>,
}

/// Create waitlist entry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistCreate {
    pub branch_id: i64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub party_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_wait: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Status transition payload (seat, cancel, no-show)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistStatusUpdate {
    pub status: WaitlistStatus,
}

/// Branch waitlist counters shown above the board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitlistSummary {
    #[serde(default)]
    pub total_waiting: u32,
    #[serde(default)]
    pub total_notified: u32,
    #[serde(default)]
    pub seated_today: u32,
    #[serde(default)]
    pub average_wait_minutes: Option<f64>,
}

/// Channel used to tell a party their table is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMethod {
    Sms,
    Whatsapp,
    Call,
    Email,
}

impl NotificationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Whatsapp => "WhatsApp",
            Self::Call => "Phone call",
            Self::Email => "Email",
        }
    }
}

/// Notify-customer request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub method: NotificationMethod,
    pub message: String,
}

/// Notify-customer response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, with = "timestamp_opt")]
    pub notified_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&WaitlistStatus::NoShow).unwrap(),
            "\"no_show\""
        );
        let s: WaitlistStatus = serde_json::from_str("\"notified\"").unwrap();
        assert_eq!(s, WaitlistStatus::Notified);
        for status in WaitlistStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_entry_minimal_payload() {
        let json = r#"{
            "id": 9, "customer_name": "Ana", "phone": "+351900000000",
            "party_size": 4, "status": "waiting", "quote_number": "A42",
            "created_at": "2024-01-09T12:30:00Z", "notified_at": null
        }"#;
        let entry: WaitlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.party_size, 4);
        assert!(entry.created_at.is_some());
        assert!(entry.notified_at.is_none());
        assert!(entry.status.is_open());
    }

    #[test]
    fn test_notification_method_wire_values() {
        let m: NotificationMethod = serde_json::from_str("\"whatsapp\"").unwrap();
        assert_eq!(m, NotificationMethod::Whatsapp);
        assert_eq!(
            serde_json::to_string(&NotificationMethod::Sms).unwrap(),
            "\"sms\""
        );
    }
}
