//! Form input validation
//!
//! Each screen's form deserializes into a typed `*Form` struct and is turned
//! into the backend payload through `validate()`. A form that fails
//! validation never produces a request. The backend re-validates anyway.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{
    PointsAdjustment, ReservationCreate, ShiftCreate, ShiftPosition, WaitlistCreate,
};

// ── Text length limits ──────────────────────────────────────────────

/// Customer and employee names
pub const MAX_NAME_LEN: usize = 120;

/// Notes and free-form messages
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 32;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Largest party the floor can seat in one booking
pub const MAX_PARTY_SIZE: u32 = 20;

/// Longest shift the scheduler accepts
pub const MAX_SHIFT_HOURS: i64 = 16;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Loose phone check: digits with optional leading `+`, spaces and dashes
pub fn validate_phone(value: &str, field: &str) -> AppResult<()> {
    validate_required_text(value, field, MAX_PHONE_LEN)?;
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = body.chars().filter(char::is_ascii_digit).count();
    let valid_chars = body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
    if !valid_chars || digits < 6 {
        return Err(
            AppError::with_message(ErrorCode::InvalidFormat, format!("{field} is not a valid phone number"))
                .with_detail("field", field),
        );
    }
    Ok(())
}

/// Minimal email shape check: `local@domain.tld`
pub fn validate_email(value: &Option<String>, field: &str) -> AppResult<()> {
    validate_optional_text(value, field, MAX_EMAIL_LEN)?;
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        let valid = v
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            });
        if !valid {
            return Err(
                AppError::with_message(ErrorCode::InvalidFormat, format!("{field} is not a valid email"))
                    .with_detail("field", field),
            );
        }
    }
    Ok(())
}

/// Validate a party size against `1..=MAX_PARTY_SIZE`
pub fn validate_party_size(party_size: u32) -> AppResult<()> {
    if party_size == 0 || party_size > MAX_PARTY_SIZE {
        return Err(AppError::with_message(
            ErrorCode::PartySizeOutOfRange,
            format!("party_size must be between 1 and {MAX_PARTY_SIZE}"),
        )
        .with_detail("field", "party_size"));
    }
    Ok(())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ── Forms ───────────────────────────────────────────────────────────

/// Public reservation form
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationForm {
    pub branch_id: i64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub party_size: u32,
    #[serde(with = "crate::models::serde_helpers::timestamp")]
    pub reserved_for: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ReservationForm {
    /// Check the form at `now` and build the request payload
    pub fn validate(self, now: DateTime<Utc>) -> AppResult<ReservationCreate> {
        validate_required_text(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_phone(&self.phone, "phone")?;
        validate_email(&self.email, "email")?;
        validate_party_size(self.party_size)?;
        validate_optional_text(&self.notes, "notes", MAX_NOTE_LEN)?;
        if self.reserved_for <= now {
            return Err(AppError::new(ErrorCode::ReservationInPast).with_detail("field", "reserved_for"));
        }
        Ok(ReservationCreate {
            branch_id: self.branch_id,
            customer_name: self.customer_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: normalize(self.email),
            party_size: self.party_size,
            reserved_for: self.reserved_for,
            notes: normalize(self.notes),
        })
    }
}

/// Host-stand "add to waitlist" form
#[derive(Debug, Clone, Deserialize)]
pub struct WaitlistForm {
    pub branch_id: i64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub party_size: u32,
    #[serde(default)]
    pub estimated_wait: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WaitlistForm {
    pub fn validate(self) -> AppResult<WaitlistCreate> {
        validate_required_text(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_phone(&self.phone, "phone")?;
        validate_email(&self.email, "email")?;
        validate_party_size(self.party_size)?;
        validate_optional_text(&self.notes, "notes", MAX_NOTE_LEN)?;
        if let Some(wait) = self.estimated_wait
            && wait > 240
        {
            return Err(AppError::out_of_range(
                "estimated_wait",
                "estimated_wait must be at most 240 minutes",
            ));
        }
        Ok(WaitlistCreate {
            branch_id: self.branch_id,
            customer_name: self.customer_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: normalize(self.email),
            party_size: self.party_size,
            estimated_wait: self.estimated_wait,
            notes: normalize(self.notes),
        })
    }
}

/// Shift editor form
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftForm {
    pub employee_id: i64,
    pub branch_id: i64,
    #[serde(with = "crate::models::serde_helpers::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::models::serde_helpers::timestamp")]
    pub end_time: DateTime<Utc>,
    pub position: ShiftPosition,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftForm {
    pub fn validate(self) -> AppResult<ShiftCreate> {
        if self.end_time <= self.start_time {
            return Err(AppError::new(ErrorCode::ShiftInvalidRange).with_detail("field", "end_time"));
        }
        if self.end_time - self.start_time > Duration::hours(MAX_SHIFT_HOURS) {
            return Err(AppError::out_of_range(
                "end_time",
                format!("shift cannot be longer than {MAX_SHIFT_HOURS} hours"),
            ));
        }
        validate_optional_text(&self.notes, "notes", MAX_NOTE_LEN)?;
        Ok(ShiftCreate {
            employee_id: self.employee_id,
            branch_id: self.branch_id,
            start_time: self.start_time,
            end_time: self.end_time,
            position: self.position,
            notes: normalize(self.notes),
        })
    }
}

/// Check a manual points adjustment against the current balance
pub fn validate_points_adjustment(adj: &PointsAdjustment, balance: i64) -> AppResult<()> {
    if adj.points == 0 {
        return Err(AppError::out_of_range("points", "points must not be zero"));
    }
    validate_required_text(&adj.reason, "reason", MAX_NOTE_LEN)?;
    if adj.points > 0 {
        return Ok(());
    }
    let requested = adj.points.unsigned_abs();
    match balance.checked_add(adj.points) {
        Some(remaining) if remaining >= 0 => Ok(()),
        Some(_) => Err(AppError::new(ErrorCode::InsufficientPoints)
            .with_detail("balance", balance)
            .with_detail("requested", requested)),
        None => Err(AppError::out_of_range("points", "points adjustment is out of range")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 9, 12, 0, 0).unwrap()
    }

    fn reservation_json(party: u32, reserved_for: &str) -> String {
        format!(
            r#"{{"branch_id":1,"customer_name":" Ana ","phone":"+351 912-345-678",
                "email":"","party_size":{party},"reserved_for":"{reserved_for}"}}"#
        )
    }

    #[test]
    fn test_reservation_form_valid() {
        let form: ReservationForm =
            serde_json::from_str(&reservation_json(4, "2024-01-10T20:00")).unwrap();
        let create = form.validate(now()).unwrap();
        assert_eq!(create.customer_name, "Ana");
        assert_eq!(create.email, None);
        assert_eq!(create.party_size, 4);
    }

    #[test]
    fn test_reservation_form_missing_field_rejected_at_boundary() {
        let json = r#"{"branch_id":1,"phone":"912345678","party_size":2,
            "reserved_for":"2024-01-10T20:00"}"#;
        assert!(serde_json::from_str::<ReservationForm>(json).is_err());
    }

    #[test]
    fn test_reservation_form_party_size_range() {
        for party in [0, MAX_PARTY_SIZE + 1] {
            let form: ReservationForm =
                serde_json::from_str(&reservation_json(party, "2024-01-10T20:00")).unwrap();
            let err = form.validate(now()).unwrap_err();
            assert_eq!(err.code, ErrorCode::PartySizeOutOfRange);
            assert_eq!(err.field(), Some("party_size"));
        }
    }

    #[test]
    fn test_reservation_form_in_past() {
        let form: ReservationForm =
            serde_json::from_str(&reservation_json(2, "2024-01-09T11:59")).unwrap();
        let err = form.validate(now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationInPast);
    }

    #[test]
    fn test_phone_and_email_checks() {
        assert!(validate_phone("+351 912 345 678", "phone").is_ok());
        assert_eq!(
            validate_phone("call me", "phone").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert_eq!(
            validate_phone("  ", "phone").unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert!(validate_email(&Some("ana@cafe1973.pt".into()), "email").is_ok());
        assert!(validate_email(&None, "email").is_ok());
        assert!(validate_email(&Some("ana@".into()), "email").is_err());
    }

    #[test]
    fn test_waitlist_form() {
        let form = WaitlistForm {
            branch_id: 1,
            customer_name: "Rui".into(),
            phone: "912345678".into(),
            email: None,
            party_size: 3,
            estimated_wait: Some(20),
            notes: Some("  ".into()),
        };
        let create = form.clone().validate().unwrap();
        assert_eq!(create.notes, None);

        let mut bad = form;
        bad.estimated_wait = Some(600);
        assert_eq!(
            bad.validate().unwrap_err().field(),
            Some("estimated_wait")
        );
    }

    #[test]
    fn test_shift_form_date_ordering() {
        let start = now();
        let form = ShiftForm {
            employee_id: 1,
            branch_id: 1,
            start_time: start,
            end_time: start,
            position: ShiftPosition::Server,
            notes: None,
        };
        assert_eq!(
            form.clone().validate().unwrap_err().code,
            ErrorCode::ShiftInvalidRange
        );

        let mut long = form.clone();
        long.end_time = start + Duration::hours(MAX_SHIFT_HOURS + 1);
        assert_eq!(long.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);

        let mut just_over = form.clone();
        just_over.end_time = start + Duration::hours(MAX_SHIFT_HOURS) + Duration::minutes(1);
        assert_eq!(just_over.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);

        let mut exact = form.clone();
        exact.end_time = start + Duration::hours(MAX_SHIFT_HOURS);
        assert!(exact.validate().is_ok());

        let mut ok = form;
        ok.end_time = start + Duration::hours(8);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_points_adjustment() {
        let redeem = PointsAdjustment {
            points: -150,
            reason: "Free coffee".into(),
        };
        assert!(validate_points_adjustment(&redeem, 200).is_ok());
        assert_eq!(
            validate_points_adjustment(&redeem, 100).unwrap_err().code,
            ErrorCode::InsufficientPoints
        );
        let zero = PointsAdjustment {
            points: 0,
            reason: "noop".into(),
        };
        assert!(validate_points_adjustment(&zero, 100).is_err());
    }

    #[test]
    fn test_points_adjustment_extremes_do_not_overflow() {
        let drain = PointsAdjustment {
            points: i64::MIN,
            reason: "Import fix".into(),
        };
        assert_eq!(
            validate_points_adjustment(&drain, 0).unwrap_err().code,
            ErrorCode::InsufficientPoints
        );
        let err = validate_points_adjustment(&drain, -1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.field(), Some("points"));

        let grant = PointsAdjustment {
            points: i64::MAX,
            reason: "Import fix".into(),
        };
        assert!(validate_points_adjustment(&grant, i64::MAX).is_ok());
    }

    #[test]
    fn test_text_limits() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "customer_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.field(), Some("customer_name"));
    }
}
