//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Reservation errors
//! - 4xxx: Waitlist errors
//! - 5xxx: Shift / staff errors
//! - 6xxx: Loyalty errors
//! - 7xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` on the wire so the backend envelope can carry it
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,
    /// Branch is outside the operator's scope
    BranchNotAllowed = 2101,

    // ==================== 3xxx: Reservation ====================
    ReservationNotFound = 3001,
    ReservationSlotUnavailable = 3002,
    ReservationInPast = 3003,
    PartySizeOutOfRange = 3004,

    // ==================== 4xxx: Waitlist ====================
    WaitlistEntryNotFound = 4001,
    WaitlistEntryClosed = 4002,
    NotificationFailed = 4003,
    NotificationMethodUnavailable = 4004,

    // ==================== 5xxx: Shift ====================
    ShiftNotFound = 5001,
    ShiftOverlap = 5002,
    ShiftInvalidRange = 5003,
    EmployeeNotFound = 5101,
    BranchNotFound = 5201,

    // ==================== 6xxx: Loyalty ====================
    LoyaltyAccountNotFound = 6001,
    InsufficientPoints = 6002,
    TierNotFound = 6003,

    // ==================== 7xxx: Catalog ====================
    MenuItemNotFound = 7001,
    MenuCategoryNotFound = 7101,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
    ConfigError = 9005,
    ContentSchemaInvalid = 9501,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::BranchNotAllowed => "Branch is not accessible for this user",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationSlotUnavailable => "Requested time slot is unavailable",
            ErrorCode::ReservationInPast => "Reservation time is in the past",
            ErrorCode::PartySizeOutOfRange => "Party size is out of range",

            // Waitlist
            ErrorCode::WaitlistEntryNotFound => "Waitlist entry not found",
            ErrorCode::WaitlistEntryClosed => "Waitlist entry is already closed",
            ErrorCode::NotificationFailed => "Customer notification failed",
            ErrorCode::NotificationMethodUnavailable => "Notification method is not available",

            // Shift
            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::ShiftOverlap => "Shift overlaps an existing shift",
            ErrorCode::ShiftInvalidRange => "Shift must end after it starts",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::BranchNotFound => "Branch not found",

            // Loyalty
            ErrorCode::LoyaltyAccountNotFound => "Loyalty account not found",
            ErrorCode::InsufficientPoints => "Insufficient points balance",
            ErrorCode::TierNotFound => "Loyalty tier not found",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuCategoryNotFound => "Menu category not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ContentSchemaInvalid => "Stored content does not match the expected schema",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a numeric code has no [`ErrorCode`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),
            2101 => Ok(ErrorCode::BranchNotAllowed),

            // Reservation
            3001 => Ok(ErrorCode::ReservationNotFound),
            3002 => Ok(ErrorCode::ReservationSlotUnavailable),
            3003 => Ok(ErrorCode::ReservationInPast),
            3004 => Ok(ErrorCode::PartySizeOutOfRange),

            // Waitlist
            4001 => Ok(ErrorCode::WaitlistEntryNotFound),
            4002 => Ok(ErrorCode::WaitlistEntryClosed),
            4003 => Ok(ErrorCode::NotificationFailed),
            4004 => Ok(ErrorCode::NotificationMethodUnavailable),

            // Shift
            5001 => Ok(ErrorCode::ShiftNotFound),
            5002 => Ok(ErrorCode::ShiftOverlap),
            5003 => Ok(ErrorCode::ShiftInvalidRange),
            5101 => Ok(ErrorCode::EmployeeNotFound),
            5201 => Ok(ErrorCode::BranchNotFound),

            // Loyalty
            6001 => Ok(ErrorCode::LoyaltyAccountNotFound),
            6002 => Ok(ErrorCode::InsufficientPoints),
            6003 => Ok(ErrorCode::TierNotFound),

            // Catalog
            7001 => Ok(ErrorCode::MenuItemNotFound),
            7101 => Ok(ErrorCode::MenuCategoryNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9501 => Ok(ErrorCode::ContentSchemaInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
