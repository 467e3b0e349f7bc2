//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status the backend answers with for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::ReservationNotFound
            | Self::WaitlistEntryNotFound
            | Self::ShiftNotFound
            | Self::EmployeeNotFound
            | Self::BranchNotFound
            | Self::LoyaltyAccountNotFound
            | Self::TierNotFound
            | Self::MenuItemNotFound
            | Self::MenuCategoryNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists
            | Self::ReservationSlotUnavailable
            | Self::WaitlistEntryClosed
            | Self::ShiftOverlap => StatusCode::CONFLICT,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied | Self::AdminRequired | Self::BranchNotAllowed => {
                StatusCode::FORBIDDEN
            }

            Self::NetworkError | Self::TimeoutError | Self::NotificationFailed => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            Self::InternalError | Self::ConfigError | Self::ContentSchemaInvalid => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Best-effort code for a bare HTTP status with no envelope code
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            s if s.is_success() => Self::Success,
            _ => Self::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::WaitlistEntryClosed.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::TokenExpired.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::PartySizeOutOfRange.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_from_http_status() {
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::UNPROCESSABLE_ENTITY),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::BAD_GATEWAY),
            ErrorCode::InternalError
        );
        assert_eq!(
            ErrorCode::from_http_status(StatusCode::NO_CONTENT),
            ErrorCode::Success
        );
    }
}
