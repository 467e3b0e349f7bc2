//! Unified error system for the café client
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes shared with the backend
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Reservation errors
//! - 4xxx: Waitlist errors
//! - 5xxx: Shift / staff errors
//! - 6xxx: Loyalty errors
//! - 7xxx: Catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! assert_eq!(err.message, "Resource not found");
//!
//! let err = AppError::required("customer_name");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
