//! Shared types for the Café 1973 client
//!
//! Models mirrored from the backend API, the unified error type, and the
//! pure client-side logic the admin screens run on fetched data: weekly
//! shift grouping, waitlist notification templates, loyalty tiers, menu
//! filtering, finance totals and form validation.

pub mod catalog;
pub mod client;
pub mod error;
pub mod finance;
pub mod loyalty;
pub mod models;
pub mod response;
pub mod schedule;
pub mod validation;
pub mod waitlist;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
pub use schedule::{WeekRange, WeekSchedule, group_shifts_by_day};
