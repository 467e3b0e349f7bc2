//! Data models
//!
//! Mirrors of the backend's JSON bodies. All IDs are `i64`; instants are
//! `DateTime<Utc>` parsed through [`serde_helpers`].

pub mod branch;
pub mod content;
pub mod daily_report;
pub mod employee;
pub mod loyalty;
pub mod menu;
pub mod reservation;
pub mod serde_helpers;
pub mod shift;
pub mod waitlist;

// Re-exports
pub use branch::*;
pub use content::*;
pub use daily_report::*;
pub use employee::*;
pub use loyalty::*;
pub use menu::*;
pub use reservation::*;
pub use shift::*;
pub use waitlist::*;
