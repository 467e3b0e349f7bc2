//! Café 1973 admin client
//!
//! HTTP access to the café backend plus the long-running pieces the admin
//! screens need: the live waitlist board and the shared content store.

pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod live;
pub mod logger;
pub mod services;

pub use config::ClientConfig;
pub use content::{ContentStore, Versioned};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use live::{LiveViewOptions, WaitlistLiveView, WaitlistSnapshot};
pub use services::{
    BranchService, ContentService, FinanceService, LoyaltyService, MenuService,
    ReservationService, StaffService, WaitlistService, WaitlistSource,
};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo};
