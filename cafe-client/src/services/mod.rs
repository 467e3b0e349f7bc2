//! Typed wrappers over the backend REST resources
//!
//! Each service holds a clone of the [`HttpClient`](crate::HttpClient) and
//! therefore shares its bearer token.

mod branch;
mod content;
mod finance;
mod loyalty;
mod menu;
mod reservation;
mod staff;
mod waitlist;

pub use branch::BranchService;
pub use content::ContentService;
pub use finance::FinanceService;
pub use loyalty::LoyaltyService;
pub use menu::MenuService;
pub use reservation::ReservationService;
pub use staff::StaffService;
pub use waitlist::{WaitlistService, WaitlistSource};
