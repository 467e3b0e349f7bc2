//! Loyalty Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer loyalty account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Spendable points
    pub points_balance: i64,
    /// Cumulative points ever earned; drives the tier
    pub lifetime_points: i64,
}

/// Named threshold level in the loyalty program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyTier {
    pub name: String,
    pub min_lifetime_points: i64,
    /// Points earned per currency unit spent
    #[serde(default = "default_multiplier")]
    pub multiplier: Decimal,
    #[serde(default)]
    pub perks: Vec<String>,
}

fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// Manual points adjustment (earn or redeem)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsAdjustment {
    /// Positive to credit, negative to redeem
    pub points: i64,
    pub reason: String,
}
