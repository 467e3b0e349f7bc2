//! Loyalty tier resolution
//!
//! Tiers are keyed by cumulative lifetime points; the highest threshold not
//! exceeding the customer's lifetime total wins.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::LoyaltyTier;

/// Tier list ordered by threshold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierTable {
    tiers: Vec<LoyaltyTier>,
}

impl TierTable {
    pub fn new(mut tiers: Vec<LoyaltyTier>) -> Self {
        tiers.sort_by_key(|t| t.min_lifetime_points);
        Self { tiers }
    }

    pub fn tiers(&self) -> &[LoyaltyTier] {
        &self.tiers
    }

    /// Tier reached with `lifetime_points`; `None` below the first threshold
    pub fn tier_for(&self, lifetime_points: i64) -> Option<&LoyaltyTier> {
        self.tiers
            .iter()
            .rev()
            .find(|t| lifetime_points >= t.min_lifetime_points)
    }

    /// First tier not yet reached
    pub fn next_tier(&self, lifetime_points: i64) -> Option<&LoyaltyTier> {
        self.tiers
            .iter()
            .find(|t| t.min_lifetime_points > lifetime_points)
    }

    /// Points missing for the next tier; `None` at the top tier
    pub fn points_to_next(&self, lifetime_points: i64) -> Option<i64> {
        self.next_tier(lifetime_points)
            .map(|t| t.min_lifetime_points - lifetime_points)
    }

    /// Progress between the current and next threshold, in `0.0..=1.0`
    pub fn progress(&self, lifetime_points: i64) -> f64 {
        let Some(next) = self.next_tier(lifetime_points) else {
            return 1.0;
        };
        let floor = self
            .tier_for(lifetime_points)
            .map(|t| t.min_lifetime_points)
            .unwrap_or(0);
        let span = next.min_lifetime_points - floor;
        if span <= 0 {
            return 0.0;
        }
        ((lifetime_points - floor) as f64 / span as f64).clamp(0.0, 1.0)
    }

    /// Points earned for spending `amount` at the customer's current tier
    ///
    /// Fractional points are truncated; customers below every tier earn at
    /// rate 1.
    pub fn points_for_purchase(&self, amount: Decimal, lifetime_points: i64) -> i64 {
        let multiplier = self
            .tier_for(lifetime_points)
            .map(|t| t.multiplier)
            .unwrap_or(Decimal::ONE);
        amount
            .checked_mul(multiplier)
            .unwrap_or_default()
            .trunc()
            .to_i64()
            .unwrap_or(0)
            .max(0)
    }
}
