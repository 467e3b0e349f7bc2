//! Loyalty program endpoints

use shared::loyalty::TierTable;
use shared::models::{LoyaltyAccount, LoyaltyTier, PointsAdjustment};
use shared::validation::validate_points_adjustment;

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct LoyaltyService {
    http: HttpClient,
}

impl LoyaltyService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn account(&self, id: i64) -> ClientResult<LoyaltyAccount> {
        self.http.get(&format!("api/loyalty/accounts/{id}")).await
    }

    /// Look an account up by phone number; `None` when no account matches
    pub async fn find_by_phone(&self, phone: &str) -> ClientResult<Option<LoyaltyAccount>> {
        match self
            .http
            .get_query::<LoyaltyAccount, _>("api/loyalty/accounts/lookup", &[("phone", phone.trim())])
            .await
        {
            Ok(account) => Ok(Some(account)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Tier table, sorted by threshold
    pub async fn tiers(&self) -> ClientResult<TierTable> {
        let tiers: Vec<LoyaltyTier> = self.http.get("api/loyalty/tiers").await?;
        Ok(TierTable::new(tiers))
    }

    /// Manually credit or debit points
    ///
    /// Rejected locally when a debit would take the balance below zero.
    pub async fn adjust_points(
        &self,
        account: &LoyaltyAccount,
        adjustment: &PointsAdjustment,
    ) -> ClientResult<LoyaltyAccount> {
        validate_points_adjustment(adjustment, account.points_balance)?;
        let updated: LoyaltyAccount = self
            .http
            .post(&format!("api/loyalty/accounts/{}/adjust", account.id), adjustment)
            .await?;
        tracing::info!(
            account_id = account.id,
            points = adjustment.points,
            balance = updated.points_balance,
            "Loyalty points adjusted"
        );
        Ok(updated)
    }
}
