//! Daily Report Model (finance screens)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-branch sales figures for one business day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub branch_id: i64,
    pub gross_sales: Decimal,
    #[serde(default)]
    pub discounts: Decimal,
    #[serde(default)]
    pub refunds: Decimal,
    pub order_count: u32,
}

impl DailyReport {
    /// Gross minus discounts and refunds
    pub fn net(&self) -> Decimal {
        self.gross_sales - self.discounts - self.refunds
    }
}
