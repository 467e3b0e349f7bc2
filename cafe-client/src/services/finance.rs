//! Daily finance reports

use chrono::NaiveDate;
use shared::finance::ReportTotals;
use shared::models::DailyReport;

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct FinanceService {
    http: HttpClient,
}

impl FinanceService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Daily reports for `from..=to`
    pub async fn daily_reports(
        &self,
        branch_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<DailyReport>> {
        let query = [
            ("branch_id", branch_id.to_string()),
            ("from", from.format("%Y-%m-%d").to_string()),
            ("to", to.format("%Y-%m-%d").to_string()),
        ];
        self.http.get_query("api/finance/daily-reports", &query).await
    }

    pub async fn totals(
        &self,
        branch_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<ReportTotals> {
        let reports = self.daily_reports(branch_id, from, to).await?;
        Ok(ReportTotals::from_reports(&reports))
    }
}
