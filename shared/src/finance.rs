//! Finance report aggregation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DailyReport;

/// Totals over a range of daily reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub days: u32,
    pub gross_sales: Decimal,
    pub discounts: Decimal,
    pub refunds: Decimal,
    pub net_sales: Decimal,
    pub order_count: u32,
}

impl ReportTotals {
    pub fn from_reports(reports: &[DailyReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, r| {
            acc.days += 1;
            acc.gross_sales += r.gross_sales;
            acc.discounts += r.discounts;
            acc.refunds += r.refunds;
            acc.net_sales += r.net();
            acc.order_count += r.order_count;
            acc
        })
    }

    /// Net sales per order, rounded to cents; zero without orders
    pub fn average_ticket(&self) -> Decimal {
        if self.order_count == 0 {
            return Decimal::ZERO;
        }
        (self.net_sales / Decimal::from(self.order_count)).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(day: u32, gross: i64, discounts: i64, refunds: i64, orders: u32) -> DailyReport {
        DailyReport {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            branch_id: 1,
            gross_sales: Decimal::new(gross, 2),
            discounts: Decimal::new(discounts, 2),
            refunds: Decimal::new(refunds, 2),
            order_count: orders,
        }
    }

    #[test]
    fn test_totals() {
        let totals = ReportTotals::from_reports(&[
            report(8, 100_000, 5_000, 0, 80),
            report(9, 50_000, 0, 2_000, 40),
        ]);
        assert_eq!(totals.days, 2);
        assert_eq!(totals.gross_sales, Decimal::new(150_000, 2));
        assert_eq!(totals.net_sales, Decimal::new(143_000, 2));
        assert_eq!(totals.order_count, 120);
        assert_eq!(totals.average_ticket(), Decimal::new(1192, 2));
    }

    #[test]
    fn test_empty_range() {
        let totals = ReportTotals::from_reports(&[]);
        assert_eq!(totals.days, 0);
        assert_eq!(totals.average_ticket(), Decimal::ZERO);
    }
}
