//! Plain-text rendering of the host-stand board

use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::schedule::WeekSchedule;
use shared::waitlist::wait_minutes;

use cafe_client::WaitlistSnapshot;

pub fn render_waitlist(snapshot: &WaitlistSnapshot, now: DateTime<Utc>, tz: Tz) -> String {
    let mut out = String::new();

    let refreshed = snapshot
        .refreshed_at
        .map(|t| t.with_timezone(&tz).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    let _ = writeln!(out, "── Waitlist (updated {refreshed}) ──");

    if let Some(summary) = &snapshot.summary {
        let _ = write!(
            out,
            "waiting {} · notified {} · seated today {}",
            summary.total_waiting, summary.total_notified, summary.seated_today
        );
        if let Some(avg) = summary.average_wait_minutes {
            let _ = write!(out, " · avg wait {avg:.0} min");
        }
        out.push('\n');
    }

    if snapshot.entries.is_empty() {
        out.push_str("  (nobody waiting)\n");
    }
    for entry in &snapshot.entries {
        let waited = wait_minutes(entry, now)
            .map(|m| format!("{m} min"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:<6} {:<24} party of {:<2} {:>8}",
            entry.quote_number, entry.customer_name, entry.party_size, waited
        );
    }

    if let Some(err) = &snapshot.last_error {
        let _ = writeln!(out, "  ! last refresh failed: {err}");
    }
    out
}

pub fn render_week(schedule: &WeekSchedule, tz: Tz) -> String {
    let mut out = String::new();
    for (date, shifts) in schedule.iter() {
        let _ = write!(out, "{} {}:", date.format("%a"), date);
        if shifts.is_empty() {
            out.push_str(" -");
        }
        for shift in shifts {
            let _ = write!(
                out,
                " #{}@{} {}",
                shift.employee_id,
                shift.start_time.with_timezone(&tz).format("%H:%M"),
                shift.position.label()
            );
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::{WaitlistEntry, WaitlistStatus, WaitlistSummary};

    #[test]
    fn test_render_waitlist() {
        let now = Utc.with_ymd_and_hms(2024, 1, 9, 12, 30, 0).unwrap();
        let snapshot = WaitlistSnapshot {
            entries: vec![WaitlistEntry {
                id: 1,
                branch_id: Some(1),
                customer_name: "Ana".into(),
                phone: "+351912345678".into(),
                email: None,
                party_size: 4,
                status: WaitlistStatus::Waiting,
                quote_number: "A42".into(),
                estimated_wait: None,
                notes: None,
                created_at: Some(Utc.with_ymd_and_hms(2024, 1, 9, 12, 5, 0).unwrap()),
                notified_at: None,
                seated_at: None,
            }],
            summary: Some(WaitlistSummary {
                total_waiting: 1,
                ..Default::default()
            }),
            generation: 1,
            refreshed_at: Some(now),
            last_error: None,
        };
        let text = render_waitlist(&snapshot, now, chrono_tz::UTC);
        assert!(text.contains("updated 12:30:00"));
        assert!(text.contains("A42"));
        assert!(text.contains("25 min"));
    }

    #[test]
    fn test_render_empty_week() {
        let week = shared::WeekRange::starting(chrono::NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        let schedule = shared::group_shifts_by_day(&[], week, chrono_tz::UTC);
        let text = render_week(&schedule, chrono_tz::UTC);
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("Sun 2024-01-07: -"));
    }

    #[test]
    fn test_render_week_lists_positions() {
        use shared::models::{Shift, ShiftPosition};

        let week = shared::WeekRange::starting(chrono::NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        let shift = Shift {
            id: 1,
            employee_id: 10,
            branch_id: 1,
            start_time: Utc.with_ymd_and_hms(2024, 1, 9, 6, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 9, 14, 0, 0).unwrap(),
            position: ShiftPosition::Baker,
            notes: None,
        };
        let schedule = shared::group_shifts_by_day(&[shift], week, chrono_tz::UTC);
        let text = render_week(&schedule, chrono_tz::UTC);
        assert_eq!(text.lines().nth(2), Some("Tue 2024-01-09: #10@06:00 Baker"));
    }
}
