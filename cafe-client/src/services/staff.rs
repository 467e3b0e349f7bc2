//! Staff scheduling endpoints

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Shift, ShiftUpdate};
use shared::schedule::{WeekRange, WeekSchedule, group_shifts_by_day};
use shared::validation::{MAX_SHIFT_HOURS, ShiftForm};

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct StaffService {
    http: HttpClient,
}

impl StaffService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Shifts starting in `[from, to)` for a branch
    pub async fn shifts(
        &self,
        branch_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ClientResult<Vec<Shift>> {
        let query = [
            ("branch_id", branch_id.to_string()),
            ("start", from.to_rfc3339()),
            ("end", to.to_rfc3339()),
        ];
        self.http.get_query("api/shifts", &query).await
    }

    /// Fetch one week of shifts and bucket them per local day
    ///
    /// The query window is the week's local midnights in `tz`, so the
    /// fetched set matches the buckets the grouper builds.
    pub async fn week_schedule(
        &self,
        branch_id: i64,
        week: WeekRange,
        tz: Tz,
    ) -> ClientResult<WeekSchedule> {
        let (from, to) = week.utc_bounds(tz);
        let shifts = self.shifts(branch_id, from, to).await?;
        tracing::debug!(
            branch_id,
            week_start = %week.start(),
            fetched = shifts.len(),
            "Loaded week shifts"
        );
        Ok(group_shifts_by_day(&shifts, week, tz))
    }

    /// Validate and create a shift
    ///
    /// Rejected with `ShiftOverlap` when the employee already works an
    /// overlapping shift at the branch.
    pub async fn create_shift(&self, form: ShiftForm) -> ClientResult<Shift> {
        let payload = form.validate()?;

        // Any overlapping shift starts at most MAX_SHIFT_HOURS before this one
        let from = payload.start_time - Duration::hours(MAX_SHIFT_HOURS);
        let existing = self.shifts(payload.branch_id, from, payload.end_time).await?;
        if let Some(clash) = existing.iter().find(|s| s.overlaps(&payload)) {
            tracing::warn!(
                employee_id = payload.employee_id,
                shift_id = clash.id,
                "Shift overlaps an existing one"
            );
            return Err(AppError::new(ErrorCode::ShiftOverlap)
                .with_detail("shift_id", clash.id)
                .into());
        }

        self.http.post("api/shifts", &payload).await
    }

    pub async fn update_shift(&self, id: i64, update: &ShiftUpdate) -> ClientResult<Shift> {
        self.http.put(&format!("api/shifts/{id}"), update).await
    }

    pub async fn delete_shift(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/shifts/{id}")).await
    }

    pub async fn employees(&self, branch_id: i64) -> ClientResult<Vec<Employee>> {
        self.http
            .get_query("api/employees", &[("branch_id", branch_id)])
            .await
    }

    pub async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<Employee> {
        self.http.post("api/employees", employee).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        update: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        self.http.put(&format!("api/employees/{id}"), update).await
    }
}
