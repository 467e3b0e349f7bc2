//! Table reservation endpoints

use chrono::{NaiveDate, Utc};
use shared::models::{Reservation, ReservationStatus, ReservationStatusUpdate};
use shared::validation::ReservationForm;

use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct ReservationService {
    http: HttpClient,
}

impl ReservationService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Reservations for one branch on a calendar date
    pub async fn list(&self, branch_id: i64, date: NaiveDate) -> ClientResult<Vec<Reservation>> {
        let query = [
            ("branch_id", branch_id.to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
        ];
        self.http.get_query("api/reservations", &query).await
    }

    /// Validate the public form and submit it
    ///
    /// Invalid forms never reach the backend.
    pub async fn create(&self, form: ReservationForm) -> ClientResult<Reservation> {
        let payload = form.validate(Utc::now())?;
        self.http.post("api/reservations", &payload).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        self.http
            .patch(
                &format!("api/reservations/{id}/status"),
                &ReservationStatusUpdate { status },
            )
            .await
    }
}
