//! Waitlist endpoints and the source abstraction the live view polls

use async_trait::async_trait;
use shared::models::{
    NotifyRequest, NotifyResponse, WaitlistEntry, WaitlistStatus, WaitlistStatusUpdate,
    WaitlistSummary,
};
use shared::validation::WaitlistForm;

use crate::{ClientResult, HttpClient};

/// Backend calls a waitlist view depends on
#[async_trait]
pub trait WaitlistSource: Send + Sync + 'static {
    /// Entries of a branch in `status`
    async fn list(&self, branch_id: i64, status: WaitlistStatus)
    -> ClientResult<Vec<WaitlistEntry>>;

    /// Headline counters for a branch
    async fn summary(&self, branch_id: i64) -> ClientResult<WaitlistSummary>;

    /// Send the "table ready" message to a waiting party
    async fn notify(&self, entry_id: i64, request: &NotifyRequest)
    -> ClientResult<NotifyResponse>;

    async fn update_status(
        &self,
        entry_id: i64,
        status: WaitlistStatus,
    ) -> ClientResult<WaitlistEntry>;
}

#[derive(Debug, Clone)]
pub struct WaitlistService {
    http: HttpClient,
}

impl WaitlistService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Validate the host-stand form and add the party to the queue
    pub async fn create(&self, form: WaitlistForm) -> ClientResult<WaitlistEntry> {
        let payload = form.validate()?;
        let entry: WaitlistEntry = self.http.post("api/waitlist", &payload).await?;
        tracing::info!(entry_id = entry.id, quote = %entry.quote_number, "Party added to waitlist");
        Ok(entry)
    }
}

#[async_trait]
impl WaitlistSource for WaitlistService {
    async fn list(
        &self,
        branch_id: i64,
        status: WaitlistStatus,
    ) -> ClientResult<Vec<WaitlistEntry>> {
        let query = [
            ("branch_id", branch_id.to_string()),
            ("status", status.as_str().to_string()),
        ];
        self.http.get_query("api/waitlist", &query).await
    }

    async fn summary(&self, branch_id: i64) -> ClientResult<WaitlistSummary> {
        self.http
            .get_query("api/waitlist/summary", &[("branch_id", branch_id)])
            .await
    }

    async fn notify(
        &self,
        entry_id: i64,
        request: &NotifyRequest,
    ) -> ClientResult<NotifyResponse> {
        self.http
            .post(&format!("api/waitlist/{entry_id}/notify"), request)
            .await
    }

    async fn update_status(
        &self,
        entry_id: i64,
        status: WaitlistStatus,
    ) -> ClientResult<WaitlistEntry> {
        self.http
            .patch(
                &format!("api/waitlist/{entry_id}/status"),
                &WaitlistStatusUpdate { status },
            )
            .await
    }
}
