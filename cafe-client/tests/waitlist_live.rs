// cafe-client/tests/waitlist_live.rs
// Live waitlist view against an in-memory source

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cafe_client::{
    ClientError, ClientResult, LiveViewOptions, WaitlistLiveView, WaitlistSnapshot, WaitlistSource,
};
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use shared::models::{
    NotificationMethod, NotifyRequest, NotifyResponse, WaitlistEntry, WaitlistStatus,
    WaitlistSummary,
};
use tokio::sync::watch;

#[derive(Default)]
struct FakeSource {
    entries: Mutex<Vec<WaitlistEntry>>,
    notified: Mutex<Vec<(i64, NotifyRequest)>>,
    list_calls: AtomicUsize,
    list_delay: Mutex<Duration>,
    fail_list: AtomicBool,
    fail_notify: AtomicBool,
}

impl FakeSource {
    fn with_entries(entries: Vec<WaitlistEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(entries),
            ..Default::default()
        })
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistSource for FakeSource {
    async fn list(
        &self,
        _branch_id: i64,
        status: WaitlistStatus,
    ) -> ClientResult<Vec<WaitlistEntry>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.list_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("backend down".into()));
        }
        Ok(self
            .entries
            .lock()
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect())
    }

    async fn summary(&self, _branch_id: i64) -> ClientResult<WaitlistSummary> {
        let entries = self.entries.lock();
        let count = |s| entries.iter().filter(|e| e.status == s).count() as u32;
        Ok(WaitlistSummary {
            total_waiting: count(WaitlistStatus::Waiting),
            total_notified: count(WaitlistStatus::Notified),
            seated_today: count(WaitlistStatus::Seated),
            average_wait_minutes: None,
        })
    }

    async fn notify(&self, entry_id: i64, request: &NotifyRequest) -> ClientResult<NotifyResponse> {
        if self.fail_notify.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("sms gateway unavailable".into()));
        }
        self.notified.lock().push((entry_id, request.clone()));
        self.set(entry_id, WaitlistStatus::Notified);
        Ok(NotifyResponse {
            success: true,
            message: None,
            notified_at: Some(Utc::now()),
        })
    }

    async fn update_status(
        &self,
        entry_id: i64,
        status: WaitlistStatus,
    ) -> ClientResult<WaitlistEntry> {
        self.set(entry_id, status)
            .ok_or_else(|| ClientError::NotFound(format!("entry {entry_id}")))
    }
}

impl FakeSource {
    fn set(&self, entry_id: i64, status: WaitlistStatus) -> Option<WaitlistEntry> {
        let mut entries = self.entries.lock();
        let entry = entries.iter_mut().find(|e| e.id == entry_id)?;
        entry.status = status;
        Some(entry.clone())
    }
}

fn entry(id: i64, name: &str, party_size: u32, quote: &str, minute: u32) -> WaitlistEntry {
    WaitlistEntry {
        id,
        branch_id: Some(1),
        customer_name: name.to_string(),
        phone: "+351 912 345 678".to_string(),
        email: None,
        party_size,
        status: WaitlistStatus::Waiting,
        quote_number: quote.to_string(),
        estimated_wait: Some(15),
        notes: None,
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 9, 12, minute, 0).unwrap()),
        notified_at: None,
        seated_at: None,
    }
}

fn slow_refresh() -> LiveViewOptions {
    LiveViewOptions {
        refresh_interval: Duration::from_secs(3600),
        clock_interval: Duration::from_millis(20),
    }
}

async fn wait_for_generation(
    rx: &mut watch::Receiver<WaitlistSnapshot>,
    generation: u64,
) -> WaitlistSnapshot {
    tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|s| s.generation >= generation),
    )
    .await
    .expect("timed out waiting for refresh")
    .expect("view stopped")
    .clone()
}

#[tokio::test]
async fn test_initial_refresh_publishes_filtered_entries() {
    let mut seated = entry(3, "Rui", 2, "A40", 1);
    seated.status = WaitlistStatus::Seated;
    let source = FakeSource::with_entries(vec![
        entry(2, "Marta", 3, "A43", 10),
        entry(1, "Ana", 4, "A42", 5),
        seated,
    ]);

    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let snapshot = wait_for_generation(&mut rx, 1).await;

    let ids: Vec<i64> = snapshot.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2], "oldest first, seated filtered out");
    assert_eq!(snapshot.summary.as_ref().unwrap().total_waiting, 2);
    assert!(snapshot.is_loaded());
    assert!(snapshot.last_error.is_none());

    view.shutdown().await;
}

#[tokio::test]
async fn test_periodic_refresh() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let options = LiveViewOptions {
        refresh_interval: Duration::from_millis(30),
        clock_interval: Duration::from_secs(1),
    };
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, options);
    let mut rx = view.subscribe();

    wait_for_generation(&mut rx, 3).await;
    assert!(source.list_calls() >= 3);

    view.shutdown().await;
}

#[tokio::test]
async fn test_notify_sends_default_message_and_refreshes() {
    let source = FakeSource::with_entries(vec![
        entry(1, "Ana", 4, "A42", 5),
        entry(2, "Marta", 3, "A43", 10),
    ]);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let first = wait_for_generation(&mut rx, 1).await;
    let ana = first.entries[0].clone();

    let response = view
        .notify(&ana, NotificationMethod::Sms, None)
        .await
        .unwrap();
    assert!(response.success);

    let sent = source.notified.lock().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, 1);
    assert_eq!(sent[0].1.method, NotificationMethod::Sms);
    assert_eq!(
        sent[0].1.message,
        "Hello Ana! Your table for 4 is ready. Please proceed to the host stand. Quote: A42"
    );

    let after = wait_for_generation(&mut rx, 2).await;
    let ids: Vec<i64> = after.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2], "notified entry leaves the waiting view");

    view.shutdown().await;
}

#[tokio::test]
async fn test_notify_custom_message_overrides_template() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let first = wait_for_generation(&mut rx, 1).await;

    view.notify(
        &first.entries[0],
        NotificationMethod::Whatsapp,
        Some("  Your table by the window is ready  "),
    )
    .await
    .unwrap();

    let sent = source.notified.lock().clone();
    assert_eq!(sent[0].1.message, "Your table by the window is ready");

    view.shutdown().await;
}

#[tokio::test]
async fn test_failed_notify_returns_error_without_refresh() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    source.fail_notify.store(true, Ordering::SeqCst);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let first = wait_for_generation(&mut rx, 1).await;

    let result = view
        .notify(&first.entries[0], NotificationMethod::Sms, None)
        .await;
    assert!(matches!(result, Err(ClientError::Internal(_))));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(view.snapshot().generation, 1);
    assert_eq!(source.list_calls(), 1, "no retry, no extra refresh");

    view.shutdown().await;
}

#[tokio::test]
async fn test_seat_refreshes_board() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let first = wait_for_generation(&mut rx, 1).await;

    let seated = view.seat(&first.entries[0]).await.unwrap();
    assert_eq!(seated.status, WaitlistStatus::Seated);

    let after = wait_for_generation(&mut rx, 2).await;
    assert!(after.entries.is_empty());
    assert_eq!(after.summary.unwrap().seated_today, 1);

    view.shutdown().await;
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_entries() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut rx = view.subscribe();
    let first = wait_for_generation(&mut rx, 1).await;

    source.fail_list.store(true, Ordering::SeqCst);
    view.request_refresh();
    let failed = wait_for_generation(&mut rx, 2).await;

    assert_eq!(failed.entries, first.entries);
    assert_eq!(failed.refreshed_at, first.refreshed_at);
    assert!(failed.last_error.as_deref().unwrap().contains("backend down"));

    source.fail_list.store(false, Ordering::SeqCst);
    view.request_refresh();
    let recovered = wait_for_generation(&mut rx, 3).await;
    assert!(recovered.last_error.is_none());

    view.shutdown().await;
}

#[tokio::test]
async fn test_clock_ticks() {
    let source = FakeSource::with_entries(Vec::new());
    let view = WaitlistLiveView::spawn(source, 1, WaitlistStatus::Waiting, slow_refresh());
    let mut clock = view.clock();
    let start = *clock.borrow_and_update();

    tokio::time::timeout(Duration::from_secs(2), clock.changed())
        .await
        .expect("clock did not tick")
        .unwrap();
    assert!(*clock.borrow() >= start);

    view.shutdown().await;
}

#[tokio::test]
async fn test_clock_ticks_while_refresh_in_flight() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    *source.list_delay.lock() = Duration::from_secs(3);
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, slow_refresh());
    let mut clock = view.clock();
    clock.borrow_and_update();

    let mut ticks = 0;
    let _ = tokio::time::timeout(Duration::from_millis(500), async {
        while clock.changed().await.is_ok() {
            ticks += 1;
        }
    })
    .await;

    assert_eq!(source.list_calls(), 1);
    assert_eq!(view.snapshot().generation, 0, "first refresh still running");
    assert!(ticks >= 5, "clock ticked {ticks} times during a slow refresh");

    // Shutdown interrupts the in-flight refresh
    tokio::time::timeout(Duration::from_secs(1), view.shutdown())
        .await
        .expect("shutdown waited for the slow refresh");
}

#[tokio::test]
async fn test_shutdown_stops_polling() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let options = LiveViewOptions {
        refresh_interval: Duration::from_millis(20),
        clock_interval: Duration::from_secs(1),
    };
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, options);
    let mut rx = view.subscribe();
    wait_for_generation(&mut rx, 2).await;

    view.shutdown().await;
    let calls = source.list_calls();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(source.list_calls(), calls);
}

#[tokio::test]
async fn test_drop_stops_polling() {
    let source = FakeSource::with_entries(vec![entry(1, "Ana", 4, "A42", 5)]);
    let options = LiveViewOptions {
        refresh_interval: Duration::from_millis(20),
        clock_interval: Duration::from_secs(1),
    };
    let view = WaitlistLiveView::spawn(source.clone(), 1, WaitlistStatus::Waiting, options);
    let mut rx = view.subscribe();
    wait_for_generation(&mut rx, 1).await;

    drop(view);
    // Sender side goes away once the task exits
    tokio::time::timeout(Duration::from_secs(2), async {
        while rx.changed().await.is_ok() {}
    })
    .await
    .expect("view task kept running after drop");
}
