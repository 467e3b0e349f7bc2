//! cafe-board: host-stand board for one branch
//!
//! Logs in, syncs the marketing content documents, prints this week's shift
//! grid and then keeps the waitlist and active popups on screen until Ctrl-C.

mod board;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cafe_client::{
    BranchService, ClientConfig, ContentService, ContentStore, HttpClient, LiveViewOptions,
    StaffService, WaitlistLiveView, WaitlistService,
};
use chrono::{Utc, Weekday};
use shared::models::{POPUPS_KEY, WaitlistStatus};
use shared::schedule::WeekRange;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().map(PathBuf::from);
    cafe_client::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    let mut config = ClientConfig::from_env();
    tracing::info!(
        url = %config.base_url,
        branch_id = config.branch_id,
        "Café board starting"
    );

    let http = config
        .build_http_client()
        .context("failed to build HTTP client")?;

    if let (Ok(username), Ok(password)) = (
        std::env::var("CAFE_USERNAME"),
        std::env::var("CAFE_PASSWORD"),
    ) {
        http.login(&username, &password)
            .await
            .context("login failed")?;
    } else if !http.is_authenticated() {
        anyhow::bail!("set CAFE_API_TOKEN or CAFE_USERNAME/CAFE_PASSWORD");
    }

    // The branch record carries the authoritative timezone
    match BranchService::new(http.clone()).get(config.branch_id).await {
        Ok(branch) => {
            tracing::info!(branch = %branch.name, timezone = %branch.timezone, "Branch loaded");
            config.timezone = branch.timezone;
        }
        Err(e) => tracing::warn!(
            "Cannot load branch {}: {}, using {}",
            config.branch_id,
            e,
            config.timezone
        ),
    }

    let content = Arc::new(sync_content(&http, &config).await?);
    print_week(&http, &config).await;

    let shutdown = CancellationToken::new();
    let content_sync = ContentService::new(http.clone()).spawn_sync(
        content.clone(),
        config.content_refresh,
        shutdown.clone(),
    );

    let view = WaitlistLiveView::spawn_with_shutdown(
        Arc::new(WaitlistService::new(http.clone())),
        config.branch_id,
        WaitlistStatus::Waiting,
        LiveViewOptions::from_config(&config),
        shutdown.clone(),
    );

    let mut snapshots = view.subscribe();
    let mut popups = content.subscribe(POPUPS_KEY);
    popups.borrow_and_update();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                println!("{}", board::render_waitlist(&snapshot, Utc::now(), config.timezone));
            }
            changed = popups.changed() => {
                if changed.is_err() {
                    break;
                }
                popups.borrow_and_update();
                print_popups(&content);
            }
            _ = &mut ctrl_c => {
                tracing::info!("Ctrl-C received, shutting down");
                break;
            }
        }
    }

    shutdown.cancel();
    view.shutdown().await;
    if let Err(e) = content_sync.await {
        tracing::error!("Content sync task failed: {}", e);
    }

    if let Some(path) = &config.content_snapshot_path {
        content.save_to(path).context("failed to save content snapshot")?;
    }
    Ok(())
}

async fn sync_content(http: &HttpClient, config: &ClientConfig) -> anyhow::Result<ContentStore> {
    let store = match &config.content_snapshot_path {
        Some(path) => ContentStore::load_from(path).context("failed to load content snapshot")?,
        None => ContentStore::new(),
    };

    if let Err(e) = ContentService::new(http.clone()).sync_into(&store).await {
        tracing::warn!("Content sync failed, showing cached documents: {}", e);
    }

    print_popups(&store);
    Ok(store)
}

fn print_popups(store: &ContentStore) {
    match store.active_popups(Utc::now()) {
        Ok(popups) => {
            for popup in &popups {
                println!("[popup] {}", popup.title);
            }
        }
        Err(e) => tracing::warn!("Popups document unreadable: {}", e),
    }
}

async fn print_week(http: &HttpClient, config: &ClientConfig) {
    let week = WeekRange::current(config.timezone, Weekday::Mon);
    match StaffService::new(http.clone())
        .week_schedule(config.branch_id, week, config.timezone)
        .await
    {
        Ok(schedule) => {
            println!("── Shifts {} – {} ──", week.start(), week.end());
            print!("{}", board::render_week(&schedule, config.timezone));
        }
        Err(e) => tracing::warn!("Cannot load shifts: {}", e),
    }
}
