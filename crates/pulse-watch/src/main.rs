//! Live feedback watcher entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pulse-watch -- <event-id>
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).
//! The event id may also come from `PULSE_EVENT_ID`.

use std::sync::Arc;

use anyhow::Context;
use pulse_client::HttpApiClient;
use pulse_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use pulse_core::value_objects::EventId;
use pulse_service::{
    EventService, FeedbackAnalytics, FeedbackNotification, LiveFeedbackViewModel,
    NotificationKind, ServiceContextBuilder,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Watcher failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_app_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        api = %config.api.base_url,
        poll_secs = config.live.poll_interval_secs,
        "Configuration loaded"
    );

    let event_id = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PULSE_EVENT_ID").ok())
        .context("usage: pulse-watch <event-id> (or set PULSE_EVENT_ID)")?;

    let client = Arc::new(HttpApiClient::new(&config.api)?);
    let ctx = ServiceContextBuilder::from_config(&config)
        .api(client)
        .build()?;

    // Check-in count drives the feedback rate; the watcher works without it
    let checked_in = match EventService::new(&ctx).event(&EventId::new(event_id.trim())).await {
        Ok(event) => {
            info!(title = %event.title, status = %event.status, "Watching event");
            event.checked_in_count
        }
        Err(e) => {
            warn!(error = %e, "Could not load event details");
            None
        }
    };

    let live = LiveFeedbackViewModel::new(ctx.clone());
    let mut notifications = live.subscribe();
    live.start(&event_id).await?;

    let mut summary = tokio::time::interval(ctx.poll_interval());
    summary.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            received = notifications.recv() => match received {
                Ok(notification) => print_notification(&notification),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Dropped notifications"),
                Err(RecvError::Closed) => break,
            },
            _ = summary.tick() => print_summary(&live.analytics(), checked_in),
        }
    }

    live.stop();
    info!("Watcher stopped");
    Ok(())
}

fn print_notification(notification: &FeedbackNotification) {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "!!",
    };
    println!("[{marker}] {}: {}", notification.title, notification.message);
}

fn print_summary(analytics: &FeedbackAnalytics, checked_in: Option<u32>) {
    let reactions: Vec<String> = analytics
        .reaction_breakdown
        .iter()
        .map(|(reaction, count)| format!("{reaction} {count}"))
        .collect();
    let rate = checked_in
        .and_then(|n| analytics.feedback_rate(n))
        .map_or_else(|| "-".to_string(), |r| format!("{r:.0}%"));

    println!(
        "{} items | {} | +{} -{} ~{} | rate {rate}",
        analytics.total,
        reactions.join(" "),
        analytics.sentiment.positive,
        analytics.sentiment.negative,
        analytics.sentiment.neutral,
    );

    if !analytics.keywords.is_empty() {
        let words: Vec<String> = analytics
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.word, k.count))
            .collect();
        println!("  keywords: {}", words.join(", "));
    }
}
