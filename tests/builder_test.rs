//! Bootstrap wiring: config-driven registry assembly and open/closed
//! extension with caller-supplied strategies

use std::sync::Arc;

use notify_hub::config::Config;
use notify_hub::notification::{DeliverError, NotificationBuilder, NotificationStrategy};
use notify_hub::sink::{MemorySink, Sink};

/// A channel the core has never heard of, registered from the outside.
struct WebhookStrategy {
    sink: Arc<MemorySink>,
}

impl NotificationStrategy for WebhookStrategy {
    fn channel(&self) -> &str {
        "webhook"
    }

    fn deliver(&self, message: &str) -> Result<(), DeliverError> {
        self.sink
            .write(message)
            .map_err(|e| DeliverError::new("webhook", e))
    }
}

#[test]
fn test_extra_strategy_extends_dispatch_without_core_changes() {
    let webhook_sink = Arc::new(MemorySink::new());
    let dispatcher = NotificationBuilder::new()
        .channels(vec!["email".into()])
        .strategy(Arc::new(WebhookStrategy {
            sink: webhook_sink.clone(),
        }))
        .build();

    assert_eq!(dispatcher.channel_names(), vec!["email", "webhook"]);

    dispatcher.send("WEBHOOK", "ping").unwrap();
    assert_eq!(webhook_sink.lines(), vec!["ping"]);
}

#[test]
fn test_config_selects_the_registered_channels() {
    let config = Config {
        channels: vec!["push".into(), "email".into()],
        journal: false,
        journal_path: None,
    };

    let dispatcher = NotificationBuilder::from_config(&config).build();
    assert_eq!(dispatcher.channel_names(), vec!["push", "email"]);
    assert!(dispatcher.send("sms", "x").is_err());
}

#[test]
fn test_journal_records_successful_sends() {
    let dir = tempfile::tempdir().unwrap();
    let journal_path = dir.path().join("journal.jsonl");

    let config = Config {
        channels: vec!["email".into()],
        journal: true,
        journal_path: Some(journal_path.clone()),
    };

    let sink = Arc::new(MemorySink::new());
    let dispatcher = NotificationBuilder::from_config(&config)
        .sink(sink)
        .build();

    dispatcher.send("email", "Hi").unwrap();
    let _ = dispatcher.send("fax", "never delivered");

    let records = notify_hub::notification::Journal::new(journal_path)
        .recent(10)
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].channel, "email");
    assert_eq!(records[0].summary, "Hi");
}

#[test]
fn test_dry_run_leaves_sinks_untouched() {
    let sink = Arc::new(MemorySink::new());
    let dispatcher = NotificationBuilder::new()
        .channels(vec!["email".into(), "sms".into()])
        .sink(sink.clone())
        .dry_run(true)
        .build();

    dispatcher.send("email", "Hi").unwrap();
    assert!(sink.is_empty());
}
