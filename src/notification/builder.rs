//! Bootstrap wiring - assembles the registry and dispatcher

use std::sync::Arc;

use tracing::{info, warn};

use super::dispatcher::Dispatcher;
use super::journal::Journal;
use super::registry::StrategyRegistry;
use super::strategies::{email, push, sms, EmailStrategy, PushStrategy, SmsStrategy};
use super::strategy::NotificationStrategy;
use crate::config::Config;
use crate::sink::{ConsoleSink, Sink};

/// Builds a [`Dispatcher`] from configuration plus any caller-supplied
/// strategies.
///
/// This is plain constructor injection: the host names the channels it
/// wants, the builder registers the matching built-in strategies, and
/// extra channels slot in through [`strategy`](Self::strategy) without any
/// change to dispatcher or registry code.
pub struct NotificationBuilder {
    channels: Vec<String>,
    extra: Vec<Arc<dyn NotificationStrategy>>,
    sink: Option<Arc<dyn Sink>>,
    journal: Option<Journal>,
    dry_run: bool,
}

impl NotificationBuilder {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            extra: Vec::new(),
            sink: None,
            journal: None,
            dry_run: false,
        }
    }

    /// Take enabled channels and journal settings from config.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new().channels(config.channels.clone());
        if config.journal {
            builder = builder.journal(Journal::new(config.journal_path()));
        }
        builder
    }

    /// Built-in channels to enable, by key.
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Register a caller-supplied strategy (appended after built-ins).
    pub fn strategy(mut self, strategy: Arc<dyn NotificationStrategy>) -> Self {
        self.extra.push(strategy);
        self
    }

    /// Sink shared by built-in strategies. Defaults to a per-channel
    /// labelled console sink.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Journal deliveries to a JSONL file.
    pub fn journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Dispatcher {
        let mut registry = StrategyRegistry::new();

        for channel in &self.channels {
            match channel.to_lowercase().as_str() {
                email::CHANNEL => {
                    registry.register(Arc::new(EmailStrategy::new(self.builtin_sink("Email"))));
                }
                sms::CHANNEL => {
                    registry.register(Arc::new(SmsStrategy::new(self.builtin_sink("SMS"))));
                }
                push::CHANNEL => {
                    registry.register(Arc::new(PushStrategy::new(self.builtin_sink("Push"))));
                }
                other => {
                    warn!(channel = %other, "Ignoring unknown built-in channel in config");
                }
            }
        }

        for strategy in self.extra {
            registry.register(strategy);
        }

        info!(strategies = registry.len(), "Notification registry assembled");

        let mut dispatcher = Dispatcher::new(registry).with_dry_run(self.dry_run);
        if let Some(journal) = self.journal {
            dispatcher = dispatcher.with_journal(journal);
        }
        dispatcher
    }

    fn builtin_sink(&self, label: &str) -> Arc<dyn Sink> {
        match &self.sink {
            Some(sink) => Arc::clone(sink),
            None => Arc::new(ConsoleSink::with_prefix(label)),
        }
    }
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_builder_registers_configured_channels_in_order() {
        let dispatcher = NotificationBuilder::new()
            .channels(vec!["email".into(), "sms".into(), "push".into()])
            .build();

        assert_eq!(dispatcher.channel_names(), vec!["email", "sms", "push"]);
    }

    #[test]
    fn test_builder_ignores_unknown_channel_names() {
        let dispatcher = NotificationBuilder::new()
            .channels(vec!["email".into(), "pigeon".into()])
            .build();

        assert_eq!(dispatcher.channel_names(), vec!["email"]);
    }

    #[test]
    fn test_builder_shared_sink_receives_messages() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = NotificationBuilder::new()
            .channels(vec!["email".into()])
            .sink(sink.clone())
            .build();

        dispatcher.send("email", "Hi").unwrap();
        assert_eq!(sink.lines(), vec!["Hi"]);
    }

    #[test]
    fn test_builder_from_config_uses_enabled_channels() {
        let config = Config {
            channels: vec!["sms".into()],
            journal: false,
            journal_path: None,
        };
        let dispatcher = NotificationBuilder::from_config(&config).build();
        assert_eq!(dispatcher.channel_names(), vec!["sms"]);
    }
}
