//! Notification dispatcher - routes a message to the matching strategy

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::journal::{Journal, JournalRecord};
use super::registry::StrategyRegistry;
use super::strategy::{DispatchError, NotificationStrategy};

/// Routes messages to strategies by channel key.
///
/// Built once from a [`StrategyRegistry`] and stateless between calls:
/// lookups hit a lowercase-keyed table prepared at construction, so the
/// per-send cost does not grow with the channel set. When the registry
/// holds duplicate keys the first registered strategy keeps the slot,
/// matching the registration-order scan it replaces.
pub struct Dispatcher {
    registry: StrategyRegistry,
    by_channel: HashMap<String, Arc<dyn NotificationStrategy>>,
    journal: Option<Journal>,
    dry_run: bool,
}

impl Dispatcher {
    pub fn new(registry: StrategyRegistry) -> Self {
        let mut by_channel: HashMap<String, Arc<dyn NotificationStrategy>> = HashMap::new();
        for strategy in registry.all() {
            let key = strategy.channel().to_lowercase();
            // First registered wins; later duplicates never fire.
            by_channel
                .entry(key)
                .or_insert_with(|| Arc::clone(strategy));
        }
        Self {
            registry,
            by_channel,
            journal: None,
            dry_run: false,
        }
    }

    /// Record every successful delivery to a journal file.
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Resolve and log sends without invoking any strategy.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Send `message` through the strategy registered for `channel`.
    ///
    /// Matching is case-insensitive. An unmatched channel yields
    /// [`DispatchError::UnknownChannel`]; a strategy failure is passed
    /// through unmodified. The message itself is not validated.
    pub fn send(&self, channel: &str, message: &str) -> Result<(), DispatchError> {
        let strategy = self.by_channel.get(&channel.to_lowercase()).ok_or_else(|| {
            warn!(channel = %channel, "No strategy registered for channel");
            DispatchError::UnknownChannel {
                channel: channel.to_string(),
            }
        })?;

        if self.dry_run {
            eprintln!("[DRY-RUN] Would send via channel: {}", strategy.channel());
            return Ok(());
        }

        debug!(channel = strategy.channel(), "Dispatching notification");
        strategy.deliver(message)?;

        if let Some(journal) = &self.journal {
            let record = JournalRecord::new(strategy.channel(), message);
            if let Err(e) = journal.append(&record) {
                // Journaling is best-effort; the delivery itself succeeded.
                warn!(channel = strategy.channel(), error = %e, "Failed to journal notification");
            }
        }

        Ok(())
    }

    /// Number of registered strategies (duplicates included).
    pub fn strategy_count(&self) -> usize {
        self.registry.len()
    }

    /// Channel keys in registration order (duplicates included).
    pub fn channel_names(&self) -> Vec<&str> {
        self.registry.all().iter().map(|s| s.channel()).collect()
    }
}
