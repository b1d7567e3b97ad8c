//! Strategy registry - the fixed set of available channels

use std::sync::Arc;
use tracing::info;

use super::strategy::NotificationStrategy;

/// Ordered, append-only collection of notification strategies.
///
/// Assembled once at bootstrap and handed to the [`Dispatcher`] by value;
/// nothing mutates it afterwards. Channel key uniqueness is not enforced
/// here - if two strategies claim the same key, the first registered one
/// wins at lookup time.
///
/// [`Dispatcher`]: super::Dispatcher
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn NotificationStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy. Bootstrap-time only; there is no removal.
    pub fn register(&mut self, strategy: Arc<dyn NotificationStrategy>) {
        info!(channel = strategy.channel(), "Registering notification strategy");
        self.strategies.push(strategy);
    }

    /// All registered strategies, in registration order.
    pub fn all(&self) -> &[Arc<dyn NotificationStrategy>] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
