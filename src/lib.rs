//! notify-hub - pluggable notification dispatch
//!
//! Strategies for concrete channels (email, SMS, push) register with a
//! registry at bootstrap; a stateless dispatcher routes each message to the
//! strategy matching its channel key. Real transports sit behind an
//! injected [`sink::Sink`].

pub mod budget;
pub mod cli;
pub mod config;
pub mod notification;
pub mod sink;

pub use budget::SpendingPlan;
pub use config::Config;
pub use notification::{
    DeliverError, DispatchError, Dispatcher, Journal, JournalRecord, NotificationBuilder,
    NotificationStrategy, StrategyRegistry,
};
pub use sink::{ConsoleSink, MemorySink, Sink};
