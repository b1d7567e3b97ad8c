//! Notification dispatch core
//!
//! Design:
//! 1. One interface: every channel implements the `NotificationStrategy` trait
//! 2. Channels stay decoupled: each strategy lives in its own module
//! 3. Routing: `Dispatcher` resolves a channel key to the registered strategy
//! 4. Explicit wiring: `NotificationBuilder` assembles the registry at
//!    bootstrap; no container, no reflection
//!
//! # Example
//! ```no_run
//! use notify_hub::notification::NotificationBuilder;
//!
//! let dispatcher = NotificationBuilder::new()
//!     .channels(vec!["email".into(), "sms".into(), "push".into()])
//!     .build();
//!
//! dispatcher.send("email", "Hi")?;
//! # Ok::<(), notify_hub::notification::DispatchError>(())
//! ```

pub mod builder;
pub mod dispatcher;
pub mod journal;
pub mod registry;
pub mod strategies;
pub mod strategy;

pub use builder::NotificationBuilder;
pub use dispatcher::Dispatcher;
pub use journal::{Journal, JournalRecord};
pub use registry::StrategyRegistry;
pub use strategies::{EmailStrategy, PushStrategy, SmsStrategy};
pub use strategy::{DeliverError, DispatchError, NotificationStrategy};
