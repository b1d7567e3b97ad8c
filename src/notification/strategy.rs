//! Notification strategy trait and error surface

use std::io;
use thiserror::Error;

/// A pluggable delivery capability for one channel.
///
/// Implementations pair a channel key ("email", "sms", ...) with the action
/// of pushing a message through that channel's medium. Adding a new channel
/// means adding a new implementation; the registry and dispatcher stay
/// untouched.
pub trait NotificationStrategy: Send + Sync {
    /// Channel key this strategy answers to. Matched case-insensitively
    /// by the dispatcher.
    fn channel(&self) -> &str;

    /// Push one message through this channel's medium.
    fn deliver(&self, message: &str) -> Result<(), DeliverError>;
}

/// Delivery through a strategy's sink failed.
///
/// No retry semantics exist at this layer; the error is handed to the
/// caller as-is.
#[derive(Debug, Error)]
#[error("delivery via `{channel}` failed: {source}")]
pub struct DeliverError {
    pub channel: String,
    #[source]
    pub source: io::Error,
}

impl DeliverError {
    pub fn new(channel: impl Into<String>, source: io::Error) -> Self {
        Self {
            channel: channel.into(),
            source,
        }
    }
}

/// Errors surfaced by [`Dispatcher::send`](super::Dispatcher::send).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered strategy answered to the requested channel.
    #[error("no notification strategy registered for channel `{channel}`")]
    UnknownChannel { channel: String },

    /// The matched strategy failed to deliver.
    #[error(transparent)]
    Delivery(#[from] DeliverError),
}

impl DispatchError {
    /// The channel name the failed request asked for.
    pub fn channel(&self) -> &str {
        match self {
            DispatchError::UnknownChannel { channel } => channel,
            DispatchError::Delivery(e) => &e.channel,
        }
    }
}
