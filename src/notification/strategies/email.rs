//! Email channel strategy

use std::sync::Arc;

use tracing::debug;

use crate::notification::strategy::{DeliverError, NotificationStrategy};
use crate::sink::Sink;

pub const CHANNEL: &str = "email";

/// Delivers messages through the email medium.
///
/// The actual transport (SMTP client, provider API) lives behind the
/// injected sink; this strategy only hands the message line over.
pub struct EmailStrategy {
    sink: Arc<dyn Sink>,
}

impl EmailStrategy {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }
}

impl NotificationStrategy for EmailStrategy {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn deliver(&self, message: &str) -> Result<(), DeliverError> {
        self.sink
            .write(message)
            .map_err(|e| DeliverError::new(CHANNEL, e))?;
        debug!(channel = CHANNEL, "Email notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_email_strategy_writes_message_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let strategy = EmailStrategy::new(sink.clone());

        assert_eq!(strategy.channel(), "email");
        strategy.deliver("Hi").unwrap();
        assert_eq!(sink.lines(), vec!["Hi"]);
    }
}
