//! SMS channel strategy

use std::sync::Arc;

use tracing::debug;

use crate::notification::strategy::{DeliverError, NotificationStrategy};
use crate::sink::Sink;

pub const CHANNEL: &str = "sms";

/// Delivers messages through the SMS medium. The gateway itself is the
/// injected sink's concern.
pub struct SmsStrategy {
    sink: Arc<dyn Sink>,
}

impl SmsStrategy {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }
}

impl NotificationStrategy for SmsStrategy {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn deliver(&self, message: &str) -> Result<(), DeliverError> {
        self.sink
            .write(message)
            .map_err(|e| DeliverError::new(CHANNEL, e))?;
        debug!(channel = CHANNEL, "SMS notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_sms_strategy_writes_message_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let strategy = SmsStrategy::new(sink.clone());

        assert_eq!(strategy.channel(), "sms");
        strategy.deliver("Code:123").unwrap();
        assert_eq!(sink.lines(), vec!["Code:123"]);
    }
}
