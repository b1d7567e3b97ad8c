//! Push notification channel strategy

use std::sync::Arc;

use tracing::debug;

use crate::notification::strategy::{DeliverError, NotificationStrategy};
use crate::sink::Sink;

pub const CHANNEL: &str = "push";

/// Delivers messages through the push-notification medium (APNs, FCM or
/// whatever the injected sink fronts).
pub struct PushStrategy {
    sink: Arc<dyn Sink>,
}

impl PushStrategy {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }
}

impl NotificationStrategy for PushStrategy {
    fn channel(&self) -> &str {
        CHANNEL
    }

    fn deliver(&self, message: &str) -> Result<(), DeliverError> {
        self.sink
            .write(message)
            .map_err(|e| DeliverError::new(CHANNEL, e))?;
        debug!(channel = CHANNEL, "Push notification delivered");
        Ok(())
    }
}
