//! Concrete channel strategies

pub mod email;
pub mod push;
pub mod sms;

pub use email::EmailStrategy;
pub use push::PushStrategy;
pub use sms::SmsStrategy;
