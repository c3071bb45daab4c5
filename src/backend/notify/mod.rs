//! Notification Module
//!
//! Delivery of one-time verification codes over an authenticated SMTP relay.
//! Delivery is fire-and-forget: failures are logged and never fail the
//! request that triggered them.

/// SMTP mailer
pub mod mailer;

pub use mailer::{MailError, Mailer};
