//! Contact form delivery.
//!
//! A [`ContactRequest`] is rendered into an HTML-formatted notification and
//! posted to the Telegram Bot API. Delivery is best effort: every failure is
//! logged and reported as `false`, never retried.

mod client;
mod message;
mod monitor;
mod transport;

pub use client::{Credentials, DEFAULT_API_BASE, SubmitError, TelegramClient};
pub use message::{ContactRequest, MISSING_FIELD, MISSING_MESSAGE, format_message};
pub use monitor::{ContactMonitor, SubmissionStatus};
pub use transport::{Transport, TransportError, UreqTransport};
