//! Background submission so the UI never blocks on the network.

use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use crate::client::TelegramClient;
use crate::message::ContactRequest;
use crate::transport::{Transport, UreqTransport};

/// Progress of the most recent submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Runs submissions on a worker thread and exposes their outcome.
///
/// Only one submission may be in flight. If the monitor is dropped while a
/// request is pending, the request still completes and its result is
/// discarded.
#[derive(Debug)]
pub struct ContactMonitor<T = UreqTransport> {
    client: Arc<TelegramClient<T>>,
    status: Arc<RwLock<SubmissionStatus>>,
}

impl<T: Transport + 'static> ContactMonitor<T> {
    pub fn new(client: TelegramClient<T>) -> Self {
        Self {
            client: Arc::new(client),
            status: Arc::new(RwLock::new(SubmissionStatus::Idle)),
        }
    }

    /// Start delivering `request`.
    ///
    /// Returns `None` without doing anything while another submission is
    /// still sending.
    pub fn submit(&self, request: ContactRequest) -> Option<JoinHandle<bool>> {
        {
            let mut status = self.status.write().ok()?;
            if *status == SubmissionStatus::Sending {
                tracing::debug!("submission already in flight");
                return None;
            }
            *status = SubmissionStatus::Sending;
        }

        let client = self.client.clone();
        let status = self.status.clone();
        Some(thread::spawn(move || {
            let delivered = client.send_message(&request);
            if let Ok(mut s) = status.write() {
                *s = if delivered {
                    SubmissionStatus::Sent
                } else {
                    SubmissionStatus::Failed
                };
            }
            delivered
        }))
    }

    /// Current status. Falls back to `Sending` while the worker holds the lock.
    pub fn status(&self) -> SubmissionStatus {
        self.status
            .try_read()
            .map(|s| *s)
            .unwrap_or(SubmissionStatus::Sending)
    }

    pub fn is_sending(&self) -> bool {
        self.status() == SubmissionStatus::Sending
    }

    /// Clear a finished outcome back to `Idle`.
    pub fn reset(&self) {
        if let Ok(mut status) = self.status.write()
            && *status != SubmissionStatus::Sending
        {
            *status = SubmissionStatus::Idle;
        }
    }
}
