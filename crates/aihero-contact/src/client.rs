//! Telegram Bot API client.

use std::time::Duration;

use serde::Serialize;

use crate::message::{ContactRequest, format_message};
use crate::transport::{Transport, TransportError, UreqTransport};

/// Default Bot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Bot token and target chat.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub chat_id: String,
}

impl Credentials {
    /// Build credentials when both parts are present and non-blank.
    pub fn from_parts(token: Option<&str>, chat_id: Option<&str>) -> Option<Self> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;
        let chat_id = chat_id.map(str::trim).filter(|c| !c.is_empty())?;
        Some(Self {
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Reasons a submission did not go through.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Telegram token or chat id is missing")]
    MissingCredentials,
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Telegram responded with status {0}")]
    Status(u16),
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Posts contact requests to a Telegram chat.
#[derive(Debug)]
pub struct TelegramClient<T = UreqTransport> {
    credentials: Option<Credentials>,
    api_base: String,
    transport: T,
}

impl TelegramClient<UreqTransport> {
    /// Client talking to `api_base` over HTTP.
    pub fn new(credentials: Option<Credentials>, api_base: &str, timeout: Duration) -> Self {
        Self::with_transport(credentials, api_base, UreqTransport::new(timeout))
    }
}

impl<T: Transport> TelegramClient<T> {
    pub fn with_transport(credentials: Option<Credentials>, api_base: &str, transport: T) -> Self {
        if credentials.is_none() {
            tracing::warn!("Telegram credentials missing; contact submissions will fail");
        }
        Self {
            credentials,
            api_base: api_base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Whether submissions can be attempted at all.
    #[cfg(test)]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, token)
    }

    /// Deliver a request, reporting why it failed.
    pub fn try_send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SubmitError::MissingCredentials)?;

        let text = format_message(request);
        let body = serde_json::to_value(SendMessage {
            chat_id: &credentials.chat_id,
            text: &text,
            parse_mode: "HTML",
        })?;

        let status = self
            .transport
            .post_json(&self.endpoint(&credentials.token), &body)?;
        if !(200..300).contains(&status) {
            return Err(SubmitError::Status(status));
        }
        Ok(())
    }

    /// Deliver a request; `true` on a 2xx response, `false` on any failure.
    pub fn send_message(&self, request: &ContactRequest) -> bool {
        match self.try_send(request) {
            Ok(()) => {
                tracing::info!("contact request delivered");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "error sending message to Telegram");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, serde_json::Value)>>>;

    struct MockTransport {
        calls: Calls,
        reply: Result<u16, TransportError>,
    }

    impl MockTransport {
        fn replying(reply: Result<u16, TransportError>) -> (Self, Calls) {
            let calls = Calls::default();
            (
                Self {
                    calls: calls.clone(),
                    reply,
                },
                calls,
            )
        }
    }

    impl Transport for MockTransport {
        fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), body.clone()));
            self.reply.clone()
        }
    }

    fn credentials() -> Option<Credentials> {
        Credentials::from_parts(Some("123:abc"), Some("-100200"))
    }

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Aziz".to_string(),
            school: "12-maktab".to_string(),
            phone: "+998901234567".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_success_on_200() {
        let (transport, calls) = MockTransport::replying(Ok(200));
        let client = TelegramClient::with_transport(credentials(), DEFAULT_API_BASE, transport);

        assert!(client.send_message(&request()));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (url, body) = &calls[0];
        assert_eq!(url, "https://api.telegram.org/bot123:abc/sendMessage");
        assert_eq!(body["chat_id"], "-100200");
        assert_eq!(body["parse_mode"], "HTML");
        assert!(body["text"].as_str().unwrap().contains("Aziz"));
    }

    #[test]
    fn test_missing_credentials_skip_network() {
        let (transport, calls) = MockTransport::replying(Ok(200));
        let client = TelegramClient::with_transport(None, DEFAULT_API_BASE, transport);

        assert!(!client.is_configured());
        assert!(!client.send_message(&request()));
        assert!(matches!(
            client.try_send(&request()),
            Err(SubmitError::MissingCredentials)
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_non_success_status() {
        let (transport, _) = MockTransport::replying(Ok(400));
        let client = TelegramClient::with_transport(credentials(), DEFAULT_API_BASE, transport);
        assert!(!client.send_message(&request()));
        assert!(matches!(
            client.try_send(&request()),
            Err(SubmitError::Status(400))
        ));
    }

    #[test]
    fn test_transport_error_is_contained() {
        let (transport, calls) =
            MockTransport::replying(Err(TransportError("connection refused".to_string())));
        let client = TelegramClient::with_transport(credentials(), DEFAULT_API_BASE, transport);
        assert!(!client.send_message(&request()));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let (transport, calls) = MockTransport::replying(Ok(204));
        let client = TelegramClient::with_transport(credentials(), "http://localhost:9/", transport);
        assert!(client.send_message(&request()));
        assert_eq!(
            calls.lock().unwrap()[0].0,
            "http://localhost:9/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_credentials_from_parts() {
        assert!(Credentials::from_parts(Some("t"), None).is_none());
        assert!(Credentials::from_parts(Some(" "), Some("1")).is_none());
        let creds = Credentials::from_parts(Some(" secret-token "), Some("1")).unwrap();
        assert_eq!(creds.token, "secret-token");
        assert!(!format!("{creds:?}").contains("secret-token"));
    }
}
