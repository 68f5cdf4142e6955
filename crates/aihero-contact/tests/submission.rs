//! End-to-end submission against a local HTTP endpoint.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use aihero_contact::{ContactRequest, Credentials, MISSING_FIELD, MISSING_MESSAGE, TelegramClient};

/// Request line and body captured by the fake endpoint.
struct Captured {
    request_line: String,
    body: serde_json::Value,
}

/// Serve exactly one request with `status`, returning what was received.
fn serve_once(status: u16) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }

        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{{\"ok\":true}}"
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            body: serde_json::from_slice(&body).unwrap(),
        }
    });

    (base, handle)
}

fn credentials() -> Option<Credentials> {
    Credentials::from_parts(Some("123:abc"), Some("-100200"))
}

#[test]
fn submission_reaches_webhook_with_placeholders() {
    let (base, server) = serve_once(200);
    let client = TelegramClient::new(credentials(), &base, Duration::from_secs(5));

    let request = ContactRequest {
        name: "Aziz".to_string(),
        school: "12-maktab".to_string(),
        phone: "+998901234567".to_string(),
        email: String::new(),
        message: String::new(),
    };
    assert!(client.send_message(&request));

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /bot123:abc/sendMessage HTTP/1.1");
    assert_eq!(captured.body["chat_id"], "-100200");
    assert_eq!(captured.body["parse_mode"], "HTML");

    let text = captured.body["text"].as_str().unwrap();
    for expected in ["Aziz", "12-maktab", "+998901234567", MISSING_FIELD, MISSING_MESSAGE] {
        assert!(text.contains(expected), "missing {expected:?} in {text:?}");
    }
}

#[test]
fn server_error_reports_failure() {
    let (base, server) = serve_once(500);
    let client = TelegramClient::new(credentials(), &base, Duration::from_secs(5));

    let request = ContactRequest {
        name: "Aziz".to_string(),
        school: "12-maktab".to_string(),
        phone: "+998901234567".to_string(),
        ..Default::default()
    };
    assert!(!client.send_message(&request));
    server.join().unwrap();
}

#[test]
fn unreachable_endpoint_reports_failure() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = TelegramClient::new(
        credentials(),
        &format!("http://127.0.0.1:{port}"),
        Duration::from_secs(2),
    );
    assert!(!client.send_message(&ContactRequest::default()));
}
