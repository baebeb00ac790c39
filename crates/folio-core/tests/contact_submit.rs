//! Contact form submission tests
//!
//! Runs the contact client against a throwaway HTTP responder on localhost.

use folio_core::{ContactClient, ContactFields, FormStatus};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// ============================================================================
// Test Utilities
// ============================================================================

/// Serve a single request with `status_line`, returning the raw request.
async fn respond_once(status_line: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then as much body as Content-Length announces.
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let body_len = text
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + body_len {
                    break;
                }
            }
        }

        let response = format!("{status_line}\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}");
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&request).to_string());
    });

    (url, rx)
}

fn fields() -> ContactFields {
    ContactFields {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello there".to_string(),
    }
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_success_status_is_sent() {
    let (url, request) = respond_once("HTTP/1.1 200 OK").await;
    let client = ContactClient::new(url);

    assert_eq!(client.submit(&fields()).await, FormStatus::Sent);

    let request = request.await.unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /f/contact"));
    assert!(lower.contains("accept: application/json"));
    assert!(lower.contains("content-type: application/x-www-form-urlencoded"));
    assert!(request.contains("name=Ada+Lovelace"));
    assert!(request.contains("email=ada%40example.com"));
}

#[tokio::test]
async fn test_failure_status_is_rejected() {
    let (url, _request) = respond_once("HTTP/1.1 422 Unprocessable Entity").await;
    let client = ContactClient::new(url);

    assert_eq!(client.submit(&fields()).await, FormStatus::Rejected);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind and drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ContactClient::new(format!("http://{addr}/f/contact"));
    assert_eq!(client.submit(&fields()).await, FormStatus::NetworkError);
}
