//! # Fly Network Test Server
//!
//! File: cli/src/common/network/testing.rs
//!
//! ## Overview
//!
//! A loopback HTTP server for unit tests that answers exactly one request
//! with a fixed status line and body, so the download and release paths can
//! be exercised without reaching the internet.
//!
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one request with `status` (e.g. `"200 OK"`) and `body`.
///
/// Returns the base URL (`http://127.0.0.1:<port>`); any path under it gets
/// the same response.
pub async fn serve_once(status: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(head.as_bytes()).await.unwrap();
        stream.write_all(&body).await.unwrap();
        stream.shutdown().await.unwrap();
    });

    format!("http://{}", addr)
}
