//! HTTP CONNECT tunnel establishment
//!
//! Opens a tunnel through an HTTP proxy so TLS can be negotiated end to end
//! with the origin.

use http::HeaderValue;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::{self, Result};

/// Upper bound on the proxy's response head
const MAX_CONNECT_RESPONSE: usize = 8 * 1024;

/// Establish HTTP CONNECT tunnel through proxy.
///
/// # Errors
///
/// Returns a connect error if the proxy cannot be written to, closes the
/// connection, or answers with anything other than a 2xx status.
pub async fn establish_connect_tunnel(
    mut proxy_stream: TcpStream,
    authority: &str,
    auth: Option<&HeaderValue>,
) -> Result<TcpStream> {
    let mut connect_request = format!("CONNECT {authority} HTTP/1.1\r\nHost: {authority}\r\n");
    if let Some(auth) = auth.and_then(|v| v.to_str().ok()) {
        connect_request.push_str("Proxy-Authorization: ");
        connect_request.push_str(auth);
        connect_request.push_str("\r\n");
    }
    connect_request.push_str("\r\n");

    proxy_stream
        .write_all(connect_request.as_bytes())
        .await
        .map_err(|e| error::connect(format!("failed to send CONNECT request: {e}")))?;

    // Read byte-wise so nothing past the response head is consumed
    let mut head = Vec::with_capacity(256);
    let mut byte = [0_u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        if head.len() >= MAX_CONNECT_RESPONSE {
            return Err(error::connect("CONNECT response head too large"));
        }
        let read = proxy_stream
            .read(&mut byte)
            .await
            .map_err(|e| error::connect(format!("failed to read CONNECT response: {e}")))?;
        if read == 0 {
            return Err(error::connect(crate::error::ConnectionClosed));
        }
        head.push(byte[0]);
    }

    let head = String::from_utf8_lossy(&head);
    let status_line = head.lines().next().unwrap_or_default();
    let status = status_line.split_whitespace().nth(1).unwrap_or_default();
    if !status.starts_with('2') {
        return Err(error::connect(format!("CONNECT failed: {}", status_line.trim())));
    }

    tracing::debug!(target: "chainreq_client::connect", "tunnel established to {}", authority);
    Ok(proxy_stream)
}
