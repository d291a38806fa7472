//! TCP dialing under the connect-phase timeout

use std::time::Duration;

use tokio::net::TcpStream;

use crate::error::{self, Result};

/// Open a TCP connection, failing with a timeout error once `timeout` elapses.
///
/// # Errors
///
/// Returns a connect error if resolution or the connection fails, or a
/// timeout error if the deadline passes first.
pub async fn dial(host: &str, port: u16, timeout: Option<Duration>) -> Result<TcpStream> {
    tracing::debug!(target: "chainreq_client::connect", "dialing {}:{}", host, port);

    let connect = TcpStream::connect((host, port));
    let stream = match timeout {
        Some(limit) => tokio::time::timeout(limit, connect)
            .await
            .map_err(|_| error::timeout())?,
        None => connect.await,
    }
    .map_err(|e| error::connect(format!("failed to connect to {host}:{port}: {e}")))?;

    if let Err(e) = stream.set_nodelay(true) {
        tracing::debug!(target: "chainreq_client::connect", "set_nodelay failed: {}", e);
    }
    Ok(stream)
}
