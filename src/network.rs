use std::time::Duration;

use log::debug;
use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::error::QueryError;

/// Largest payload a UDP datagram can carry.
const MAX_DATAGRAM: usize = 65535;

/// Runs exactly one request/response exchange against `host:port`.
///
/// Binds an ephemeral socket, sends the request, then waits for whichever
/// comes first: an inbound datagram (resolved with its bytes), a socket
/// error ([`QueryError::Transport`]) or the deadline
/// ([`QueryError::Timeout`]). The socket lives in this call frame, so it is
/// released on every exit path, and once the deadline settles the pending
/// receive is dropped with it; a late datagram is discarded by the OS, not
/// acted upon.
pub async fn exchange(
    host: &str,
    port: u16,
    request: &[u8],
    deadline: Duration,
) -> Result<Vec<u8>, QueryError> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).await?;
    // Connecting scopes the socket to the queried server: datagrams from any
    // other source never reach the receive below.
    socket.connect((host, port)).await?;

    debug!("Sending {} byte query to {}:{}", request.len(), host, port);
    socket.send(request).await?;

    let mut buf = vec![0u8; MAX_DATAGRAM];
    match timeout(deadline, socket.recv(&mut buf)).await {
        Ok(Ok(received)) => {
            debug!("Received {} byte response from {}:{}", received, host, port);
            buf.truncate(received);
            Ok(buf)
        }
        Ok(Err(e)) => Err(QueryError::Transport(e)),
        Err(_) => Err(QueryError::Timeout(deadline)),
    }
}
