use std::time::Duration;

/// Everything that can go wrong between sending a query and handing the
/// caller a decoded record.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The datagram did not start with the response magic, or was too short
    /// to carry it. Holds the offending prefix for diagnostics.
    #[error("invalid response magic {prefix:02x?} in {length} byte datagram")]
    InvalidMagic { prefix: Vec<u8>, length: usize },

    /// A decode step needed more bytes than the datagram had left.
    #[error("truncated response: needed {needed} byte(s) at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A length-prefixed string field did not contain valid UTF-8.
    #[error("response string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A string too long for its u16 length prefix was written.
    #[error("string of {0} bytes does not fit a u16 length prefix")]
    OversizeString(usize),

    /// No datagram arrived within the configured timeout.
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    /// The underlying socket failed to send or receive.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}
