use std::time::Duration;

use serde::Serialize;

use crate::error::QueryError;
use crate::network;
use crate::protocol::request::QueryRequest;
use crate::protocol::response::{
    parse_basic_response, parse_full_response, ServerInfo, ServerInfoFull,
};
use crate::protocol::QueryType;

/// Port Hytale servers answer queries on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 5520;

/// How long a query waits for a response unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Per-call configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long to wait for the response datagram.
    pub timeout: Duration,
    /// Ask for the full listing (players and plugins) instead of the basic
    /// snapshot.
    pub full: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            full: false,
        }
    }
}

/// Result of an option-driven query: the response shape is fixed by the
/// requested type, never mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServerStatus {
    Basic(ServerInfo),
    Full(ServerInfoFull),
}

impl ServerStatus {
    /// The basic snapshot, present in both shapes.
    pub fn info(&self) -> &ServerInfo {
        match self {
            ServerStatus::Basic(info) => info,
            ServerStatus::Full(full) => &full.info,
        }
    }

    pub fn as_full(&self) -> Option<&ServerInfoFull> {
        match self {
            ServerStatus::Basic(_) => None,
            ServerStatus::Full(full) => Some(full),
        }
    }
}

/// Queries a server for its basic status.
///
/// # Example
///
/// ```no_run
/// use hyquery::{query, DEFAULT_PORT};
///
/// # async fn run() -> Result<(), hyquery::QueryError> {
/// let info = query("play.example.com", DEFAULT_PORT).await?;
/// println!(
///     "{}: {}/{}",
///     info.server_name, info.current_players, info.max_players
/// );
/// # Ok(())
/// # }
/// ```
pub async fn query(host: &str, port: u16) -> Result<ServerInfo, QueryError> {
    let raw = run(host, port, QueryType::Basic, DEFAULT_TIMEOUT).await?;
    parse_basic_response(&raw)
}

/// Queries a server for its full status, including player and plugin
/// listings.
///
/// # Example
///
/// ```no_run
/// use hyquery::{query_full, DEFAULT_PORT};
///
/// # async fn run() -> Result<(), hyquery::QueryError> {
/// let full = query_full("play.example.com", DEFAULT_PORT).await?;
/// let names: Vec<&str> = full.players.iter().map(|p| p.name.as_str()).collect();
/// println!("Players: {}", names.join(", "));
/// # Ok(())
/// # }
/// ```
pub async fn query_full(host: &str, port: u16) -> Result<ServerInfoFull, QueryError> {
    let raw = run(host, port, QueryType::Full, DEFAULT_TIMEOUT).await?;
    parse_full_response(&raw)
}

/// Queries a server with explicit options; the response shape follows
/// `options.full`.
pub async fn query_with(
    host: &str,
    port: u16,
    options: QueryOptions,
) -> Result<ServerStatus, QueryError> {
    let kind = if options.full {
        QueryType::Full
    } else {
        QueryType::Basic
    };

    let raw = run(host, port, kind, options.timeout).await?;
    match kind {
        QueryType::Basic => parse_basic_response(&raw).map(ServerStatus::Basic),
        QueryType::Full => parse_full_response(&raw).map(ServerStatus::Full),
    }
}

async fn run(
    host: &str,
    port: u16,
    kind: QueryType,
    timeout: Duration,
) -> Result<Vec<u8>, QueryError> {
    let request = QueryRequest::new(kind).encode();
    network::exchange(host, port, &request, timeout).await
}
