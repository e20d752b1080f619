//! Client for the Hytale server query protocol: a single UDP
//! request/response exchange returning either a basic status snapshot or a
//! full one with player and plugin listings.
//!
//! The main API surface is [`query`], [`query_full`] and [`query_with`].

pub mod error;
pub mod net_io;
pub mod network;
pub mod protocol;
pub mod query;
pub mod util;

pub use error::QueryError;
pub use protocol::request::QueryRequest;
pub use protocol::response::{
    parse_basic_response, parse_full_response, validate_response, Player, Plugin, ServerInfo,
    ServerInfoFull,
};
pub use protocol::QueryType;
pub use query::{
    query, query_full, query_with, QueryOptions, ServerStatus, DEFAULT_PORT, DEFAULT_TIMEOUT,
};
pub use util::Identifier;
