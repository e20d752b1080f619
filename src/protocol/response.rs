use log::warn;
use uuid::Uuid;

use crate::error::QueryError;
use crate::net_io::{PacketReader, WireRead};
use crate::protocol::RESPONSE_MAGIC;
use crate::util::Identifier;
use crate::wire_struct;

wire_struct! {
    /// Snapshot returned by a basic query.
    ServerInfo {
        /// Server display name.
        server_name: String,
        /// Message of the day.
        motd: String,
        /// Players currently online.
        current_players: i32,
        /// Maximum player capacity.
        max_players: i32,
        /// Port the server reports itself on.
        host_port: u16,
        /// Server version string.
        version: String,
        /// Protocol version number.
        protocol_version: i32,
        /// Protocol hash string.
        protocol_hash: String,
    };

    /// One online player, as listed in a full response.
    Player {
        name: String,
        /// Reassembled from the two signed 64-bit halves on the wire.
        uuid: Uuid,
    };

    /// One installed plugin, as listed in a full response.
    Plugin {
        /// Plugin identifier, conventionally namespaced ("HytaleOne:Query").
        id: String,
        version: String,
        enabled: bool,
    };

    /// Snapshot returned by a full query: the basic fields plus player and
    /// plugin listings, in server transmission order.
    ServerInfoFull {
        #[serde(flatten)]
        info: ServerInfo,
        players: Vec<Player>,
        plugins: Vec<Plugin>,
    };
}

impl Plugin {
    /// Splits the id into its `namespace:path` parts, when it has them.
    pub fn identifier(&self) -> Option<Identifier> {
        Identifier::parse(&self.id)
    }
}

/// True iff the buffer is long enough to be a response and starts with the
/// response magic. Trailing content is not examined.
pub fn validate_response(buf: &[u8]) -> bool {
    buf.len() > RESPONSE_MAGIC.len() && buf[..RESPONSE_MAGIC.len()] == RESPONSE_MAGIC
}

/// Decodes a basic status response.
pub fn parse_basic_response(buf: &[u8]) -> Result<ServerInfo, QueryError> {
    let mut reader = begin_response(buf)?;
    ServerInfo::wire_read(&mut reader)
}

/// Decodes a full status response, including the player and plugin trailers.
pub fn parse_full_response(buf: &[u8]) -> Result<ServerInfoFull, QueryError> {
    let mut reader = begin_response(buf)?;
    ServerInfoFull::wire_read(&mut reader)
}

/// Checks the magic and positions a reader past it and the echoed type byte.
/// The echoed type is not validated; which parser ran already fixes the
/// expected shape, and ignoring it keeps old clients working against newer
/// servers.
fn begin_response(buf: &[u8]) -> Result<PacketReader<'_>, QueryError> {
    if !validate_response(buf) {
        let prefix = buf[..buf.len().min(RESPONSE_MAGIC.len())].to_vec();
        warn!(
            "Response magic mismatch: got {:02x?} in {} byte datagram",
            prefix,
            buf.len()
        );
        return Err(QueryError::InvalidMagic {
            prefix,
            length: buf.len(),
        });
    }

    let mut reader = PacketReader::new(buf);
    reader.skip(RESPONSE_MAGIC.len() + 1)?;
    Ok(reader)
}
