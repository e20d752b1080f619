pub mod packet;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::error;
use uuid::Uuid;

use crate::error::QueryError;

/// Sequential reader over a response datagram.
///
/// Keeps a single monotonically increasing offset; every read checks the
/// remaining length before touching the buffer, so a truncated datagram
/// surfaces as [`QueryError::Truncated`] instead of a short or garbage value.
#[derive(Debug)]
pub struct PacketReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> PacketReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes exactly `width` bytes, advancing the offset.
    pub fn read_bytes(&mut self, width: usize) -> Result<&'a [u8], QueryError> {
        if width > self.remaining() {
            return Err(QueryError::Truncated {
                offset: self.offset,
                needed: width,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.offset..self.offset + width];
        self.offset += width;
        Ok(slice)
    }

    pub fn skip(&mut self, width: usize) -> Result<(), QueryError> {
        self.read_bytes(width).map(|_| ())
    }
}

/// A value that can be decoded from its wire representation.
pub trait WireRead: Sized {
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError>;
}

/// A value that can be encoded into its wire representation.
pub trait WireWrite {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError>;
}

macro_rules! fixed_int_impl {
    ($(
    $i:ident, $width:literal, $endian:ident, $read:ident, $write:ident
    ),* $(,)?) => {
        $(
            impl WireRead for $i {
                fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
                    Ok($endian::$read(reader.read_bytes($width)?))
                }
            }

            impl WireWrite for $i {
                fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
                    let mut raw = [0u8; $width];
                    $endian::$write(&mut raw, *self);
                    buffer.extend_from_slice(&raw);
                    Ok(())
                }
            }
        )*
    };
}

// Counts, versions and ports are little-endian; UUID halves travel in
// network byte order.
fixed_int_impl!(
    u16, 2, LittleEndian, read_u16, write_u16,
    i32, 4, LittleEndian, read_i32, write_i32,
    i64, 8, BigEndian, read_i64, write_i64,
);

impl WireRead for u8 {
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
        Ok(reader.read_bytes(1)?[0])
    }
}

impl WireWrite for u8 {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        buffer.push(*self);
        Ok(())
    }
}

impl WireRead for bool {
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
        Ok(u8::wire_read(reader)? != 0)
    }
}

impl WireWrite for bool {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        buffer.push(if *self { 1 } else { 0 });
        Ok(())
    }
}

impl WireRead for String {
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
        let size = u16::wire_read(reader)? as usize;
        let bytes = reader.read_bytes(size)?;
        String::from_utf8(bytes.to_vec()).map_err(QueryError::from)
    }
}

impl WireWrite for String {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        self.as_str().wire_write(buffer)
    }
}

impl WireWrite for &str {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        let bytes = self.as_bytes();
        if bytes.len() > u16::MAX as usize {
            error!(
                "Write string too long (max size: {}, string size: {})",
                u16::MAX,
                bytes.len()
            );
            return Err(QueryError::OversizeString(bytes.len()));
        }

        (bytes.len() as u16).wire_write(buffer)?;
        buffer.extend_from_slice(bytes);
        Ok(())
    }
}

impl WireRead for Uuid {
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
        let msb = i64::wire_read(reader)?;
        let lsb = i64::wire_read(reader)?;
        Ok(Uuid::from_u64_pair(msb as u64, lsb as u64))
    }
}

impl WireWrite for Uuid {
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        let (msb, lsb) = self.as_u64_pair();
        (msb as i64).wire_write(buffer)?;
        (lsb as i64).wire_write(buffer)
    }
}

impl<T> WireRead for Vec<T>
where
    T: WireRead,
{
    fn wire_read(reader: &mut PacketReader<'_>) -> Result<Self, QueryError> {
        let count = i64::from(i32::wire_read(reader)?);
        // A negative count holds no elements, same as a zero one.
        let count = usize::try_from(count).unwrap_or(0);

        // Every element occupies at least one byte, so a count beyond the
        // remaining length can never decode; fail before allocating for it.
        if count > reader.remaining() {
            return Err(QueryError::Truncated {
                offset: reader.offset(),
                needed: count,
                remaining: reader.remaining(),
            });
        }

        let mut vals = Vec::with_capacity(count);
        for _ in 0..count {
            vals.push(T::wire_read(reader)?);
        }

        Ok(vals)
    }
}

impl<T> WireWrite for Vec<T>
where
    T: WireWrite,
{
    fn wire_write(&self, buffer: &mut Vec<u8>) -> Result<(), QueryError> {
        (self.len() as i32).wire_write(buffer)?;

        for v in self {
            v.wire_write(buffer)?;
        }

        Ok(())
    }
}
