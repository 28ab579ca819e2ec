use bitflags::bitflags;
use bytes::BytesMut;

use crate::error::Result;
use crate::kind::MessageType;
use crate::route::Route;
use crate::varint;

pub const MSG_FLAG_BYTES: usize = 1;

bitflags! {
    /// Compression bits of the flag byte. Bits 1-2 hold the message type.
    pub struct Flags: u8 {
        const COMPRESS_ROUTE = 1;
        const COMPRESS_GZIP = 1 << 4;
    }
}

impl Flags {
    pub fn new(compress_route: bool, compress_gzip: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::COMPRESS_ROUTE, compress_route);
        flags.set(Self::COMPRESS_GZIP, compress_gzip);
        flags
    }
}

/// Pack the message type and compression bits into one byte.
pub fn flag_byte(ty: MessageType, flags: Flags) -> u8 {
    (u8::from(ty) << 1) | flags.bits()
}

/// A trait for messages that can be written into an exactly sized buffer.
pub trait Encode {
    /// Total number of bytes this value takes once encoded.
    fn encoded_len(&self) -> Result<usize>;

    /// Encode this value into a new vector of bytes.
    fn encode_to_vec(&self) -> Result<Vec<u8>>;
}

/// A single protocol message.
///
/// The id is ignored for notify and push messages, and the route is ignored
/// for responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    pub id: u64,
    pub ty: MessageType,
    pub route: Route<'a>,
    pub body: Option<&'a [u8]>,
    pub flags: Flags,
}

impl<'a> Message<'a> {
    pub fn new(ty: MessageType) -> Self {
        Self {
            id: 0,
            ty,
            route: Route::None,
            body: None,
            flags: Flags::empty(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_route(mut self, route: impl Into<Route<'a>>) -> Self {
        self.route = route.into();
        self
    }

    pub fn with_body(mut self, body: &'a [u8]) -> Self {
        self.body = Some(body);
        self
    }

    pub fn compress_route(mut self, enable: bool) -> Self {
        self.flags.set(Flags::COMPRESS_ROUTE, enable);
        self
    }

    pub fn compress_gzip(mut self, enable: bool) -> Self {
        self.flags.set(Flags::COMPRESS_GZIP, enable);
        self
    }

    /// Append the encoded message to `buf`.
    ///
    /// Reserves the exact length up front. On error `buf` is left untouched.
    pub fn encode_into(&self, buf: &mut BytesMut) -> Result<usize> {
        let len = self.encoded_len()?;
        let start = buf.len();
        buf.resize(start + len, 0);
        self.write(&mut buf[start..]);
        Ok(len)
    }

    fn route_len(&self) -> Result<usize> {
        if !self.ty.has_route() {
            return Ok(0);
        }
        self.route
            .encoded_len(self.flags.contains(Flags::COMPRESS_ROUTE))
            .map_err(|e| {
                tracing::debug!("Rejected route {:?}: {}", self.route, e);
                e
            })
    }

    /// Write the sections in order. `buf` must be exactly `encoded_len` bytes.
    fn write(&self, buf: &mut [u8]) {
        let mut offset = 0;

        buf[offset] = flag_byte(self.ty, self.flags);
        offset += MSG_FLAG_BYTES;

        if self.ty.has_id() {
            offset += varint::encode_varint(self.id, &mut buf[offset..]);
        }

        if self.ty.has_route() {
            let compress_route = self.flags.contains(Flags::COMPRESS_ROUTE);
            offset += self.route.write(compress_route, &mut buf[offset..]);
        }

        if let Some(body) = self.body {
            buf[offset..offset + body.len()].copy_from_slice(body);
            offset += body.len();
        }

        debug_assert_eq!(offset, buf.len());
    }
}

impl Encode for Message<'_> {
    fn encoded_len(&self) -> Result<usize> {
        let mut len = MSG_FLAG_BYTES;
        if self.ty.has_id() {
            len += varint::encoded_len(self.id);
        }
        len += self.route_len()?;
        if let Some(body) = self.body {
            len += body.len();
        }
        Ok(len)
    }

    fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.encoded_len()?];
        self.write(&mut buf);
        tracing::trace!("Encoded {} message: {} bytes", self.ty, buf.len());
        Ok(buf)
    }
}

/// Encode a message from its raw parts.
///
/// `ty` is the numeric message type code. The id is only written for
/// request and response messages and the route for everything but responses.
pub fn encode(
    id: u64,
    ty: u8,
    compress_route: bool,
    route: Route<'_>,
    body: Option<&[u8]>,
    compress_gzip: bool,
) -> Result<Vec<u8>> {
    let ty = MessageType::try_from(ty).map_err(|e| {
        tracing::debug!("Rejected message: {}", e);
        e
    })?;

    let msg = Message {
        id,
        ty,
        route,
        body,
        flags: Flags::new(compress_route, compress_gzip),
    };
    msg.encode_to_vec()
}
