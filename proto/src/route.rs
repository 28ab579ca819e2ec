use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

pub const MSG_ROUTE_CODE_BYTES: usize = 2;
pub const MSG_ROUTE_LEN_BYTES: usize = 1;
pub const MSG_ROUTE_CODE_MAX: u32 = 0xFFFF;
pub const MSG_ROUTE_NAME_MAX: usize = 255;

/// Destination handler of a message.
///
/// Names are written one byte per character. Characters above U+00FF are
/// truncated to their low 8 bits, so callers should stick to Latin-1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    None,
    Code(u32),
    Name(&'a str),
}

impl Default for Route<'_> {
    fn default() -> Self {
        Self::None
    }
}

impl<'a> From<&'a str> for Route<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<u16> for Route<'_> {
    fn from(code: u16) -> Self {
        Self::Code(u32::from(code))
    }
}

impl<'a> Route<'a> {
    /// Size of the route section, validating the route against `compress_route`.
    pub fn encoded_len(&self, compress_route: bool) -> Result<usize> {
        if compress_route {
            match *self {
                Self::Code(code) if code > MSG_ROUTE_CODE_MAX => {
                    Err(Error::RouteCodeOverflow(code))
                }
                Self::Code(_) => Ok(MSG_ROUTE_CODE_BYTES),
                _ => Err(Error::InvalidRouteKind),
            }
        } else {
            match *self {
                Self::None => Ok(MSG_ROUTE_LEN_BYTES),
                Self::Name(name) => {
                    let len = name.chars().count();
                    if len > MSG_ROUTE_NAME_MAX {
                        return Err(Error::RouteNameOverflow(len));
                    }
                    Ok(MSG_ROUTE_LEN_BYTES + len)
                }
                Self::Code(_) => Err(Error::InvalidRouteKind),
            }
        }
    }

    /// Write the route section at the start of `buf` and return the number
    /// of bytes written.
    ///
    /// `encoded_len` must have accepted this route first.
    pub fn write(&self, compress_route: bool, buf: &mut [u8]) -> usize {
        match *self {
            Self::Code(code) if compress_route => write_u16_be(code as u16, buf),
            Self::Name(name) if !name.is_empty() => {
                let mut n = MSG_ROUTE_LEN_BYTES;
                for c in name.chars() {
                    buf[n] = c as u32 as u8;
                    n += 1;
                }
                buf[0] = (n - MSG_ROUTE_LEN_BYTES) as u8;
                n
            }
            _ => {
                buf[0] = 0;
                MSG_ROUTE_LEN_BYTES
            }
        }
    }
}

/// Write `value` as 2 big-endian bytes at the start of `buf`.
pub fn write_u16_be(value: u16, buf: &mut [u8]) -> usize {
    BigEndian::write_u16(&mut buf[..MSG_ROUTE_CODE_BYTES], value);
    MSG_ROUTE_CODE_BYTES
}
