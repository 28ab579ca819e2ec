//! Little-endian base-128 encoding used for message identifiers.
//!
//! Every byte holds 7 bits of the value, least significant group first.
//! The high bit is set on every byte except the last.

/// Maximum number of bytes a `u64` takes once encoded.
pub const MAX_VARINT_LEN: usize = 10;

/// Number of bytes needed to encode `id`. Zero still takes one byte.
pub fn encoded_len(mut id: u64) -> usize {
    let mut len = 0;
    loop {
        len += 1;
        id >>= 7;
        if id == 0 {
            return len;
        }
    }
}

/// Write `id` at the start of `buf` and return the number of bytes written.
///
/// Panics if `buf` is shorter than `encoded_len(id)`.
pub fn encode_varint(mut id: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let low = (id & 0x7F) as u8;
        id >>= 7;
        if id == 0 {
            buf[i] = low;
            return i + 1;
        }
        buf[i] = low | 0x80;
        i += 1;
    }
}
