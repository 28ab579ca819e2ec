//! `msg-proto` encodes request, notify, response and push messages into a
//! single compact buffer.
//!
//! The total length is computed before anything is written, so every message
//! is encoded with exactly one allocation and no resizing.
//!
//! ```text
//! +------+-------------+-------------------------+------+
//! | flag | id (varint) | route (code or name)    | body |
//! +------+-------------+-------------------------+------+
//! ```

mod encode;
mod error;
mod kind;
mod route;
pub mod varint;

pub use encode::{encode, flag_byte, Encode, Flags, Message, MSG_FLAG_BYTES};
pub use error::{Error, Result};
pub use kind::MessageType;
pub use route::{
    write_u16_be, Route, MSG_ROUTE_CODE_BYTES, MSG_ROUTE_CODE_MAX, MSG_ROUTE_LEN_BYTES,
    MSG_ROUTE_NAME_MAX,
};
