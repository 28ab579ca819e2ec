use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Message type is not one of request, notify, response or push
    #[error("Unknown message type: {0}")]
    InvalidType(u8),

    /// Route kind doesn't match the `compress_route` flag
    #[error("Route kind doesn't match the compress route flag")]
    InvalidRouteKind,

    /// Route code doesn't fit in 2 bytes
    #[error("Route code overflow: {0} > 65535")]
    RouteCodeOverflow(u32),

    /// Route name is longer than 255 characters
    #[error("Route name overflow: length {0} > 255")]
    RouteNameOverflow(usize),
}
