use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    Request = 0,
    Notify = 1,
    Response = 2,
    Push = 3,
}

impl MessageType {
    /// Whether messages of this type carry an identifier.
    pub fn has_id(self) -> bool {
        match self {
            Self::Request | Self::Response => true,
            Self::Notify | Self::Push => false,
        }
    }

    /// Whether messages of this type carry a route.
    pub fn has_route(self) -> bool {
        match self {
            Self::Request | Self::Notify | Self::Push => true,
            Self::Response => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Notify => "notify",
            Self::Response => "response",
            Self::Push => "push",
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use MessageType::*;

        Ok(match value {
            0 => Request,
            1 => Notify,
            2 => Response,
            3 => Push,
            _ => return Err(Error::InvalidType(value)),
        })
    }
}

impl From<MessageType> for u8 {
    fn from(ty: MessageType) -> Self {
        ty as u8
    }
}

impl FromStr for MessageType {
    type Err = Error;

    /// Parses either the lowercase name or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use MessageType::*;

        Ok(match s {
            "request" => Request,
            "notify" => Notify,
            "response" => Response,
            "push" => Push,
            _ => {
                let code = s.parse::<u8>().map_err(|_| Error::InvalidType(u8::MAX))?;
                Self::try_from(code)?
            }
        })
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
