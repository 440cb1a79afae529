//! Structured SDP: parsing, writing and the accessors the transforms use.

mod data;
pub use data::{Direction, Fingerprint, Line, MediaAttribute, MediaLine, MediaType, Msid};
pub use data::{Origin, Sdp, Session, SessionAttribute, Source, SsrcGroup, Transport};

mod error;
pub use error::SdpError;

mod parser;

pub use crate::id::{Mid, SessionId, Ssrc};
