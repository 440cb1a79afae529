use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sdp::Sdp;
use crate::InteropError;

/// Role of a session description in an offer/answer exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpType {
    /// The description opening a negotiation round.
    Offer,
    /// The reply to an offer.
    Answer,
}

impl fmt::Display for SdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdpType::Offer => write!(f, "offer"),
            SdpType::Answer => write!(f, "answer"),
        }
    }
}

/// A session description as handed around by signaling.
///
/// Serializes to the same JSON shape as the browser `RTCSessionDescriptionInit`.
///
/// ```
/// # use sdp_interop::{SessionDescription, SdpType};
/// let json = r#"{"type":"offer","sdp":"v=0\r\n"}"#;
/// let desc: SessionDescription = serde_json::from_str(json).unwrap();
/// assert_eq!(desc.sdp_type, SdpType::Offer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    /// Offer or answer.
    #[serde(rename = "type")]
    pub sdp_type: SdpType,
    /// The SDP text.
    pub sdp: String,
}

impl SessionDescription {
    /// A description of the given type.
    pub fn new(sdp_type: SdpType, sdp: impl Into<String>) -> Self {
        SessionDescription {
            sdp_type,
            sdp: sdp.into(),
        }
    }

    /// An offer.
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self::new(SdpType::Offer, sdp)
    }

    /// An answer.
    pub fn answer(sdp: impl Into<String>) -> Self {
        Self::new(SdpType::Answer, sdp)
    }

    pub(crate) fn parse(&self) -> Result<Sdp, InteropError> {
        Ok(Sdp::parse(&self.sdp)?)
    }

    pub(crate) fn with_sdp(&self, sdp: &Sdp) -> Self {
        SessionDescription {
            sdp_type: self.sdp_type,
            sdp: sdp.to_string(),
        }
    }
}
