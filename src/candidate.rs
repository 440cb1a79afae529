use serde::{Deserialize, Serialize};

/// A trickled ICE candidate and the m-line it belongs to.
///
/// Serializes to the same JSON shape as the browser `RTCIceCandidateInit`.
///
/// ```json
/// {
///  "candidate": "candidate:1 1 udp 2113929471 203.0.113.100 10100 typ host",
///  "sdpMid": "audio",
///  "sdpMLineIndex": 0,
///  "usernameFragment": "ufrag"
/// }
/// ```
///
/// The candidate line itself is never interpreted, only the m-line identifiers
/// are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidate {
    /// The candidate line, `candidate:...`.
    pub candidate: String,
    /// The mid of the m-line the candidate is for.
    #[serde(default)]
    pub sdp_mid: Option<String>,
    /// The index of the m-line the candidate is for.
    #[serde(default)]
    pub sdp_m_line_index: Option<usize>,
    /// ICE ufrag, passed along untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_fragment: Option<String>,
}

impl IceCandidate {
    /// A candidate for the m-line with `sdp_mid` at `sdp_m_line_index`.
    pub fn new(candidate: impl Into<String>, sdp_mid: &str, sdp_m_line_index: usize) -> Self {
        IceCandidate {
            candidate: candidate.into(),
            sdp_mid: Some(sdp_mid.to_string()),
            sdp_m_line_index: Some(sdp_m_line_index),
            username_fragment: None,
        }
    }

    /// Same candidate line pointed at another m-line.
    pub(crate) fn retarget(&self, sdp_mid: &str, sdp_m_line_index: usize) -> Self {
        IceCandidate {
            candidate: self.candidate.clone(),
            sdp_mid: Some(sdp_mid.to_string()),
            sdp_m_line_index: Some(sdp_m_line_index),
            username_fragment: self.username_fragment.clone(),
        }
    }
}
