use crate::desc::SdpType;
use crate::sdp::{Mid, Sdp, Ssrc};

/// The last Unified Plan session seen per role.
///
/// Plan B has no stable per-track mids, so this is what lets a track keep
/// its mid over repeated negotiations. Entries are only ever replaced, never
/// removed.
#[derive(Debug, Default, Clone)]
pub(crate) struct NegotiationCache {
    offer: Option<Sdp>,
    answer: Option<Sdp>,
}

impl NegotiationCache {
    pub fn get(&self, role: SdpType) -> Option<&Sdp> {
        match role {
            SdpType::Offer => self.offer.as_ref(),
            SdpType::Answer => self.answer.as_ref(),
        }
    }

    pub fn put(&mut self, role: SdpType, sdp: Sdp) {
        match role {
            SdpType::Offer => self.offer = Some(sdp),
            SdpType::Answer => self.answer = Some(sdp),
        }
    }

    /// Mid of the cached m-line carrying `ssrc`.
    ///
    /// An answer is looked up in the cached answer and then the cached offer,
    /// an offer only in the cached offer.
    pub fn mid_for_ssrc(&self, role: SdpType, ssrc: Ssrc) -> Option<&Mid> {
        let search: &[SdpType] = match role {
            SdpType::Offer => &[SdpType::Offer],
            SdpType::Answer => &[SdpType::Answer, SdpType::Offer],
        };

        search
            .iter()
            .filter_map(|r| self.get(*r))
            .flat_map(|sdp| sdp.media_lines.iter())
            .find(|m| m.sources().contains_key(&ssrc))
            .and_then(|m| m.mid())
    }
}
