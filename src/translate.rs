use crate::candidate::IceCandidate;
use crate::sdp::{Mid, Sdp};
use crate::util::Pii;
use crate::InteropError;

/// Which Plan B channel each Unified Plan m-line rides on.
///
/// Made from the two sides of the last transform.
#[derive(Debug, Default, Clone)]
pub(crate) struct CandidateMap {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    unified_mid: Mid,
    unified_index: usize,
    plan_b_mid: Mid,
    plan_b_index: usize,
}

impl CandidateMap {
    /// Audio and video lines map to the channel of the same type, anything
    /// else to the Plan B line with the same mid.
    pub fn new(unified: &Sdp, plan_b: &Sdp) -> Self {
        let mut entries = vec![];

        for (unified_index, u) in unified.media_lines.iter().enumerate() {
            let Some(unified_mid) = u.mid() else {
                continue;
            };

            let found = plan_b.media_lines.iter().enumerate().find(|(_, p)| {
                if u.typ.is_media() {
                    p.typ == u.typ
                } else {
                    p.mid() == Some(unified_mid)
                }
            });

            let Some((plan_b_index, p)) = found else {
                trace!("No Plan B line for {}", unified_mid);
                continue;
            };

            let Some(plan_b_mid) = p.mid() else {
                continue;
            };

            entries.push(Entry {
                unified_mid: unified_mid.clone(),
                unified_index,
                plan_b_mid: plan_b_mid.clone(),
                plan_b_index,
            });
        }

        CandidateMap { entries }
    }

    pub fn to_plan_b(&self, c: &IceCandidate) -> Result<IceCandidate, InteropError> {
        let entry = self.find(c, |e| (&e.unified_mid, e.unified_index))?;
        debug!(
            "Candidate {} -> {} ({})",
            entry.unified_mid,
            entry.plan_b_mid,
            Pii(&c.candidate)
        );
        Ok(c.retarget(&entry.plan_b_mid, entry.plan_b_index))
    }

    /// Resolves to the first Unified Plan line on the channel. They all
    /// share the transport so any of them would do.
    pub fn to_unified_plan(&self, c: &IceCandidate) -> Result<IceCandidate, InteropError> {
        let entry = self.find(c, |e| (&e.plan_b_mid, e.plan_b_index))?;
        debug!(
            "Candidate {} -> {} ({})",
            entry.plan_b_mid,
            entry.unified_mid,
            Pii(&c.candidate)
        );
        Ok(c.retarget(&entry.unified_mid, entry.unified_index))
    }

    /// Look up by mid, by m-line index if there is no mid.
    fn find(
        &self,
        c: &IceCandidate,
        key: impl Fn(&Entry) -> (&Mid, usize),
    ) -> Result<&Entry, InteropError> {
        let found = match (&c.sdp_mid, c.sdp_m_line_index) {
            (Some(mid), _) => self.entries.iter().find(|e| *key(e).0 == **mid),
            (None, Some(idx)) => self.entries.iter().find(|e| key(e).1 == idx),
            (None, None) => None,
        };

        found.ok_or_else(|| {
            let id = match (&c.sdp_mid, c.sdp_m_line_index) {
                (Some(mid), _) => mid.clone(),
                (None, Some(idx)) => idx.to_string(),
                (None, None) => "<none>".to_string(),
            };
            InteropError::UnknownCandidateIdentifier(id)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HEAD: &str = "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n";

    fn sdp(media: &[(&str, &str)]) -> Sdp {
        let mut s = HEAD.to_string();
        for (typ, mid) in media {
            s.push_str(&format!(
                "m={typ} 9 UDP/TLS/RTP/SAVPF 0\r\na=mid:{mid}\r\na=rtcp-mux\r\n"
            ));
        }
        Sdp::parse(&s).unwrap()
    }

    fn map() -> CandidateMap {
        let unified = sdp(&[
            ("audio", "0"),
            ("video", "1"),
            ("video", "2"),
            ("application", "3"),
        ]);
        let plan_b = sdp(&[("audio", "audio"), ("video", "video"), ("application", "3")]);
        CandidateMap::new(&unified, &plan_b)
    }

    const LINE: &str = "candidate:1 1 udp 2113929471 203.0.113.100 10100 typ host";

    #[test]
    fn unified_to_plan_b_by_mid() {
        let c = map().to_plan_b(&IceCandidate::new(LINE, "2", 2)).unwrap();
        assert_eq!(c.sdp_mid.as_deref(), Some("video"));
        assert_eq!(c.sdp_m_line_index, Some(1));
        assert_eq!(c.candidate, LINE);
    }

    #[test]
    fn unified_to_plan_b_by_index() {
        let mut c = IceCandidate::new(LINE, "x", 3);
        c.sdp_mid = None;
        let c = map().to_plan_b(&c).unwrap();
        assert_eq!(c.sdp_mid.as_deref(), Some("3"));
        assert_eq!(c.sdp_m_line_index, Some(2));
    }

    #[test]
    fn plan_b_to_first_unified() {
        let c = map()
            .to_unified_plan(&IceCandidate::new(LINE, "video", 1))
            .unwrap();
        assert_eq!(c.sdp_mid.as_deref(), Some("1"));
        assert_eq!(c.sdp_m_line_index, Some(1));
    }

    #[test]
    fn unknown_mid() {
        let err = map()
            .to_unified_plan(&IceCandidate::new(LINE, "2", 0))
            .unwrap_err();
        assert!(matches!(err, InteropError::UnknownCandidateIdentifier(id) if id == "2"));
    }

    #[test]
    fn empty_map() {
        let err = CandidateMap::default()
            .to_plan_b(&IceCandidate::new(LINE, "0", 0))
            .unwrap_err();
        assert!(matches!(err, InteropError::UnknownCandidateIdentifier(_)));
    }
}
