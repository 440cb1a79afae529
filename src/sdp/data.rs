#![allow(clippy::single_match)]

use combine::EasyParser;
use std::collections::BTreeMap;
use std::fmt;

use crate::id::{Mid, SessionId, Ssrc};

use super::parser::sdp_parser;
use super::SdpError;

/// A parsed session description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sdp {
    /// Everything before the first m= line.
    pub session: Session,
    /// The m= sections in order.
    pub media_lines: Vec<MediaLine>,
}

impl Sdp {
    /// Parse SDP text.
    pub fn parse(input: &str) -> Result<Sdp, SdpError> {
        sdp_parser()
            .easy_parse(input)
            .map(|(sdp, _)| sdp)
            .map_err(|e| SdpError::Parse(e.to_string()))
    }

    /// Check that every m-line has exactly one a=mid and that the BUNDLE
    /// group lists exactly those mids in m-line order.
    pub fn assert_consistency(&self) -> Result<(), SdpError> {
        match self.do_assert_consistency() {
            None => Ok(()),
            Some(error) => Err(SdpError::Inconsistent(error)),
        }
    }

    fn do_assert_consistency(&self) -> Option<String> {
        for (idx, media) in self.media_lines.iter().enumerate() {
            if let Some(err) = media.check_consistent() {
                return Some(format!("m-line {idx}: {err}"));
            }
        }

        let Some(mids) = self.session.bundle_group() else {
            return Some("Session attribute a=group:BUNDLE missing".into());
        };

        if mids.len() != self.media_lines.len() {
            return Some(format!(
                "a=group mid count doesn't match m-line count {} != {}",
                mids.len(),
                self.media_lines.len()
            ));
        }

        for (media, mid) in self.media_lines.iter().zip(mids.iter()) {
            if media.mid() != Some(mid) {
                return Some(format!(
                    "Mid order not matching a=group {:?} != {mid}",
                    media.mid()
                ));
            }
        }

        None
    }

    /// The mids of all m-lines that have one, in m-line order.
    pub fn mids(&self) -> Vec<Mid> {
        self.media_lines
            .iter()
            .filter_map(|m| m.mid().cloned())
            .collect()
    }

    /// Find the m-line carrying `mid`.
    pub fn media_by_mid(&self, mid: &Mid) -> Option<&MediaLine> {
        self.media_lines.iter().find(|m| m.mid() == Some(mid))
    }
}

/// Session info, before the first m= line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The `o=` line.
    pub origin: Origin,
    /// The `s=` line, usually `-`.
    pub name: String,
    /// Other session level lines (`c=`, `b=`, `t=`, ...) in order.
    pub lines: Vec<Line>,
    /// Session level a= lines.
    pub attrs: Vec<SessionAttribute>,
}

/// The `o=` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Usually `-`.
    pub username: String,
    /// Session id.
    pub session_id: SessionId,
    /// Session version, bumped by the endpoint on changes.
    pub session_version: u64,
    /// `<nettype> <addrtype> <unicast-address>`
    pub address: String,
}

/// Any `<type>=<value>` line kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The type letter before `=`.
    pub typ: char,
    /// Everything after `=`.
    pub value: String,
}

impl Session {
    /// Mids of the `a=group:BUNDLE` line, if there is one.
    pub fn bundle_group(&self) -> Option<&[Mid]> {
        self.attrs.iter().find_map(|a| match a {
            SessionAttribute::Group { typ, mids } if typ == "BUNDLE" => Some(&mids[..]),
            _ => None,
        })
    }

    /// Replace the members of the existing BUNDLE group.
    ///
    /// Returns false if there is no BUNDLE group to update.
    pub fn set_bundle_group(&mut self, new_mids: Vec<Mid>) -> bool {
        for a in &mut self.attrs {
            if let SessionAttribute::Group { typ, mids } = a {
                if typ == "BUNDLE" {
                    *mids = new_mids;
                    return true;
                }
            }
        }
        false
    }

    /// The a=msid-semantic line as semantic and stream ids.
    pub fn msid_semantic(&self) -> Option<(&str, &[String])> {
        self.attrs.iter().find_map(|a| match a {
            SessionAttribute::MsidSemantic {
                semantic,
                stream_ids,
            } => Some((semantic.as_str(), &stream_ids[..])),
            _ => None,
        })
    }

    /// Replace (or add) the a=msid-semantic line.
    pub fn set_msid_semantic(&mut self, semantic: &str, stream_ids: Vec<String>) {
        let attr = SessionAttribute::MsidSemantic {
            semantic: semantic.to_string(),
            stream_ids,
        };
        let pos = self
            .attrs
            .iter()
            .position(|a| matches!(a, SessionAttribute::MsidSemantic { .. }));
        match pos {
            Some(idx) => self.attrs[idx] = attr,
            None => self.attrs.push(attr),
        }
    }
}

/// Attributes before the first m= line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAttribute {
    /// `a=group:BUNDLE 0 1 2`
    Group {
        /// BUNDLE, LS etc
        typ: String,
        /// Member mids in order.
        mids: Vec<Mid>,
    },
    /// `a=msid-semantic: WMS *`
    MsidSemantic {
        /// WMS
        semantic: String,
        /// Stream ids, `*` for any.
        stream_ids: Vec<String>,
    },
    /// Any other attribute, kept verbatim without the `a=`.
    Unused(String),
}

/// Media direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Send only direction.
    SendOnly,
    /// Receive only direction.
    RecvOnly,
    /// Bi-directional.
    SendRecv,
    /// Disabled direction.
    Inactive,
}

impl Direction {
    /// Whether this direction includes sending.
    pub fn is_sending(&self) -> bool {
        matches!(self, Direction::SendOnly | Direction::SendRecv)
    }

    /// The same direction with sending taken away.
    ///
    /// `sendrecv` becomes `recvonly`, `sendonly` becomes `inactive`.
    pub fn without_send(&self) -> Self {
        match self {
            Direction::SendRecv | Direction::RecvOnly => Direction::RecvOnly,
            Direction::SendOnly | Direction::Inactive => Direction::Inactive,
        }
    }
}

impl From<Direction> for MediaAttribute {
    fn from(v: Direction) -> Self {
        match v {
            Direction::SendOnly => MediaAttribute::SendOnly,
            Direction::RecvOnly => MediaAttribute::RecvOnly,
            Direction::SendRecv => MediaAttribute::SendRecv,
            Direction::Inactive => MediaAttribute::Inactive,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::SendOnly => "sendonly",
                Direction::RecvOnly => "recvonly",
                Direction::SendRecv => "sendrecv",
                Direction::Inactive => "inactive",
            }
        )
    }
}

fn is_dir(a: &MediaAttribute) -> bool {
    use MediaAttribute::*;
    matches!(a, SendRecv | SendOnly | RecvOnly | Inactive)
}

fn is_transport(a: &MediaAttribute) -> bool {
    use MediaAttribute::*;
    matches!(
        a,
        IceUfrag(_) | IcePwd(_) | Fingerprint(_) | Candidate(_) | EndOfCandidates
    )
}

/// An m-line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaLine {
    /// audio, video, application.
    pub typ: MediaType,
    /// Port of the m= line.
    pub port: u16,
    /// `<port>/<count>`, hardly ever used.
    pub port_count: Option<u16>,
    /// Transport protocol, i.e. `UDP/TLS/RTP/SAVPF`.
    pub proto: String,
    /// Formats from the m= line, payload types for RTP.
    pub fmts: Vec<String>,
    /// Other media level lines (`c=`, `b=`, ...) in order.
    pub lines: Vec<Line>,
    /// The a= lines in order.
    pub attrs: Vec<MediaAttribute>,
}

impl MediaLine {
    /// The a=mid of the line.
    pub fn mid(&self) -> Option<&Mid> {
        self.attrs.iter().find_map(|a| {
            if let MediaAttribute::Mid(m) = a {
                Some(m)
            } else {
                None
            }
        })
    }

    /// Replace the a=mid, or add it first if there is none.
    pub fn set_mid(&mut self, mid: Mid) {
        match self
            .attrs
            .iter()
            .position(|a| matches!(a, MediaAttribute::Mid(_)))
        {
            Some(idx) => self.attrs[idx] = MediaAttribute::Mid(mid),
            None => self.attrs.insert(0, MediaAttribute::Mid(mid)),
        }
    }

    /// The m-line direction, `sendrecv` when there is no direction attribute.
    pub fn direction(&self) -> Direction {
        for a in &self.attrs {
            match a {
                MediaAttribute::SendRecv => return Direction::SendRecv,
                MediaAttribute::SendOnly => return Direction::SendOnly,
                MediaAttribute::RecvOnly => return Direction::RecvOnly,
                MediaAttribute::Inactive => return Direction::Inactive,
                _ => {}
            }
        }
        Direction::SendRecv
    }

    /// Replace the direction attribute, or add one.
    pub fn set_direction(&mut self, dir: Direction) {
        match self.attrs.iter().position(is_dir) {
            Some(idx) => self.attrs[idx] = dir.into(),
            None => self.attrs.push(dir.into()),
        }
    }

    /// Whether there is an a=rtcp-mux.
    pub fn has_rtcp_mux(&self) -> bool {
        self.attrs.iter().any(|a| matches!(a, MediaAttribute::RtcpMux))
    }

    /// RTCP must be multiplexed for any line that isn't inactive.
    pub fn is_muxable(&self) -> bool {
        self.has_rtcp_mux() || self.direction() == Direction::Inactive
    }

    /// The line level a=msid.
    pub fn msid(&self) -> Option<&Msid> {
        self.attrs.iter().find_map(|a| {
            if let MediaAttribute::Msid(m) = a {
                Some(m)
            } else {
                None
            }
        })
    }

    /// Set or clear the line level a=msid.
    pub fn set_msid(&mut self, msid: Option<Msid>) {
        let pos = self
            .attrs
            .iter()
            .position(|a| matches!(a, MediaAttribute::Msid(_)));
        self.attrs.retain(|a| !matches!(a, MediaAttribute::Msid(_)));

        let Some(msid) = msid else {
            return;
        };

        let idx = pos
            .or_else(|| self.attrs.iter().position(is_dir).map(|i| i + 1))
            .unwrap_or(self.attrs.len())
            .min(self.attrs.len());
        self.attrs.insert(idx, MediaAttribute::Msid(msid));
    }

    /// Drop a=bundle-only.
    pub fn remove_bundle_only(&mut self) {
        self.attrs
            .retain(|a| !matches!(a, MediaAttribute::BundleOnly));
    }

    /// The a=ssrc lines folded per SSRC, ordered by SSRC.
    pub fn sources(&self) -> BTreeMap<Ssrc, Source> {
        let mut v: BTreeMap<Ssrc, Source> = BTreeMap::new();

        for a in &self.attrs {
            if let MediaAttribute::Ssrc { ssrc, attr, value } = a {
                let source = v.entry(*ssrc).or_insert_with(|| Source::new(*ssrc));
                source.set_param(attr, value.clone());
            }
        }

        v
    }

    /// Replace all a=ssrc lines. They are written at the end of the m-line.
    pub fn set_sources(&mut self, sources: &BTreeMap<Ssrc, Source>) {
        self.attrs
            .retain(|a| !matches!(a, MediaAttribute::Ssrc { .. }));
        for source in sources.values() {
            source.as_media_attrs(&mut self.attrs);
        }
    }

    /// The a=ssrc-group lines in order.
    pub fn ssrc_groups(&self) -> Vec<SsrcGroup> {
        self.attrs
            .iter()
            .filter_map(|a| {
                if let MediaAttribute::SsrcGroup(g) = a {
                    Some(g.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Replace all a=ssrc-group lines. They go before the first a=ssrc line.
    pub fn set_ssrc_groups(&mut self, groups: &[SsrcGroup]) {
        self.attrs
            .retain(|a| !matches!(a, MediaAttribute::SsrcGroup(_)));
        let idx = self
            .attrs
            .iter()
            .position(|a| matches!(a, MediaAttribute::Ssrc { .. }))
            .unwrap_or(self.attrs.len());
        for (i, g) in groups.iter().enumerate() {
            self.attrs
                .insert(idx + i, MediaAttribute::SsrcGroup(g.clone()));
        }
    }

    /// Drop everything that ties this line to a sending track.
    pub fn clear_sources(&mut self) {
        self.set_msid(None);
        self.set_ssrc_groups(&[]);
        self.set_sources(&BTreeMap::new());
    }

    /// Port, ICE and DTLS attributes of the line.
    pub fn transport(&self) -> Transport {
        let mut t = Transport {
            port: self.port,
            ..Default::default()
        };

        for a in &self.attrs {
            match a {
                MediaAttribute::IceUfrag(v) => t.ice_ufrag = Some(v.clone()),
                MediaAttribute::IcePwd(v) => t.ice_pwd = Some(v.clone()),
                MediaAttribute::Fingerprint(v) => t.fingerprint = Some(v.clone()),
                MediaAttribute::Candidate(v) => t.candidates.push(v.clone()),
                MediaAttribute::EndOfCandidates => t.end_of_candidates = true,
                _ => {}
            }
        }

        t
    }

    /// Replace port, ICE and DTLS attributes with those of `t`.
    ///
    /// The new attributes take the place of the first replaced one.
    pub fn set_transport(&mut self, t: &Transport) {
        self.port = t.port;

        let idx = self.attrs.iter().position(is_transport);
        self.attrs.retain(|a| !is_transport(a));
        let idx = idx.unwrap_or(self.attrs.len()).min(self.attrs.len());

        let mut attrs = vec![];
        t.as_media_attrs(&mut attrs);
        for (i, a) in attrs.into_iter().enumerate() {
            self.attrs.insert(idx + i, a);
        }
    }

    /// Describes what is wrong with the line, if anything.
    pub fn check_consistent(&self) -> Option<String> {
        use MediaAttribute::*;

        let mid_count = self.attrs.iter().filter(|a| matches!(a, Mid(_))).count();

        if mid_count == 0 {
            return Some(format!("Media is missing a=mid: {} {}", self.typ, self.proto));
        }

        if mid_count > 1 {
            return Some(format!(
                "Media has more than one a=mid: {} {}",
                self.typ, self.proto
            ));
        }

        let dir_count = self.attrs.iter().filter(|a| is_dir(a)).count();

        if dir_count > 1 {
            return Some(format!(
                "Expected at most one of a=sendrecv, a=sendonly, a=recvonly, a=inactive for mid: {:?}",
                self.mid()
            ));
        }

        None
    }
}

/// The ICE/DTLS part of an m-line. Bundled lines all share one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transport {
    /// Port of the m= line.
    pub port: u16,
    /// a=ice-ufrag
    pub ice_ufrag: Option<String>,
    /// a=ice-pwd
    pub ice_pwd: Option<String>,
    /// a=fingerprint
    pub fingerprint: Option<Fingerprint>,
    /// Candidate values without the `candidate:` prefix.
    pub candidates: Vec<String>,
    /// a=end-of-candidates
    pub end_of_candidates: bool,
}

impl Transport {
    fn as_media_attrs(&self, attrs: &mut Vec<MediaAttribute>) {
        if let Some(v) = &self.ice_ufrag {
            attrs.push(MediaAttribute::IceUfrag(v.clone()));
        }
        if let Some(v) = &self.ice_pwd {
            attrs.push(MediaAttribute::IcePwd(v.clone()));
        }
        if let Some(v) = &self.fingerprint {
            attrs.push(MediaAttribute::Fingerprint(v.clone()));
        }
        for c in &self.candidates {
            attrs.push(MediaAttribute::Candidate(c.clone()));
        }
        if self.end_of_candidates {
            attrs.push(MediaAttribute::EndOfCandidates);
        }
    }
}

/// One RTP source, all the a=ssrc lines sharing an SSRC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The SSRC all lines share.
    pub ssrc: Ssrc,
    /// `cname:`
    pub cname: Option<String>,
    /// `msid:`, Plan B puts the track identity here.
    pub msid: Option<Msid>,
    /// Legacy, carried but not interpreted.
    pub mslabel: Option<String>,
    /// Legacy, carried but not interpreted.
    pub label: Option<String>,
    /// Anything else, in order of appearance.
    pub params: Vec<(String, Option<String>)>,
}

impl Source {
    /// A source with nothing but the SSRC.
    pub fn new(ssrc: Ssrc) -> Self {
        Source {
            ssrc,
            cname: None,
            msid: None,
            mslabel: None,
            label: None,
            params: vec![],
        }
    }

    fn set_param(&mut self, attr: &str, value: Option<String>) {
        // a=ssrc:2147603131 cname:TbS1Ajv9obq6/63I
        // a=ssrc:2147603131 msid:- 7a08dda6-518f-4027-b707-410a6d414176
        match (attr, value) {
            ("cname", Some(v)) => self.cname = Some(v),
            ("msid", Some(v)) => self.msid = Some(Msid::parse(&v)),
            ("mslabel", Some(v)) => self.mslabel = Some(v),
            ("label", Some(v)) => self.label = Some(v),
            (_, value) => self.params.push((attr.to_string(), value)),
        }
    }

    fn as_media_attrs(&self, attrs: &mut Vec<MediaAttribute>) {
        let mut push = |attr: &str, value: Option<String>| {
            attrs.push(MediaAttribute::Ssrc {
                ssrc: self.ssrc,
                attr: attr.to_string(),
                value,
            })
        };

        if let Some(v) = &self.cname {
            push("cname", Some(v.clone()));
        }
        if let Some(v) = &self.msid {
            push("msid", Some(v.to_string()));
        }
        if let Some(v) = &self.mslabel {
            push("mslabel", Some(v.clone()));
        }
        if let Some(v) = &self.label {
            push("label", Some(v.clone()));
        }
        for (k, v) in &self.params {
            push(k, v.clone());
        }
    }
}

/// `a=ssrc-group:FID 1111 2222`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsrcGroup {
    /// i.e. "FID", "SIM"
    pub semantics: String,
    /// For FID: `<normal stream> <repair stream>`
    pub ssrcs: Vec<Ssrc>,
}

impl SsrcGroup {
    /// Whether this is an `a=ssrc-group:SIM`.
    pub fn is_simulcast(&self) -> bool {
        self.semantics.eq_ignore_ascii_case("SIM")
    }

    /// Whether `ssrc` is a member.
    pub fn contains(&self, ssrc: Ssrc) -> bool {
        self.ssrcs.contains(&ssrc)
    }
}

/// `a=msid:<stream id> <track id>`, also used as an a=ssrc parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msid {
    /// The media stream, `-` for none.
    pub stream_id: String,
    /// Empty if the msid only names a stream.
    pub track_id: String,
}

impl Msid {
    /// Parse `<stream id> [<track id>]`.
    pub fn parse(v: &str) -> Msid {
        let v = v.trim();
        match v.split_once(' ') {
            Some((stream_id, track_id)) => Msid {
                stream_id: stream_id.to_string(),
                track_id: track_id.trim().to_string(),
            },
            None => Msid {
                stream_id: v.to_string(),
                track_id: String::new(),
            },
        }
    }
}

/// `a=fingerprint:<hash function> <hex:hex:...>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// The hash function, i.e. `sha-256`.
    pub hash_func: String,
    /// The digest.
    pub bytes: Vec<u8>,
}

/// "audio", "video", "application"
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Audio
    #[default]
    Audio,
    /// Video
    Video,
    /// Data channel
    Application,
    /// Anything else, kept by name.
    #[doc(hidden)]
    Unknown(String),
}

impl MediaType {
    /// Audio or video.
    pub fn is_media(&self) -> bool {
        matches!(self, MediaType::Audio | MediaType::Video)
    }
}

/// Attributes after an m= line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAttribute {
    /// a=mid:0
    Mid(Mid),
    /// a=recvonly
    RecvOnly,
    /// a=sendrecv
    SendRecv,
    /// a=sendonly
    SendOnly,
    /// a=inactive
    Inactive,
    /// a=rtcp-mux
    RtcpMux,
    /// a=bundle-only
    BundleOnly,
    /// a=msid:5UUdwiuY7OML2EkQtF38pJtNP5v7In1LhjEK f78dde68-7055-4e20-bb37-433803dd1ed1
    Msid(Msid),
    /// Without the candidate: prefix, not interpreted.
    Candidate(String),
    /// a=end-of-candidates
    EndOfCandidates,
    /// a=ice-ufrag
    IceUfrag(String),
    /// a=ice-pwd
    IcePwd(String),
    /// a=fingerprint
    Fingerprint(Fingerprint),
    /// a=ssrc-group
    SsrcGroup(SsrcGroup),
    /// a=ssrc:3948621874 cname:xeXs3aE9AOBn00yJ
    Ssrc {
        /// Synchronization source id.
        ssrc: Ssrc,
        /// cname, msid, ...
        attr: String,
        /// After the `:`, if any.
        value: Option<String>,
    },
    /// Any other attribute, kept verbatim without the `a=`.
    Unused(String),
}

impl MediaAttribute {
    /// One of sendrecv, sendonly, recvonly or inactive.
    pub fn is_direction(&self) -> bool {
        is_dir(self)
    }
}

impl fmt::Display for Sdp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.session)?;
        for m in &self.media_lines {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v=0\r\n")?;
        write!(f, "{}", self.origin)?;
        write!(f, "s={}\r\n", self.name)?;
        for l in &self.lines {
            write!(f, "{l}")?;
        }
        for a in &self.attrs {
            write!(f, "{a}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "o={} {} {} {}\r\n",
            self.username, self.session_id, self.session_version, self.address
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}\r\n", self.typ, self.value)
    }
}

impl fmt::Display for SessionAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SessionAttribute::*;
        match self {
            Group { typ, mids } => {
                write!(f, "a=group:{typ}")?;
                for m in mids {
                    write!(f, " {m}")?;
                }
                write!(f, "\r\n")?;
            }
            MsidSemantic {
                semantic,
                stream_ids,
            } => {
                write!(f, "a=msid-semantic: {semantic}")?;
                for id in stream_ids {
                    write!(f, " {id}")?;
                }
                write!(f, "\r\n")?;
            }
            Unused(v) => write!(f, "a={v}\r\n")?,
        }
        Ok(())
    }
}

impl fmt::Display for MediaLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={} {}", self.typ, self.port)?;
        if let Some(count) = self.port_count {
            write!(f, "/{count}")?;
        }
        write!(f, " {}", self.proto)?;
        for fmt in &self.fmts {
            write!(f, " {fmt}")?;
        }
        write!(f, "\r\n")?;
        for l in &self.lines {
            write!(f, "{l}")?;
        }
        for a in &self.attrs {
            write!(f, "{a}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Audio => write!(f, "audio"),
            MediaType::Video => write!(f, "video"),
            MediaType::Application => write!(f, "application"),
            MediaType::Unknown(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Msid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.track_id.is_empty() {
            write!(f, "{}", self.stream_id)
        } else {
            write!(f, "{} {}", self.stream_id, self.track_id)
        }
    }
}

impl fmt::Display for MediaAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MediaAttribute::*;
        match self {
            Mid(v) => write!(f, "a=mid:{v}\r\n")?,
            RecvOnly => write!(f, "a=recvonly\r\n")?,
            SendRecv => write!(f, "a=sendrecv\r\n")?,
            SendOnly => write!(f, "a=sendonly\r\n")?,
            Inactive => write!(f, "a=inactive\r\n")?,
            RtcpMux => write!(f, "a=rtcp-mux\r\n")?,
            BundleOnly => write!(f, "a=bundle-only\r\n")?,
            Msid(v) => write!(f, "a=msid:{v}\r\n")?,
            Candidate(c) => write!(f, "a=candidate:{c}\r\n")?,
            EndOfCandidates => write!(f, "a=end-of-candidates\r\n")?,
            IceUfrag(v) => write!(f, "a=ice-ufrag:{v}\r\n")?,
            IcePwd(v) => write!(f, "a=ice-pwd:{v}\r\n")?,
            Fingerprint(v) => {
                write!(
                    f,
                    "a=fingerprint:{} {}\r\n",
                    v.hash_func,
                    FingerprintFmt(&v.bytes)
                )?;
            }
            SsrcGroup(g) => {
                write!(f, "a=ssrc-group:{}", g.semantics)?;
                for ssrc in &g.ssrcs {
                    write!(f, " {ssrc}")?;
                }
                write!(f, "\r\n")?;
            }
            Ssrc { ssrc, attr, value } => {
                write!(f, "a=ssrc:{ssrc} {attr}")?;
                if let Some(v) = value {
                    write!(f, ":{v}")?;
                }
                write!(f, "\r\n")?;
            }
            Unused(v) => write!(f, "a={v}\r\n")?,
        }
        Ok(())
    }
}

struct FingerprintFmt<'a>(&'a [u8]);

impl<'a> std::fmt::Display for FingerprintFmt<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, b) in self.0.iter().enumerate() {
            if idx + 1 < self.0.len() {
                write!(f, "{b:02X}:")?;
            } else {
                write!(f, "{b:02X}")?;
            }
        }
        Ok(())
    }
}
