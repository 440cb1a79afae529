#![allow(unused)]
use std::sync::Once;

use sdp_interop::sdp::{MediaLine, Sdp, Ssrc};
use sdp_interop::SessionDescription;

pub fn init_log() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    static START: Once = Once::new();

    START.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(env_filter)
            .init();
    });
}

/// Parse the SDP of a description.
pub fn parse(desc: &SessionDescription) -> Sdp {
    Sdp::parse(&desc.sdp).expect("valid SDP")
}

/// Mids of a description in m-line order.
pub fn mids(desc: &SessionDescription) -> Vec<String> {
    parse(desc).mids().iter().map(|m| m.to_string()).collect()
}

/// Members of the BUNDLE group.
pub fn bundle(desc: &SessionDescription) -> Vec<String> {
    parse(desc)
        .session
        .bundle_group()
        .expect("BUNDLE group")
        .iter()
        .map(|m| m.to_string())
        .collect()
}

/// All SSRCs of a description, sorted.
pub fn ssrcs(desc: &SessionDescription) -> Vec<u32> {
    let mut v: Vec<u32> = parse(desc)
        .media_lines
        .iter()
        .flat_map(|m| m.sources().into_keys())
        .map(|s| *s)
        .collect();
    v.sort();
    v
}

/// The m-line carrying `ssrc`.
pub fn line_with_ssrc(sdp: &Sdp, ssrc: u32) -> &MediaLine {
    sdp.media_lines
        .iter()
        .find(|m| m.sources().contains_key(&Ssrc::from(ssrc)))
        .expect("line with ssrc")
}

/// A Unified Plan offer with one audio track, two video tracks with RTX and
/// a data channel.
pub const UNIFIED_OFFER: &str = "v=0\r\n\
o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
a=group:BUNDLE 0 1 2 3\r\n\
a=msid-semantic: WMS s1 s2\r\n\
m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:9 IN IP4 0.0.0.0\r\n\
a=candidate:3684617590 1 udp 2122260223 10.217.229.219 50028 typ host generation 0\r\n\
a=ice-ufrag:8hhY\r\n\
a=ice-pwd:asd88fgpdd777uzjYhagZg\r\n\
a=ice-options:trickle\r\n\
a=fingerprint:sha-256 D2:FA:0E:C3:22:59:5E:14:95:69:92:3D:13:B4:84:24:2C:C2:A2:C0:3E:FD:34:8E:5E:EA:6F:AF:52:CE:E6:0F\r\n\
a=setup:actpass\r\n\
a=mid:0\r\n\
a=sendrecv\r\n\
a=msid:s1 a1\r\n\
a=rtcp-mux\r\n\
a=rtpmap:111 opus/48000/2\r\n\
a=ssrc:1001 cname:user1\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 100 101\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:9 IN IP4 0.0.0.0\r\n\
a=ice-ufrag:8hhY\r\n\
a=ice-pwd:asd88fgpdd777uzjYhagZg\r\n\
a=ice-options:trickle\r\n\
a=fingerprint:sha-256 D2:FA:0E:C3:22:59:5E:14:95:69:92:3D:13:B4:84:24:2C:C2:A2:C0:3E:FD:34:8E:5E:EA:6F:AF:52:CE:E6:0F\r\n\
a=setup:actpass\r\n\
a=mid:1\r\n\
a=sendrecv\r\n\
a=msid:s1 v1\r\n\
a=rtcp-mux\r\n\
a=rtpmap:100 VP8/90000\r\n\
a=rtpmap:101 rtx/90000\r\n\
a=fmtp:101 apt=100\r\n\
a=ssrc-group:FID 2001 2002\r\n\
a=ssrc:2001 cname:user1\r\n\
a=ssrc:2002 cname:user1\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 100 101\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:9 IN IP4 0.0.0.0\r\n\
a=setup:actpass\r\n\
a=mid:2\r\n\
a=bundle-only\r\n\
a=sendonly\r\n\
a=msid:s2 v2\r\n\
a=rtcp-mux\r\n\
a=rtpmap:100 VP8/90000\r\n\
a=rtpmap:101 rtx/90000\r\n\
a=fmtp:101 apt=100\r\n\
a=ssrc-group:FID 3001 3002\r\n\
a=ssrc:3001 cname:user1\r\n\
a=ssrc:3002 cname:user1\r\n\
m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n\
c=IN IP4 0.0.0.0\r\n\
a=ice-ufrag:8hhY\r\n\
a=ice-pwd:asd88fgpdd777uzjYhagZg\r\n\
a=setup:actpass\r\n\
a=mid:3\r\n\
a=sctp-port:5000\r\n";

/// A Plan B offer with one audio source and one video source with RTX.
pub const PLAN_B_OFFER: &str = "v=0\r\n\
o=- 1923518516 2 IN IP4 0.0.0.0\r\n\
s=-\r\n\
t=0 0\r\n\
a=group:BUNDLE audio video\r\n\
a=msid-semantic: WMS mixedmslabel\r\n\
m=audio 1 RTP/SAVPF 111\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:1 IN IP4 0.0.0.0\r\n\
a=candidate:1 1 udp 2130706431 192.168.1.2 10000 typ host generation 0\r\n\
a=ice-ufrag:2ts9a1adkoulmm\r\n\
a=ice-pwd:4lrh91cnaee3o4gsgae2gn5mh2\r\n\
a=fingerprint:sha-1 A2:60:91:D7:42:52:0C:35:9C:24:5C:49:2F:3A:23:E7:05:E1:E5:8B\r\n\
a=setup:actpass\r\n\
a=mid:audio\r\n\
a=sendrecv\r\n\
a=rtcp-mux\r\n\
a=rtpmap:111 opus/48000/2\r\n\
a=ssrc:3393882360 cname:mixed\r\n\
a=ssrc:3393882360 msid:mixedmslabel mixedlabelaudio0\r\n\
a=ssrc:3393882360 mslabel:mixedmslabel\r\n\
a=ssrc:3393882360 label:mixedlabelaudio0\r\n\
m=video 1 RTP/SAVPF 100 96\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:1 IN IP4 0.0.0.0\r\n\
a=candidate:1 1 udp 2130706431 192.168.1.2 10000 typ host generation 0\r\n\
a=ice-ufrag:2ts9a1adkoulmm\r\n\
a=ice-pwd:4lrh91cnaee3o4gsgae2gn5mh2\r\n\
a=fingerprint:sha-1 A2:60:91:D7:42:52:0C:35:9C:24:5C:49:2F:3A:23:E7:05:E1:E5:8B\r\n\
a=setup:actpass\r\n\
a=mid:video\r\n\
a=sendrecv\r\n\
a=rtcp-mux\r\n\
a=rtpmap:100 VP8/90000\r\n\
a=rtpmap:96 rtx/90000\r\n\
a=fmtp:96 apt=100\r\n\
a=ssrc-group:FID 2560713622 1733429841\r\n\
a=ssrc:2560713622 cname:mixed\r\n\
a=ssrc:2560713622 msid:mixedmslabel mixedlabelvideo0\r\n\
a=ssrc:1733429841 cname:mixed\r\n\
a=ssrc:1733429841 msid:mixedmslabel mixedlabelvideo0\r\n";

/// [`PLAN_B_OFFER`] with the audio source removed.
pub fn plan_b_without_audio() -> String {
    PLAN_B_OFFER
        .lines()
        .filter(|l| !l.starts_with("a=ssrc:3393882360"))
        .map(|l| format!("{l}\n"))
        .collect()
}
