use combine::error::*;
use combine::parser::char::*;
use combine::parser::combinator::*;
use combine::stream::StreamErrorFor;
use combine::*;
use combine::{ParseError, Parser, Stream};

use crate::id::{Mid, SessionId, Ssrc};

use super::data::*;

/// Creates a parser of SDP
pub fn sdp_parser<Input>() -> impl Parser<Input, Output = Sdp>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        session_parser(),
        many::<Vec<_>, _, _>(media_parser()),
        skip_many(choice((crlf(), newline()))),
        eof(),
    )
        .map(|(session, media, _, _)| Sdp {
            session,
            media_lines: media,
        })
}

// /////////////////////////////////////////////////// Session description

/// 1. First line must be v=0
/// 2. The second SDP line MUST be an "o=" line
/// 3. Third line is the session name, "s=-" in practice but we accept anything.
///
/// Any of the other session lines (`t=`, `c=`, `b=` ...) are kept verbatim.
/// The session is over at the first m= line.
pub fn session_parser<Input>() -> impl Parser<Input, Output = Session>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        typed_line('v', token('0')), // v=0
        originator_line(),           // o=- 6564425948916445306 2 IN IP4 127.0.0.1
        typed_line('s', maybe_value()), // s=-
        many::<Vec<_>, _, _>(raw_session_line()),
        many::<Vec<_>, _, _>(session_attribute_line()),
    )
        .map(|(_, origin, name, lines, attrs)| Session {
            origin,
            name,
            lines,
            attrs,
        })
}

/// `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
fn originator_line<Input>() -> impl Parser<Input, Output = Origin>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let number = || {
        many1::<String, _, _>(digit()).and_then(|s| {
            s.parse::<u64>()
                .map_err(StreamErrorFor::<Input>::message_format)
        })
    };

    typed_line(
        'o',
        (
            not_sp(),
            token(' '),
            number(),
            token(' '),
            number(),
            token(' '),
            any_value(),
        ),
    )
    .map(|(username, _, sess, _, session_version, _, address)| Origin {
        username,
        session_id: SessionId::from(sess),
        session_version,
        address,
    })
}

/// Session line we carry but don't interpret.
fn raw_session_line<Input>() -> impl Parser<Input, Output = Line>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let kept = one_of("iuepcbtrzk".chars());
    line(kept, maybe_value()).map(|(typ, value)| Line { typ, value })
}

/// An a= line that with value like: `a=<attribute>:<value>`.
fn attribute_line<Input, Pval, Out>(
    attribute: &'static str,
    val: Pval,
) -> impl Parser<Input, Output = Out>
where
    Input: Stream<Token = char>,
    Pval: Parser<Input, Output = Out>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    typed_line('a', (string(attribute), token(':'), val)).map(|(_, _, val)| val)
}

/// An a= line that has no value like: `a=rtcp-mux`.
fn attribute_line_flag<Input>(attribute: &'static str) -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    typed_line('a', (string(attribute)).map(|_| ()))
}

/// a=foo:bar lines belonging before the first m= line
fn session_attribute_line<Input>() -> impl Parser<Input, Output = SessionAttribute>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    // a=group:BUNDLE 1 2
    // a=group:LS 1 2
    let group = attribute_line("group", (not_sp(), many::<Vec<_>, _, _>(sp_value())))
        .map(|(typ, mids)| SessionAttribute::Group {
            typ,
            mids: mids.into_iter().map(Mid::from).collect(),
        });

    // a=msid-semantic: WMS 9ce81ef6-c7cb-4da5-8f5f-3e7cc9b5f9b0
    // a=msid-semantic:WMS *
    let msid_semantic = attribute_line(
        "msid-semantic",
        (
            optional(token(' ')),
            not_sp(),
            many::<Vec<_>, _, _>(sp_value()),
        ),
    )
    .map(
        |(_, semantic, stream_ids)| SessionAttribute::MsidSemantic {
            semantic,
            stream_ids,
        },
    );

    // ice-lite
    // ice-options
    // fingerprint
    // extmap-allow-mixed
    let unused = typed_line('a', any_value()).map(SessionAttribute::Unused);

    choice((attempt(group), attempt(msid_semantic), unused))
}

// /////////////////////////////////////////////////// Media description

/// A m= section with attributes, until next m= or EOF
fn media_parser<Input>() -> impl Parser<Input, Output = MediaLine>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        media_line(),
        many::<Vec<_>, _, _>(raw_media_line()), // c=IN IP4 0.0.0.0
        many::<Vec<_>, _, _>(media_attribute_line()),
    )
        .map(|((typ, (port, port_count), proto, fmts), lines, attrs)| MediaLine {
            typ,
            port,
            port_count,
            proto,
            fmts,
            lines,
            attrs,
        })
}

/// The m= line
// m=audio 9 UDP/TLS/RTP/SAVPF 111
// m=video 53151 UDP/TLS/RTP/SAVPF 96 97 125 107 100 101
// m=application 54055 DTLS/SCTP 5000
// m=application 9 UDP/DTLS/SCTP webrtc-datachannel
#[allow(clippy::type_complexity)]
fn media_line<Input>(
) -> impl Parser<Input, Output = (MediaType, (u16, Option<u16>), String, Vec<String>)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let media_type = choice((
        attempt((string("audio"), look_ahead(token(' '))).map(|_| MediaType::Audio)),
        attempt((string("video"), look_ahead(token(' '))).map(|_| MediaType::Video)),
        attempt(
            (string("application"), look_ahead(token(' '))).map(|_| MediaType::Application),
        ),
        not_sp().map(MediaType::Unknown),
    ));

    let number = || {
        many1::<String, _, _>(digit()).and_then(|s| {
            s.parse::<u16>()
                .map_err(StreamErrorFor::<Input>::message_format)
        })
    };

    // <port>/<number of ports>
    let port = (number(), optional((token('/'), number()).map(|(_, c)| c)));

    // m=<media> <port> <proto> <fmt> ...
    typed_line(
        'm',
        (
            media_type, // type: audio, video etc.
            token(' '),
            port,
            token(' '),
            not_sp(), // proto: UDP/TLS/RTP/SAVPF, DTLS/SCTP, ...
            many::<Vec<_>, _, _>(sp_value()),
        ),
    )
    .map(|(typ, _, port, _, proto, fmts)| (typ, port, proto, fmts))
}

/// Media line before the attributes we carry but don't interpret.
fn raw_media_line<Input>() -> impl Parser<Input, Output = Line>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let kept = one_of("icbk".chars());
    line(kept, maybe_value()).map(|(typ, value)| Line { typ, value })
}

/// a=foo:bar lines belonging after a m= line
fn media_attribute_line<Input>() -> impl Parser<Input, Output = MediaAttribute>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    // a=ice-ufrag:IdNYTNL1fjvjyEzL
    let ice_ufrag = attribute_line("ice-ufrag", any_value()).map(MediaAttribute::IceUfrag);

    // a=ice-pwd:4d64pT3T1xfwbZvi9fQKjoPb
    let ice_pwd = attribute_line("ice-pwd", any_value()).map(MediaAttribute::IcePwd);

    // a=fingerprint:sha-256 45:AD:5C:82:F8:BE:B5:2A:D1:74:A6:16:D0:50:CD:86:9C:97:9D:BD:06:8C:C9:85:C9:CD:AB:2B:A8:56:03:CD
    let hex_byte = count_min_max(2, 2, hex_digit()).and_then(|x: String| {
        u8::from_str_radix(&x, 16).map_err(StreamErrorFor::<Input>::message_format)
    });
    let finger = attribute_line(
        "fingerprint",
        (not_sp(), token(' '), sep_by1(hex_byte, token(':'))),
    )
    .map(|(hash_func, _, bytes)| MediaAttribute::Fingerprint(Fingerprint { hash_func, bytes }));

    // a=mid:0
    let mid = attribute_line("mid", any_value()).map(|m| MediaAttribute::Mid(Mid::from(m)));

    let direction = choice((
        attempt(attribute_line_flag("recvonly").map(|_| MediaAttribute::RecvOnly)),
        attempt(attribute_line_flag("sendrecv").map(|_| MediaAttribute::SendRecv)),
        attempt(attribute_line_flag("sendonly").map(|_| MediaAttribute::SendOnly)),
        attribute_line_flag("inactive").map(|_| MediaAttribute::Inactive),
    ));

    // a=msid:5UUdwiuY7OML2EkQtF38pJtNP5v7In1LhjEK f78dde68-7055-4e20-bb37-433803dd1ed1
    let msid = attribute_line("msid", any_value()).map(|v| MediaAttribute::Msid(Msid::parse(&v)));

    // a=rtcp-mux
    let rtcpmux = attribute_line_flag("rtcp-mux").map(|_| MediaAttribute::RtcpMux);

    // a=bundle-only
    let bundle_only = attribute_line_flag("bundle-only").map(|_| MediaAttribute::BundleOnly);

    // a=candidate:1 1 udp 2113929471 203.0.113.100 10100 typ host
    let cand = attribute_line("candidate", any_value()).map(MediaAttribute::Candidate);

    // a=end-of-candidates
    let endof = attribute_line_flag("end-of-candidates").map(|_| MediaAttribute::EndOfCandidates);

    let ssrc_id = || {
        not_sp::<Input>().and_then(|s| {
            s.parse::<u32>()
                .map(Ssrc::from)
                .map_err(StreamErrorFor::<Input>::message_format)
        })
    };

    // a=ssrc-group:FID 1111 2222
    let ssrc_group = attribute_line(
        "ssrc-group",
        (not_sp(), token(' '), sep_by1(ssrc_id(), token(' '))),
    )
    .map(|(semantics, _, ssrcs)| MediaAttribute::SsrcGroup(SsrcGroup { semantics, ssrcs }));

    // a=ssrc:3948621874 cname:xeXs3aE9AOBn00yJ
    // a=ssrc:3948621874 msid:5UUdwiuY7OML2EkQtF38pJtNP5v7In1LhjEK f78dde68-7055-4e20-bb37-433803dd1ed1
    // a=ssrc:3948621874 mslabel:5UUdwiuY7OML2EkQtF38pJtNP5v7In1LhjEK
    // a=ssrc:3948621874 label:f78dde68-7055-4e20-bb37-433803dd1ed1
    let ssrc = attribute_line(
        "ssrc",
        (
            ssrc_id(),
            token(' '),
            many1::<String, _, _>(satisfy(|c| c != ':' && c != '\r' && c != '\n')),
            optional((token(':'), maybe_value()).map(|(_, v)| v)),
        ),
    )
    .map(|(ssrc, _, attr, value)| MediaAttribute::Ssrc { ssrc, attr, value });

    // rtpmap, fmtp, rtcp-fb, extmap, setup, rid, simulcast ...
    let unused = typed_line('a', any_value()).map(MediaAttribute::Unused);

    choice((
        attempt(ice_ufrag),
        attempt(ice_pwd),
        attempt(finger),
        attempt(mid),
        attempt(direction),
        attempt(msid),
        attempt(rtcpmux),
        attempt(bundle_only),
        attempt(cand),
        attempt(endof),
        attempt(ssrc_group),
        attempt(ssrc),
        unused,
    ))
}

// /////////////////////////////////////////////////// Generic things below

/// A specific line
fn typed_line<Input, Pval, Out>(expected: char, val: Pval) -> impl Parser<Input, Output = Out>
where
    Input: Stream<Token = char>,
    Pval: Parser<Input, Output = Out>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    line(token(expected), val).map(|(_, value)| value)
}

/// A line with some parser for value and parser for type.
fn line<Input, Ptyp, Pval, Out>(typ: Ptyp, val: Pval) -> impl Parser<Input, Output = (char, Out)>
where
    Ptyp: Parser<Input, Output = char>,
    Pval: Parser<Input, Output = Out>,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    attempt((typ, token('='), val, line_end()))
        .map(|(typ, _, value, _)| (typ, value))
        .message("sdp line")
}

/// A space followed by a value.
fn sp_value<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    attempt((token(' '), not_sp())).map(|(_, v)| v)
}

/// Not SP, \r or \n
fn not_sp<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many1(satisfy(|c| c != ' ' && c != '\r' && c != '\n'))
}

/// Any value that isn't \r or \n.
fn any_value<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many1(satisfy(|c| c != '\r' && c != '\n'))
}

/// Like [`any_value`] but also matches nothing.
fn maybe_value<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many(satisfy(|c| c != '\r' && c != '\n'))
}

/// We discovered a stray \n in safari SDP. This line end handles \r\n, \n or EOF.
fn line_end<Input>() -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice((crlf().map(|_| ()), newline().map(|_| ()), eof()))
}
