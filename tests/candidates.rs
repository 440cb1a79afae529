mod common;
use common::{init_log, PLAN_B_OFFER, UNIFIED_OFFER};
use sdp_interop::{IceCandidate, Interop, InteropError, SessionDescription};

const CANDIDATE: &str = "candidate:3684617590 1 udp 2122260223 10.217.229.219 50028 typ host";

#[test]
pub fn unified_candidate_to_channel() {
    init_log();

    let mut interop = Interop::new();
    interop
        .to_plan_b(&SessionDescription::offer(UNIFIED_OFFER))
        .unwrap();

    let c = interop
        .candidate_to_plan_b(&IceCandidate::new(CANDIDATE, "2", 2))
        .unwrap();
    assert_eq!(c.candidate, CANDIDATE);
    assert_eq!(c.sdp_mid.as_deref(), Some("video"));
    assert_eq!(c.sdp_m_line_index, Some(1));

    // Data channel keeps its mid but moves up.
    let c = interop
        .candidate_to_plan_b(&IceCandidate::new(CANDIDATE, "3", 3))
        .unwrap();
    assert_eq!(c.sdp_mid.as_deref(), Some("3"));
    assert_eq!(c.sdp_m_line_index, Some(2));
}

#[test]
pub fn channel_candidate_to_unified() {
    init_log();

    let mut interop = Interop::new();
    interop
        .to_plan_b(&SessionDescription::offer(UNIFIED_OFFER))
        .unwrap();

    let c = interop
        .candidate_to_unified_plan(&IceCandidate::new(CANDIDATE, "video", 1))
        .unwrap();
    assert_eq!(c.sdp_mid.as_deref(), Some("1"));
    assert_eq!(c.sdp_m_line_index, Some(1));
}

#[test]
pub fn candidate_after_decode() {
    init_log();

    let mut interop = Interop::new();
    interop
        .to_unified_plan(&SessionDescription::offer(PLAN_B_OFFER))
        .unwrap();

    let c = interop
        .candidate_to_unified_plan(&IceCandidate::new(CANDIDATE, "video", 1))
        .unwrap();
    assert_eq!(c.sdp_mid.as_deref(), Some("video-1733429841"));
    assert_eq!(c.sdp_m_line_index, Some(1));

    let c = interop
        .candidate_to_plan_b(&IceCandidate::new(CANDIDATE, "audio-3393882360", 0))
        .unwrap();
    assert_eq!(c.sdp_mid.as_deref(), Some("audio"));
    assert_eq!(c.sdp_m_line_index, Some(0));
}

#[test]
pub fn index_only_candidate() {
    init_log();

    let mut interop = Interop::new();
    interop
        .to_plan_b(&SessionDescription::offer(UNIFIED_OFFER))
        .unwrap();

    let c = IceCandidate {
        candidate: CANDIDATE.to_string(),
        sdp_mid: None,
        sdp_m_line_index: Some(2),
        username_fragment: Some("8hhY".to_string()),
    };

    let out = interop.candidate_to_plan_b(&c).unwrap();
    assert_eq!(out.sdp_mid.as_deref(), Some("video"));
    assert_eq!(out.sdp_m_line_index, Some(1));
    assert_eq!(out.username_fragment.as_deref(), Some("8hhY"));
}

#[test]
pub fn unknown_identifier() {
    init_log();

    let interop = Interop::new();
    let err = interop
        .candidate_to_plan_b(&IceCandidate::new(CANDIDATE, "0", 0))
        .unwrap_err();
    assert!(matches!(err, InteropError::UnknownCandidateIdentifier(id) if id == "0"));

    let mut interop = Interop::new();
    interop
        .to_plan_b(&SessionDescription::offer(UNIFIED_OFFER))
        .unwrap();

    let err = interop
        .candidate_to_plan_b(&IceCandidate::new(CANDIDATE, "9", 9))
        .unwrap_err();
    assert!(matches!(err, InteropError::UnknownCandidateIdentifier(id) if id == "9"));

    let none = IceCandidate {
        candidate: CANDIDATE.to_string(),
        sdp_mid: None,
        sdp_m_line_index: None,
        username_fragment: None,
    };
    let err = interop.candidate_to_unified_plan(&none).unwrap_err();
    assert!(matches!(err, InteropError::UnknownCandidateIdentifier(id) if id == "<none>"));
}

#[test]
pub fn browser_json() {
    init_log();

    let mut interop = Interop::new();
    interop
        .to_plan_b(&SessionDescription::offer(UNIFIED_OFFER))
        .unwrap();

    let json = format!(
        r#"{{"candidate":"{CANDIDATE}","sdpMid":"2","sdpMLineIndex":2,"usernameFragment":"8hhY"}}"#
    );
    let c: IceCandidate = serde_json::from_str(&json).unwrap();
    let out = interop.candidate_to_plan_b(&c).unwrap();

    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        format!(
            r#"{{"candidate":"{CANDIDATE}","sdpMid":"video","sdpMLineIndex":1,"usernameFragment":"8hhY"}}"#
        )
    );
}
