use std::fmt;

use crate::sdp::{MediaType, Sdp};

/// How tracks are laid out over m-lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// One m-line per media type, tracks told apart by SSRC.
    PlanB,
    /// One m-line per track.
    UnifiedPlan,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::PlanB => write!(f, "Plan B"),
            Format::UnifiedPlan => write!(f, "Unified Plan"),
        }
    }
}

/// Mids a Plan B session uses for its channels.
const PLAN_B_MIDS: &[&str] = &["audio", "video", "application", "data"];

/// Guess the format of a session.
///
/// More than three m-lines, or any audio/video m-line whose mid isn't one of
/// `audio`, `video`, `application` or `data`, means Unified Plan. Data
/// channel lines are accepted whatever their mid. Returns `None` if there are
/// no m-lines.
///
/// A Unified Plan session that happens to use exactly the Plan B mids is
/// classified as Plan B.
pub fn classify(sdp: &Sdp) -> Option<Format> {
    if sdp.media_lines.is_empty() {
        return None;
    }

    if sdp.media_lines.len() > 3 {
        return Some(Format::UnifiedPlan);
    }

    let unified = sdp.media_lines.iter().any(|m| {
        if m.typ == MediaType::Application {
            return false;
        }
        match m.mid() {
            Some(mid) => !PLAN_B_MIDS.contains(&mid.as_str()),
            None => false,
        }
    });

    if unified {
        Some(Format::UnifiedPlan)
    } else {
        Some(Format::PlanB)
    }
}
