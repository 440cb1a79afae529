//! Rewrites WebRTC session descriptions between Plan B and Unified Plan.
//!
//! Plan B puts all tracks of one media type on a single m-line and tells
//! them apart by SSRC. Unified Plan gives every track its own m-line with
//! its own `a=mid`. An endpoint speaking one of them can talk to a peer
//! speaking the other if every description passing between them is
//! rewritten, which is what [`Interop`] does.
//!
//! The Unified Plan side is the local application, the Plan B side the
//! remote peer.
//!
//! ```no_run
//! # use sdp_interop::{Interop, SessionDescription};
//! // One instance per peer connection.
//! let mut interop = Interop::new();
//!
//! // Local offer from a Unified Plan endpoint.
//! let offer = SessionDescription::offer("v=0\r\n...");
//! let plan_b = interop.to_plan_b(&offer).unwrap();
//!
//! // Send plan_b to the remote peer and wait for its answer.
//! let answer: SessionDescription = todo!();
//!
//! let unified = interop.to_unified_plan(&answer).unwrap();
//! ```
//!
//! # Negotiation state
//!
//! Plan B carries no per-track mid, so an [`Interop`] remembers the last
//! Unified Plan description for each of offer and answer. That keeps the mid
//! of a track stable across renegotiations, and is why answers can only be
//! rewritten after the matching offer went through the same instance.
//!
//! Calls for one peer connection must happen in the order the descriptions
//! are applied. Each transform takes `&mut self`.
//!
//! # Format detection
//!
//! Transforms whose input already looks like the target format return it
//! unchanged. The detection is a heuristic, see [`classify`]. A small Unified
//! Plan session using the mids `audio` and `video` can't be told apart from
//! Plan B; use [`InteropConfig::set_trust_input_format`] if callers know
//! what they are passing.
//!
//! # ICE candidates
//!
//! Trickled candidates name their m-line by mid and index, which differ
//! between the formats. [`Interop::candidate_to_plan_b`] and
//! [`Interop::candidate_to_unified_plan`] translate them using the last
//! transform done.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::new_without_default)]

#[macro_use]
extern crate tracing;

use thiserror::Error;

mod bundle;
mod cache;
mod candidate;
mod classify;
mod config;
mod decode;
mod desc;
mod encode;
mod id;
mod translate;
mod util;

pub mod sdp;

pub use candidate::IceCandidate;
pub use classify::{classify, Format};
pub use config::InteropConfig;
pub use desc::{SdpType, SessionDescription};

use cache::NegotiationCache;
use sdp::{Mid, Sdp, Ssrc};
use translate::CandidateMap;

/// Various error types.
pub mod error {
    pub use crate::sdp::SdpError;
}

/// Errors from rewriting descriptions or candidates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InteropError {
    /// An m-line that isn't inactive lacks `a=rtcp-mux`.
    #[error("m-line {0} is missing a=rtcp-mux")]
    MissingRtcpMux(Mid),

    /// The BUNDLE group doesn't cover exactly the session's mids.
    #[error("BUNDLE group does not match the m-lines")]
    NonBundledMedia,

    /// An answer has a source that no earlier description mentioned.
    #[error("SSRC {0} is not mapped to any mid")]
    UnmappedSsrc(Ssrc),

    /// An answer came without an offer before it.
    #[error("No offer to match answer against")]
    MissingCachedOffer,

    /// An m-line of the offer has no counterpart in the answer.
    #[error("Offer mid {0} missing from answer")]
    DanglingOfferMid(Mid),

    /// A candidate names an m-line the last transform didn't produce.
    #[error("Unknown candidate m-line: {0}")]
    UnknownCandidateIdentifier(String),

    /// SDP errors.
    #[error("{0}")]
    Sdp(#[from] error::SdpError),
}

/// Rewrites descriptions and candidates for one peer connection.
///
/// ## Usage
///
/// ```
/// # use sdp_interop::{Interop, SessionDescription, SdpType};
/// let mut interop = Interop::new();
///
/// // No m-lines, nothing to do.
/// let offer = SessionDescription::offer("v=0\r\no=- 1 1 IN IP4 0.0.0.0\r\ns=-\r\nt=0 0\r\n");
/// let out = interop.to_plan_b(&offer).unwrap();
///
/// assert_eq!(out, offer);
/// assert!(interop.cached(SdpType::Offer).is_none());
/// ```
#[derive(Debug)]
pub struct Interop {
    config: InteropConfig,
    cache: NegotiationCache,
    candidates: CandidateMap,
}

impl Interop {
    /// Creates a new instance with default config.
    pub fn new() -> Self {
        InteropConfig::new().build()
    }

    /// Creates a config builder that configures an [`Interop`] instance.
    ///
    /// ```
    /// # use sdp_interop::Interop;
    /// let interop = Interop::builder()
    ///     .set_trust_input_format(true)
    ///     .build();
    /// ```
    pub fn builder() -> InteropConfig {
        InteropConfig::new()
    }

    pub(crate) fn new_from_config(config: InteropConfig) -> Self {
        Interop {
            config,
            cache: NegotiationCache::default(),
            candidates: CandidateMap::default(),
        }
    }

    /// The config this instance was built with.
    pub fn config(&self) -> &InteropConfig {
        &self.config
    }

    /// The last Unified Plan session for the role.
    ///
    /// This is the input of the last [`Interop::to_plan_b`] or the output of
    /// the last [`Interop::to_unified_plan`] for that role, whichever came
    /// last.
    pub fn cached(&self, role: SdpType) -> Option<&Sdp> {
        self.cache.get(role)
    }

    /// Rewrite a Unified Plan description to Plan B.
    ///
    /// Descriptions without m-lines, or that already look like Plan B, are
    /// returned unchanged. On error nothing is remembered from the call.
    pub fn to_plan_b(
        &mut self,
        desc: &SessionDescription,
    ) -> Result<SessionDescription, InteropError> {
        let unified = desc.parse()?;

        if !self.should_transform(&unified, Format::UnifiedPlan, desc.sdp_type) {
            return Ok(desc.clone());
        }

        let plan_b = encode::to_plan_b(&unified)?;

        debug!(
            "to_plan_b {}: {} m-lines -> {}",
            desc.sdp_type,
            unified.media_lines.len(),
            plan_b.media_lines.len()
        );

        self.candidates = CandidateMap::new(&unified, &plan_b);
        self.cache.put(desc.sdp_type, unified);

        Ok(desc.with_sdp(&plan_b))
    }

    /// Rewrite a Plan B description to Unified Plan.
    ///
    /// Descriptions without m-lines, or that already look like Unified Plan,
    /// are returned unchanged. An answer needs an offer to have passed
    /// through this instance first. On error nothing is remembered from the
    /// call.
    pub fn to_unified_plan(
        &mut self,
        desc: &SessionDescription,
    ) -> Result<SessionDescription, InteropError> {
        let plan_b = desc.parse()?;

        if !self.should_transform(&plan_b, Format::PlanB, desc.sdp_type) {
            return Ok(desc.clone());
        }

        let unified = decode::to_unified_plan(&plan_b, desc.sdp_type, &self.cache, &self.config)?;

        debug!(
            "to_unified_plan {}: {} m-lines -> {}",
            desc.sdp_type,
            plan_b.media_lines.len(),
            unified.media_lines.len()
        );

        self.candidates = CandidateMap::new(&unified, &plan_b);
        let out = desc.with_sdp(&unified);
        self.cache.put(desc.sdp_type, unified);

        Ok(out)
    }

    /// Point a candidate for a Unified Plan m-line at its Plan B channel.
    pub fn candidate_to_plan_b(&self, c: &IceCandidate) -> Result<IceCandidate, InteropError> {
        self.candidates.to_plan_b(c)
    }

    /// Point a candidate for a Plan B channel at a Unified Plan m-line.
    pub fn candidate_to_unified_plan(
        &self,
        c: &IceCandidate,
    ) -> Result<IceCandidate, InteropError> {
        self.candidates.to_unified_plan(c)
    }

    fn should_transform(&self, sdp: &Sdp, expected: Format, role: SdpType) -> bool {
        let Some(format) = classify(sdp) else {
            warn!("No m-lines in {}, passing through", role);
            return false;
        };

        if self.config.trust_input_format || format == expected {
            return true;
        }

        warn!("{} is already {}, passing through", role, format);
        false
    }
}
