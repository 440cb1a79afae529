use std::collections::HashMap;

use crate::bundle::rebuild_bundle;
use crate::sdp::{MediaLine, MediaType, Mid, Sdp};
use crate::InteropError;

/// Every audio and video m-line must multiplex RTCP, unless it is inactive.
pub(crate) fn require_rtcp_mux(sdp: &Sdp) -> Result<(), InteropError> {
    for (idx, m) in sdp.media_lines.iter().enumerate() {
        if m.typ.is_media() && !m.is_muxable() {
            let mid = m.mid().cloned().unwrap_or_else(|| Mid::from(idx.to_string()));
            return Err(InteropError::MissingRtcpMux(mid));
        }
    }
    Ok(())
}

/// Collapse a Unified Plan session into Plan B.
///
/// The first m-line of each media type becomes the channel for that type, the
/// sources of later m-lines of the same type are moved into it. Data channel
/// lines are kept as they are.
pub(crate) fn to_plan_b(unified: &Sdp) -> Result<Sdp, InteropError> {
    require_rtcp_mux(unified)?;

    // All lines are bundled, the first one carries the transport for all.
    let transport = unified.media_lines.first().map(|m| m.transport());

    let mut media_lines: Vec<MediaLine> = vec![];
    let mut channels: HashMap<MediaType, usize> = HashMap::new();

    for m in &unified.media_lines {
        if !m.typ.is_media() {
            media_lines.push(m.clone());
            continue;
        }

        let sources = {
            let mut sources = m.sources();
            if let Some(msid) = m.msid() {
                for s in sources.values_mut() {
                    s.msid = Some(msid.clone());
                }
            }
            sources
        };

        if let Some(idx) = channels.get(&m.typ) {
            let channel = &mut media_lines[*idx];

            let mut merged = channel.sources();
            for (ssrc, source) in sources {
                trace!("Merge {} into channel {}", ssrc, m.typ);
                merged.insert(ssrc, source);
            }
            channel.set_sources(&merged);

            let mut groups = channel.ssrc_groups();
            groups.extend(m.ssrc_groups());
            channel.set_ssrc_groups(&groups);

            continue;
        }

        let mut channel = m.clone();
        channel.set_mid(Mid::from(m.typ.to_string()));
        channel.remove_bundle_only();
        channel.set_msid(None);
        channel.set_sources(&sources);

        if let Some(t) = &transport {
            let mut t = t.clone();
            t.port = channel.port;
            channel.set_transport(&t);
        }

        channels.insert(m.typ.clone(), media_lines.len());
        media_lines.push(channel);
    }

    let mut plan_b = Sdp {
        session: unified.session.clone(),
        media_lines,
    };

    rebuild_bundle(&mut plan_b);
    plan_b.session.set_msid_semantic("WMS", vec!["*".to_string()]);

    Ok(plan_b)
}
