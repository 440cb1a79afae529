use std::collections::{BTreeMap, HashMap};

use crate::bundle::{is_fully_bundled, rebuild_bundle};
use crate::cache::NegotiationCache;
use crate::config::InteropConfig;
use crate::desc::SdpType;
use crate::encode::require_rtcp_mux;
use crate::sdp::{Direction, MediaLine, Mid, Sdp, Source, Ssrc, SsrcGroup};
use crate::InteropError;

/// Expand a Plan B session into Unified Plan.
///
/// Each source of a channel gets its own m-line, except sources grouped
/// with one that already has a line (RTX, FEC). The mid of a new line is
/// taken from the cache if the SSRC was seen before, otherwise one is made
/// up for offers. Answers keep the m-line order of the cached offer.
pub(crate) fn to_unified_plan(
    plan_b: &Sdp,
    role: SdpType,
    cache: &NegotiationCache,
    config: &InteropConfig,
) -> Result<Sdp, InteropError> {
    require_rtcp_mux(plan_b)?;

    if !is_fully_bundled(plan_b) {
        return Err(InteropError::NonBundledMedia);
    }

    let mut exploded = Exploded::default();

    for channel in &plan_b.media_lines {
        explode(channel, role, cache, config, &mut exploded)?;
    }

    let media_lines = match role {
        SdpType::Answer => assemble_answer(exploded, cache)?,
        SdpType::Offer => assemble_offer(exploded, cache),
    };

    let mut unified = Sdp {
        session: plan_b.session.clone(),
        media_lines,
    };

    rebuild_bundle(&mut unified);
    unified.session.set_msid_semantic("WMS", vec!["*".to_string()]);

    Ok(unified)
}

/// New m-lines in the order they were created.
#[derive(Debug, Default)]
struct Exploded {
    lines: Vec<MediaLine>,
}

impl Exploded {
    fn index_of(&self, mid: &Mid) -> Option<usize> {
        self.lines.iter().position(|m| m.mid() == Some(mid))
    }

    fn take(&mut self, mid: &Mid) -> Option<MediaLine> {
        let idx = self.index_of(mid)?;
        Some(self.lines.remove(idx))
    }
}

fn explode(
    channel: &MediaLine,
    role: SdpType,
    cache: &NegotiationCache,
    config: &InteropConfig,
    exploded: &mut Exploded,
) -> Result<(), InteropError> {
    let sources = channel.sources();

    // Data channels, and channels not sending anything, keep their mid.
    if !channel.typ.is_media() || sources.is_empty() {
        exploded.lines.push(channel.clone());
        return Ok(());
    }

    let groups: Vec<SsrcGroup> = channel
        .ssrc_groups()
        .into_iter()
        .filter(|g| !(config.drop_simulcast_groups && g.is_simulcast()))
        .collect();

    let components = group_components(&groups);

    let mut component_of: HashMap<Ssrc, usize> = HashMap::new();
    for (g, c) in groups.iter().zip(&components) {
        for ssrc in &g.ssrcs {
            component_of.insert(*ssrc, *c);
        }
    }

    let groups_of = |c: usize| -> Vec<SsrcGroup> {
        groups
            .iter()
            .zip(&components)
            .filter(|(_, k)| **k == c)
            .map(|(g, _)| g.clone())
            .collect()
    };

    // Shared attributes for all lines made from this channel. Cloning keeps
    // codecs and transport, identity is set per line.
    let template = {
        let mut t = channel.clone();
        t.clear_sources();
        t
    };

    // Component to the line it was placed on.
    let mut component_line: HashMap<usize, usize> = HashMap::new();

    for (ssrc, mut source) in sources {
        let component = component_of.get(&ssrc).copied();

        if let Some(idx) = component.and_then(|c| component_line.get(&c)) {
            trace!("Attach {} to group line {:?}", ssrc, exploded.lines[*idx].mid());
            source.msid = None;
            add_source(&mut exploded.lines[*idx], source);
            continue;
        }

        // Any member of the component may be the one the cache knows.
        let mut lookup = vec![ssrc];
        if let Some(c) = component {
            let mut others: Vec<Ssrc> = component_of
                .iter()
                .filter(|(s, k)| **k == c && **s != ssrc)
                .map(|(s, _)| *s)
                .collect();
            others.sort();
            lookup.extend(others);
        }

        let cached = lookup.iter().find_map(|s| cache.mid_for_ssrc(role, *s));

        let mid = match cached {
            Some(mid) => {
                trace!("Reuse mid {} for {}", mid, ssrc);
                mid.clone()
            }
            None if role == SdpType::Answer => {
                return Err(InteropError::UnmappedSsrc(ssrc));
            }
            None => {
                let mid = Mid::from(format!("{}-{}", channel.typ, ssrc));
                trace!("New mid {} for {}", mid, ssrc);
                mid
            }
        };

        // A line made in this pass may already own the mid, that's the
        // same track as far as the remote peer is concerned.
        if let Some(idx) = exploded.index_of(&mid) {
            trace!("Attach {} to line with mid {}", ssrc, mid);
            source.msid = None;
            add_source(&mut exploded.lines[idx], source);
            if let Some(c) = component {
                for g in groups_of(c) {
                    add_group(&mut exploded.lines[idx], &g);
                }
                component_line.insert(c, idx);
            }
            continue;
        }

        let mut line = template.clone();
        line.set_mid(mid);
        line.set_msid(source.msid.take());

        let mut single = BTreeMap::new();
        single.insert(ssrc, source);
        line.set_sources(&single);

        if let Some(c) = component {
            line.set_ssrc_groups(&groups_of(c));
            component_line.insert(c, exploded.lines.len());
        }

        exploded.lines.push(line);
    }

    Ok(())
}

/// Component index per group. Groups sharing an SSRC, directly or through
/// other groups, get the same index.
fn group_components(groups: &[SsrcGroup]) -> Vec<usize> {
    let mut components: Vec<usize> = (0..groups.len()).collect();

    for a in 0..groups.len() {
        for b in (a + 1)..groups.len() {
            let (ca, cb) = (components[a], components[b]);
            if ca == cb || !groups[a].ssrcs.iter().any(|s| groups[b].contains(*s)) {
                continue;
            }
            for c in components.iter_mut() {
                if *c == cb {
                    *c = ca;
                }
            }
        }
    }

    components
}

fn add_source(line: &mut MediaLine, source: Source) {
    let mut sources = line.sources();
    sources.insert(source.ssrc, source);
    line.set_sources(&sources);
}

fn add_group(line: &mut MediaLine, group: &SsrcGroup) {
    let mut groups = line.ssrc_groups();
    if !groups.contains(group) {
        groups.push(group.clone());
        line.set_ssrc_groups(&groups);
    }
}

/// A line kept only to preserve the m-line, with whatever it was sending
/// taken away.
fn stop_sending(old: &MediaLine) -> MediaLine {
    let mut line = old.clone();
    let dir = line.direction().without_send();
    line.clear_sources();
    line.set_direction(dir);
    line
}

/// Answers can't add or remove m-lines, they follow the cached offer.
fn assemble_answer(
    mut exploded: Exploded,
    cache: &NegotiationCache,
) -> Result<Vec<MediaLine>, InteropError> {
    let offer = cache
        .get(SdpType::Offer)
        .ok_or(InteropError::MissingCachedOffer)?;
    let previous = cache.get(SdpType::Answer);

    let mut media_lines = vec![];

    for mid in offer.mids() {
        if let Some(line) = exploded.take(&mid) {
            media_lines.push(line);
            continue;
        }

        let old = previous
            .and_then(|p| p.media_by_mid(&mid))
            .ok_or_else(|| InteropError::DanglingOfferMid(mid.clone()))?;

        trace!("No longer sending on {}", mid);
        media_lines.push(stop_sending(old));
    }

    for line in &exploded.lines {
        warn!("Answer m-line not in offer: {:?}", line.mid());
    }

    Ok(media_lines)
}

/// Offers keep every m-line from the last offer, then add new ones.
fn assemble_offer(mut exploded: Exploded, cache: &NegotiationCache) -> Vec<MediaLine> {
    let mut media_lines: Vec<MediaLine> = vec![];

    if let Some(previous) = cache.get(SdpType::Offer) {
        for old in &previous.media_lines {
            let line = old.mid().and_then(|mid| exploded.take(mid));

            match line {
                Some(line) => media_lines.push(line),
                None => {
                    trace!("No longer sending on {:?}", old.mid());
                    media_lines.push(stop_sending(old));
                }
            }
        }
    }

    for line in exploded.lines {
        if line.direction() == Direction::RecvOnly {
            let existing = media_lines
                .iter_mut()
                .find(|m| m.typ == line.typ && m.direction().is_sending());

            if let Some(existing) = existing {
                trace!(
                    "Merge recvonly {:?} into {:?}",
                    line.mid(),
                    existing.mid()
                );
                for (_, mut source) in line.sources() {
                    source.msid = None;
                    add_source(existing, source);
                }
                for g in line.ssrc_groups() {
                    add_group(existing, &g);
                }
                continue;
            }
        }

        media_lines.push(line);
    }

    media_lines
}
