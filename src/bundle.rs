use std::collections::HashSet;

use crate::sdp::{Mid, Sdp};

/// Make an existing BUNDLE group list the session's mids in m-line order.
///
/// Sessions without a BUNDLE group are left without one.
pub(crate) fn rebuild_bundle(sdp: &mut Sdp) {
    let mids = sdp.mids();
    if sdp.session.set_bundle_group(mids) {
        trace!("Rebuilt BUNDLE group: {:?}", sdp.session.bundle_group());
    }
}

/// Whether the BUNDLE group covers exactly the session's mids.
///
/// Order doesn't matter. A session without BUNDLE group never is.
pub(crate) fn is_fully_bundled(sdp: &Sdp) -> bool {
    let Some(group) = sdp.session.bundle_group() else {
        return false;
    };

    let grouped: HashSet<&Mid> = group.iter().collect();
    let mids = sdp.mids();
    let present: HashSet<&Mid> = mids.iter().collect();

    grouped == present
}
