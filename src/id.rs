use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

macro_rules! num_id {
    ($(#[$meta:meta])* $id:ident, $t:ty) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $id($t);

        impl Deref for $id {
            type Target = $t;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$t> for $id {
            fn from(v: $t) -> Self {
                $id(v)
            }
        }

        impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

num_id!(
    /// Synchronization source, identifies one RTP stream.
    Ssrc,
    u32
);
num_id!(
    /// The session id of the `o=` line.
    SessionId,
    u64
);

/// Media identifier, the value of `a=mid`.
///
/// Unified Plan mids are arbitrary tokens (`0`, `audio-3393882360`), Plan B
/// mids are the channel type (`audio`, `video`, `data`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mid(String);

impl Mid {
    /// The mid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Mid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mid({})", self.0)
    }
}

impl Deref for Mid {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> From<&'a str> for Mid {
    fn from(v: &'a str) -> Self {
        Mid(v.trim().to_string())
    }
}

impl From<String> for Mid {
    fn from(v: String) -> Self {
        if v.trim().len() == v.len() {
            Mid(v)
        } else {
            Mid(v.trim().to_string())
        }
    }
}

impl PartialEq<str> for Mid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a> PartialEq<&'a str> for Mid {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}
