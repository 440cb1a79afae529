//! PII-safe wrapper for sensitive values.
//!
//! The `Pii<T>` type wraps any value that may identify a user or a network
//! endpoint, such as an ICE candidate line. When the `pii` feature is
//! enabled, a wrapped value is displayed as `{REDACTED}`. Otherwise the inner
//! value is shown as normal.
//!
//! Use it for debug, info and warn logs. Trace logs are typically disabled
//! in production and may show values unwrapped.

use core::fmt;
use core::ops::Deref;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pii<T>(pub T);

impl<T: fmt::Display> fmt::Display for Pii<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "pii")]
        {
            write!(f, "{{REDACTED}}")
        }
        #[cfg(not(feature = "pii"))]
        {
            write!(f, "{}", self.0)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pii<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "pii")]
        {
            write!(f, "{{REDACTED}}")
        }
        #[cfg(not(feature = "pii"))]
        {
            write!(f, "{:?}", self.0)
        }
    }
}

impl<T> Deref for Pii<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_display() {
        let line = "candidate:1 1 udp 2113929471 203.0.113.100 10100 typ host";
        let pii = Pii(line);

        #[cfg(feature = "pii")]
        assert_eq!(pii.to_string(), "{REDACTED}");

        #[cfg(not(feature = "pii"))]
        assert_eq!(pii.to_string(), line);
    }

    #[test]
    fn debug_quotes_inner() {
        let pii = Pii(String::from("ufrag"));

        #[cfg(feature = "pii")]
        assert_eq!(format!("{pii:?}"), "{REDACTED}");

        #[cfg(not(feature = "pii"))]
        assert_eq!(format!("{pii:?}"), "\"ufrag\"");
    }
}
