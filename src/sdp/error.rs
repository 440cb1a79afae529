use thiserror::Error;

/// Errors from parsing and checking SDP.
#[derive(Debug, Error)]
pub enum SdpError {
    /// The text is not SDP we understand.
    #[error("SDP parse: {0}")]
    Parse(String),

    /// The SDP parsed, but is structurally unsound.
    #[error("SDP inconsistent: {0}")]
    Inconsistent(String),
}
