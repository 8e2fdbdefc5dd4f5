//! Error types for the playbook press.
//!
//! Document generation is all-or-nothing per file: there is no retry,
//! backoff, or partial-success mode anywhere in the crate.

/// Result type alias for playbook press operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color token did not decode to exactly three byte pairs.
    ///
    /// Raised at the point of conversion. A bad token is a configuration
    /// defect, not a recoverable runtime condition.
    #[error("Malformed color token '{token}': {reason}")]
    MalformedColor {
        /// The offending token, as supplied by the caller
        token: String,
        /// Why the token was rejected
        reason: &'static str,
    },

    /// IO error while writing the finished document.
    ///
    /// Propagated verbatim from the filesystem. No partial-file guarantee.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An external catalog file could not be decoded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
