//! Error type shared by the codecs and ontology lowering.

/// Errors returned by `semgraph` operations.
///
/// Lenient decoding never produces [`Error::Decode`]; malformed input is
/// dropped instead. Lowering with the default options never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A statement chunk or line could not be decoded in strict mode.
    #[error("{format} decode error at line {line}: {message}")]
    Decode {
        /// Name of the format being decoded.
        format: &'static str,
        /// 1-based line on which the malformed input starts.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A format name or file extension that no codec handles.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A characteristic flag was set on a property kind it does not apply to
    /// and the lowering policy rejects such definitions.
    #[error("property {property}: {characteristic} does not apply to {kind} properties")]
    Characteristic {
        /// Name of the offending property definition.
        property: String,
        /// The characteristic that was set.
        characteristic: &'static str,
        /// The property kind it was set on.
        kind: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a decode error.
    pub fn decode(format: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            format,
            line,
            message: message.into(),
        }
    }
}
