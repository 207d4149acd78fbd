//! Error handling for line breaking data and configuration

/// Errors raised while loading classification data or configuration
///
/// The breaking engine itself is infallible; these only surface at the
/// edges where external data enters the crate.
#[derive(Debug, thiserror::Error)]
pub enum LineBreakError {
    #[error("Unknown line break class: {0}")]
    UnknownClass(String),

    #[error("Invalid code point range: start {start:#X}, end {end:#X}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for line breaking data operations
pub type LineBreakResult<T> = Result<T, LineBreakError>;
