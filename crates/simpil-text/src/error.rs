/// Errors that can occur while building a text style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A constructor or merge received a value of an unsupported type.
    InvalidInputType {
        /// Name of the type that was supplied.
        found: &'static str,
        /// Human-readable list of the accepted types.
        expected: &'static str,
    },

    /// A color key or value was rejected.
    InvalidColorValue {
        key: String,
        value: String,
        reason: &'static str,
    },

    /// The path does not name a supported font file.
    InvalidFontFile { path: String },
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::InvalidInputType { found, expected } => {
                write!(f, "\"{}\" is not a valid input type. Must be {}", found, expected)
            }
            TextError::InvalidColorValue { key, value, reason } => write!(
                f,
                "Invalid color '{}' for key '{}': {}",
                value, key, reason
            ),
            TextError::InvalidFontFile { path } => write!(
                f,
                "'{}' is not a font file (expected .ttf, .otf, .woff or .woff2)",
                path
            ),
        }
    }
}

impl std::error::Error for TextError {}

/// Result type for text style operations.
pub type TextResult<T> = Result<T, TextError>;
