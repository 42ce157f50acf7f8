use crate::specifier::Level;

/// Errors that occur when parsing a format string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The format string contains no known specifiers.
    #[error("Format string `{format_string}` should contain at least one specifier")]
    NoSpecifiers {
        /// The format string that was parsed.
        format_string: String,
    },

    /// Two specifiers in the format string set the same level.
    #[error("Format string `{format_string}` should contain at most one {level} specifier, but found `{first}` and `{second}`")]
    DuplicateLevel {
        /// The format string that was parsed.
        format_string: String,
        /// The level that was repeated.
        level: Level,
        /// The first specifier for `level`.
        first: String,
        /// The repeated specifier for `level`.
        second: String,
    },

    /// A format set was requested with no format strings.
    #[error("At least one format string should be provided")]
    NoFormats,

    /// The format string was valid, but could not be compiled into a pattern (for example, it is
    /// too large).
    #[error("Format string `{format_string}` could not be compiled: {message}")]
    Pattern {
        /// The format string that was parsed.
        format_string: String,
        /// The compiler's message.
        message: String,
    },
}

/// Errors that occur when creating, comparing or incrementing versions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The version string does not match the format string.
    #[error("Version string `{version_string}` does not match format string `{format_string}`")]
    VersionFormatMismatch {
        /// The version string that was parsed.
        version_string: String,
        /// The format string it was matched against.
        format_string: String,
    },

    /// The version string does not match any format string in a set.
    #[error("Version string `{version_string}` does not match any of the format strings: {}", .format_strings.join(", "))]
    NoFormatMatches {
        /// The version string that was parsed.
        version_string: String,
        /// Every format string that was tried, in order.
        format_strings: Vec<String>,
    },

    /// The version string matched, but no level was extracted from it.
    #[error("Version string `{version_string}` matched format string `{format_string}` but set no levels")]
    MalformedVersion {
        /// The version string that was parsed.
        version_string: String,
        /// The format string it was matched against.
        format_string: String,
    },

    /// Two versions were compared strictly, but come from different format strings.
    #[error("Versions from different format strings cannot be compared: `{format_a}` and `{format_b}`")]
    FormatMismatch {
        /// Format string of the left-hand version.
        format_a: String,
        /// Format string of the right-hand version.
        format_b: String,
    },

    /// A value could not be incremented because it is not a number.
    #[error("Value `{value}` should be a number to be incremented")]
    NotANumber {
        /// The value that was not a number.
        value: String,
    },

    /// An entry in a collection could not be parsed.
    #[error("Collection entry {index} (`{version_string}`) is invalid: {source}")]
    InvalidEntry {
        /// Position of the entry in the input.
        index: usize,
        /// The entry itself.
        version_string: String,
        /// Why it failed.
        source: Box<VersionError>,
    },
}

/// Returned by helpers that parse a format string and a version string in one step.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    /// The format string was invalid.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The version string was invalid for the format.
    #[error(transparent)]
    Version(#[from] VersionError),
}
