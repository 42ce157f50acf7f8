use crate::{
    error::{FormatError, VersionError},
    format::Format,
    version::Version,
};
use tracing::debug;

/// An ordered, non-empty list of compiled [`Format`]s that version strings are matched against
/// together.
///
/// Use this when versions may come in more than one shape, e.g. `2025.07` and `2025.07.14`.
///
/// # Example
///
/// ```
/// use calver::prelude::*;
///
/// let formats = FormatSet::new(["<YYYY>", "<YYYY>-<MM>"]).unwrap();
/// let version = formats.new_version("2025-07").unwrap();
/// assert_eq!("<YYYY>-<MM>", version.format_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    formats: Vec<Format>,
}

impl FormatSet {
    /// Parses and compiles every format string, in order.
    ///
    /// # Errors
    ///
    /// - [`FormatError::NoFormats`] if `format_strs` is empty.
    /// - The first error from [`Format::parse`] otherwise.
    pub fn new<I, S>(format_strs: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let formats = format_strs
            .into_iter()
            .map(|format_str| Format::parse(format_str.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if formats.is_empty() {
            return Err(FormatError::NoFormats);
        }
        Ok(Self { formats })
    }

    /// Parses a version string with every format in this set and returns the best match: the one
    /// that sets the most levels. When two formats set the same number of levels, the earlier
    /// one wins.
    ///
    /// For example, with formats `<YYYY>` and `<YYYY>-<MM>-<DD>`, a version string that matches
    /// both is parsed with the latter, since it extracts three values instead of one.
    ///
    /// # Errors
    ///
    /// - [`VersionError::NoFormatMatches`] if no format matches.
    /// - [`VersionError::MalformedVersion`] if a format matched but set no levels.
    pub fn new_version(&self, version_str: &str) -> Result<Version, VersionError> {
        let mut best: Option<Version> = None;

        for format in &self.formats {
            let version = match format.new_version(version_str) {
                Ok(version) => version,
                Err(VersionError::VersionFormatMismatch { .. }) => {
                    debug!(version = version_str, %format, "format did not match");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let level_count = version.level_count();
            debug!(version = version_str, %format, level_count, "format matched");
            if best
                .as_ref()
                .map_or(true, |best| level_count > best.level_count())
            {
                best = Some(version);
            }
        }

        let best = best.ok_or_else(|| VersionError::NoFormatMatches {
            version_string: version_str.to_owned(),
            format_strings: self.formats.iter().map(|f| f.to_string()).collect(),
        })?;
        debug!(version = version_str, format = best.format_string(), "selected format");
        Ok(best)
    }

    /// Returns true if any format in this set matches `version_str`.
    pub fn is_match(&self, version_str: &str) -> bool {
        self.formats.iter().any(|format| format.is_match(version_str))
    }

    /// The formats in this set, in order.
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }
}

impl From<Format> for FormatSet {
    fn from(format: Format) -> Self {
        Self {
            formats: vec![format],
        }
    }
}
