use crate::{
    error::{FormatError, VersionError},
    specifier::{self, Level, Specifier},
    version::Version,
};
use core::fmt::{self, Display};
use regex::Regex;
use tracing::trace;

/// A piece of a format string: either a known specifier or a run of literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormatToken<'fs> {
    Specifier(&'static Specifier),

    /// Literal text, matched verbatim. Text that looks like a specifier but isn't one (e.g.
    /// `<YYY>`) ends up here too.
    Literal(&'fs str),
}

/// Splits a format string into specifiers and literal runs. Adjacent literal characters are
/// merged into a single token. This never fails: validation happens in [`Format::parse`].
pub(crate) fn tokenize(format_str: &str) -> Vec<FormatToken<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut idx = 0;

    while idx < format_str.len() {
        let rest = &format_str[idx..];
        let matched_spec = specifier::ALL
            .iter()
            .find(|spec| rest.starts_with(spec.format_pattern));

        if let Some(&spec) = matched_spec {
            if let Some(start) = literal_start.take() {
                tokens.push(FormatToken::Literal(&format_str[start..idx]));
            }
            tokens.push(FormatToken::Specifier(spec));
            idx += spec.format_pattern.len();
        } else {
            literal_start.get_or_insert(idx);
            // rest is non-empty, so there is a next char
            idx += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if let Some(start) = literal_start {
        tokens.push(FormatToken::Literal(&format_str[start..]));
    }

    tokens
}

/// A Format describes the structure of a version, comprised of *specifiers* and *literal text*.
/// It is compiled once and can then be used to parse any number of version strings into
/// [`Version`]s.
///
/// A format string is valid if it contains at least one specifier and no two specifiers set the
/// same [`Level`].
///
/// # Example
///
/// ```
/// use calver::prelude::*;
///
/// let format = Format::parse("Rel-<YYYY>-<0M>-<0D>").unwrap();
/// let version = format.new_version("Rel-2025-07-14").unwrap();
/// assert_eq!(Some("2025"), version.major());
/// assert_eq!("Rel-2025-07-14", version.to_string());
///
/// assert!(Format::parse("<YYYY>-<YYYY>").is_err());
/// assert!(Format::parse("foobar").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Format {
    format_string: String,

    /// The specifier present for each level, indexed by [`Level::index`].
    specs: [Option<&'static Specifier>; 4],

    /// Anchored pattern with one named group per specifier.
    regex: Regex,
}

impl Format {
    /// Parses and compiles a format string.
    ///
    /// Literal text is escaped, so characters like `.` or `+` only ever match themselves.
    ///
    /// # Errors
    ///
    /// - [`FormatError::NoSpecifiers`] if `format_str` contains no known specifier.
    /// - [`FormatError::DuplicateLevel`] if two specifiers set the same level, e.g.
    ///   `<YYYY>.<0Y>`.
    /// - [`FormatError::Pattern`] if the resulting pattern cannot be compiled.
    pub fn parse(format_str: &str) -> Result<Self, FormatError> {
        let mut specs: [Option<&'static Specifier>; 4] = [None; 4];
        let mut pattern = String::with_capacity(format_str.len() * 2 + 2);
        pattern.push('^');

        for token in tokenize(format_str) {
            match token {
                FormatToken::Specifier(spec) => {
                    let slot = &mut specs[spec.level.index()];
                    if let Some(first) = *slot {
                        return Err(FormatError::DuplicateLevel {
                            format_string: format_str.to_owned(),
                            level: spec.level,
                            first: first.to_string(),
                            second: spec.to_string(),
                        });
                    }
                    *slot = Some(spec);
                    pattern.push_str(&spec.version_pattern_group());
                }
                FormatToken::Literal(text) => pattern.push_str(&regex::escape(text)),
            }
        }

        if specs.iter().all(Option::is_none) {
            return Err(FormatError::NoSpecifiers {
                format_string: format_str.to_owned(),
            });
        }

        pattern.push('$');
        let regex = Regex::new(&pattern).map_err(|err| FormatError::Pattern {
            format_string: format_str.to_owned(),
            message: err.to_string(),
        })?;
        trace!(format = format_str, %pattern, "compiled format");

        Ok(Self {
            format_string: format_str.to_owned(),
            specs,
            regex,
        })
    }

    /// Parses a version string with this format and returns a [`Version`].
    ///
    /// The version string must match the whole format: literal text exactly, and each specifier
    /// with a value of the right shape. Values are *not* checked to be real dates, so `2025.13`
    /// is valid for `<YYYY>.<MM>`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::VersionFormatMismatch`] if the version string does not match.
    /// - [`VersionError::MalformedVersion`] if the match set no levels at all.
    pub fn new_version(&self, version_str: &str) -> Result<Version, VersionError> {
        let captures = self.regex.captures(version_str).ok_or_else(|| {
            VersionError::VersionFormatMismatch {
                version_string: version_str.to_owned(),
                format_string: self.format_string.clone(),
            }
        })?;

        let mut values: [Option<String>; 4] = Default::default();
        for level in self.levels() {
            values[level.index()] = captures
                .name(level.name())
                .map(|value| value.as_str().to_owned());
        }

        if values.iter().all(Option::is_none) {
            return Err(VersionError::MalformedVersion {
                version_string: version_str.to_owned(),
                format_string: self.format_string.clone(),
            });
        }

        Ok(Version::new(self.format_string.clone(), values))
    }

    /// Returns true if `version_str` matches this format.
    pub fn is_match(&self, version_str: &str) -> bool {
        self.regex.is_match(version_str)
    }

    /// The levels that have a specifier in this format, most significant first.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL
            .into_iter()
            .filter(|level| self.specs[level.index()].is_some())
    }

    /// The specifier used for `level`, if any.
    pub fn specifier(&self, level: Level) -> Option<&'static Specifier> {
        self.specs[level.index()]
    }

    /// The original format string.
    pub fn as_str(&self) -> &str {
        &self.format_string
    }
}

impl PartialEq for Format {
    fn eq(&self, other: &Self) -> bool {
        // the rest is derived from the format string
        self.format_string == other.format_string
    }
}

impl Eq for Format {}

impl Display for Format {
    /// Display a format as its format string.
    ///
    /// # Example
    ///
    /// ```
    /// use calver::prelude::*;
    ///
    /// let format_str = "<YYYY>.<MM>.<DD>";
    /// let format = Format::parse(format_str).unwrap();
    /// assert_eq!(format_str, format.to_string());
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_string)
    }
}
