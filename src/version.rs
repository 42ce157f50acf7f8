use crate::{
    error::{CompositeError, VersionError},
    format::{tokenize, FormatToken},
    format_set::FormatSet,
    specifier::Level,
};
use core::fmt::{self, Display};

/// A Version is a parsed version string: the format string it matched plus the value extracted
/// for each [`Level`] present in that format.
///
/// Versions are created with [`Format::new_version`](crate::Format::new_version),
/// [`FormatSet::new_version`] or [`Version::parse`]. They are immutable:
/// [`increment`](Version::increment) returns a new Version.
///
/// Levels that do not appear in the format are *unset* (`None`), which is different from a set
/// but empty value (`Some("")`, only possible for `<MODIFIER>`).
///
/// # Examples
///
/// ```
/// use calver::prelude::*;
///
/// let version = Version::parse("Rel-2025-07-14", ["Rel-<YYYY>-<0M>-<0D>"]).unwrap();
/// assert_eq!("Rel-2025-07-14", version.to_string());
/// assert_eq!(Some("07"), version.minor());
/// assert_eq!(None, version.modifier());
///
/// assert_eq!("Rel-2025", version.series(Some(Level::Major)));
/// assert_eq!("Rel-2025-07", version.series(Some(Level::Minor)));
///
/// let next = version.increment(Level::Micro).unwrap();
/// assert_eq!("Rel-2025-07-15", next.to_string());
/// assert!(version < next);
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    format_string: String,

    /// Indexed by [`Level::index`].
    values: [Option<String>; 4],
}

impl Version {
    /// Callers must ensure at least one value is set.
    pub(crate) fn new(format_string: String, values: [Option<String>; 4]) -> Self {
        Self {
            format_string,
            values,
        }
    }

    /// Parses `version_str` against one or more format strings in one step. When several formats
    /// match, the one that sets the most levels wins, and earlier formats win ties. See
    /// [`FormatSet::new_version`].
    ///
    /// If you parse many versions with the same formats, build a [`FormatSet`] once instead.
    ///
    /// # Errors
    ///
    /// - [`CompositeError::Format`] if any format string is invalid, or none were given.
    /// - [`CompositeError::Version`] if no format matches the version string.
    pub fn parse<I, S>(version_str: &str, format_strs: I) -> Result<Self, CompositeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let format_set = FormatSet::new(format_strs)?;
        Ok(format_set.new_version(version_str)?)
    }

    /// The format string this version was parsed with.
    pub fn format_string(&self) -> &str {
        &self.format_string
    }

    /// The value for `level`, or `None` if the format has no specifier for it.
    pub fn value(&self, level: Level) -> Option<&str> {
        self.values[level.index()].as_deref()
    }

    /// The major value.
    pub fn major(&self) -> Option<&str> {
        self.value(Level::Major)
    }

    /// The minor value.
    pub fn minor(&self) -> Option<&str> {
        self.value(Level::Minor)
    }

    /// The micro value.
    pub fn micro(&self) -> Option<&str> {
        self.value(Level::Micro)
    }

    /// The modifier value. Unlike the others, this may be any text.
    pub fn modifier(&self) -> Option<&str> {
        self.value(Level::Modifier)
    }

    /// The levels that are set, most significant first.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL
            .into_iter()
            .filter(|level| self.values[level.index()].is_some())
    }

    pub(crate) fn level_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    fn render(&self, tokens: &[FormatToken<'_>]) -> String {
        let mut out = String::with_capacity(self.format_string.len());
        for token in tokens {
            match token {
                FormatToken::Specifier(spec) => {
                    // unset levels are written back as the specifier itself
                    out.push_str(self.value(spec.level()).unwrap_or(spec.format_pattern()))
                }
                FormatToken::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Returns the series of this version: the version string cut off right after the value for
    /// `level`. With `None`, or a level not in the format, returns the whole version string.
    ///
    /// # Example
    ///
    /// ```
    /// use calver::prelude::*;
    ///
    /// let version = Version::parse("2025-07-14", ["<YYYY>-<MM>-<DD>"]).unwrap();
    /// assert_eq!("2025", version.series(Some(Level::Major)));
    /// assert_eq!("2025-07", version.series(Some(Level::Minor)));
    /// assert_eq!("2025-07-14", version.series(Some(Level::Micro)));
    /// assert_eq!("2025-07-14", version.series(Some(Level::Modifier)));
    /// assert_eq!("2025-07-14", version.series(None));
    /// ```
    pub fn series(&self, level: Option<Level>) -> String {
        let tokens = tokenize(&self.format_string);
        let end = level.and_then(|level| {
            tokens
                .iter()
                .rposition(|token| {
                    matches!(token, FormatToken::Specifier(spec) if spec.level() == level)
                })
                .map(|idx| idx + 1)
        });
        self.render(&tokens[..end.unwrap_or(tokens.len())])
    }

    /// Like [`Version::series`], but takes the level by name (`"major"`, `"Minor"`, ...). Empty
    /// or unrecognized names return the whole version string.
    pub fn series_named(&self, level_name: &str) -> String {
        self.series(level_name.parse().ok())
    }

    /// Returns a new version with the value for `level` incremented by one, keeping its
    /// zero-padding width (see [`increment_padded`]). If `level` is not set, the new version is
    /// the same as this one.
    ///
    /// Note that the incremented value is not re-validated against the format. For example,
    /// incrementing the `<0M>` value `99` gives `100`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::NotANumber`] if the value is not made of digits. Only possible for
    ///   `<MODIFIER>` values.
    pub fn increment(&self, level: Level) -> Result<Self, VersionError> {
        let mut values = self.values.clone();
        if let Some(value) = &mut values[level.index()] {
            *value = increment_padded(value)?;
        }
        Ok(Self::new(self.format_string.clone(), values))
    }
}

impl Display for Version {
    /// Writes the version string: the format string with every specifier replaced by its value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&tokenize(&self.format_string)))
    }
}

/// Adds one to a string of decimal digits, keeping its width. The result only grows when the
/// addition carries out of the leftmost digit.
///
/// An empty string is returned unchanged. Signs are not digits: `-1` and `+1` are rejected, even
/// though [`Version::compare`](crate::Version::compare) reads them as integers.
///
/// # Example
///
/// ```
/// use calver::increment_padded;
///
/// assert_eq!(Ok("02".to_string()), increment_padded("01"));
/// assert_eq!(Ok("100".to_string()), increment_padded("099"));
/// assert_eq!(Ok("1000".to_string()), increment_padded("999"));
/// assert_eq!(Ok("".to_string()), increment_padded(""));
/// assert!(increment_padded("abc").is_err());
/// assert!(increment_padded("+1").is_err());
/// ```
///
/// # Errors
///
/// - [`VersionError::NotANumber`] if `value` contains anything but ASCII digits.
pub fn increment_padded(value: &str) -> Result<String, VersionError> {
    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(VersionError::NotANumber {
            value: value.to_owned(),
        });
    }

    let mut digits = value.as_bytes().to_vec();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry && !digits.is_empty() {
        digits.insert(0, b'1');
    }

    Ok(digits.into_iter().map(char::from).collect())
}
