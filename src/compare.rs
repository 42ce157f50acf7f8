use crate::{error::VersionError, specifier::Level, version::Version};
use core::cmp::Ordering;

/// How to treat versions that were parsed with different format strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareMode {
    /// Refuse to compare versions whose format strings differ, returning
    /// [`VersionError::FormatMismatch`].
    #[default]
    Strict,

    /// Compare values only, whatever format strings they came from.
    Lenient,
}

/// Compares two values of the same level. An unset value is less than any set value. Set values
/// compare as integers when both are integers, and as strings otherwise.
fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) if a == b => Ordering::Equal,
        (Some(a), Some(b)) => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => a.cmp(b),
        },
    }
}

impl Version {
    /// Compares this version to `other`.
    ///
    /// Levels are compared from most to least significant (major, minor, micro, modifier) and
    /// the first difference decides:
    ///
    /// - A level unset on both sides is skipped.
    /// - A level unset on one side is less than the same level set on the other.
    /// - Values that both parse as integers compare numerically, so `07` equals `7` and `10` is
    ///   greater than `9`. Anything else, typically a modifier like `alpha`, compares as a
    ///   string.
    ///
    /// # Example
    ///
    /// ```
    /// use calver::prelude::*;
    /// use std::cmp::Ordering;
    ///
    /// let formats = FormatSet::new(["<YYYY>-<MM>-<DD>"]).unwrap();
    /// let a = formats.new_version("2025-07-14").unwrap();
    /// let b = formats.new_version("2025-07-15").unwrap();
    /// assert_eq!(Ok(Ordering::Less), a.compare(&b, CompareMode::Strict));
    ///
    /// let c = Version::parse("2025.07.16", ["<YYYY>.<MM>.<DD>"]).unwrap();
    /// assert!(b.compare(&c, CompareMode::Strict).is_err());
    /// assert_eq!(Ok(Ordering::Less), b.compare(&c, CompareMode::Lenient));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`VersionError::FormatMismatch`] in [`CompareMode::Strict`] if the format strings
    ///   differ.
    pub fn compare(&self, other: &Self, mode: CompareMode) -> Result<Ordering, VersionError> {
        if mode == CompareMode::Strict && self.format_string() != other.format_string() {
            return Err(VersionError::FormatMismatch {
                format_a: self.format_string().to_owned(),
                format_b: other.format_string().to_owned(),
            });
        }

        Ok(Level::ALL
            .into_iter()
            .map(|level| compare_values(self.value(level), other.value(level)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal))
    }

    /// [`Version::compare`], but panics on error.
    ///
    /// # Panics
    ///
    /// If [`Version::compare`] returns an error.
    pub fn compare_or_panic(&self, other: &Self, mode: CompareMode) -> Ordering {
        self.compare(other, mode).unwrap_or_else(|err| panic!("{err}"))
    }

    fn check(
        &self,
        other: &Self,
        mode: CompareMode,
        pred: fn(Ordering) -> bool,
    ) -> Result<bool, VersionError> {
        self.compare(other, mode).map(pred)
    }

    fn check_or_panic(&self, other: &Self, mode: CompareMode, pred: fn(Ordering) -> bool) -> bool {
        pred(self.compare_or_panic(other, mode))
    }

    /// Returns whether this version is equal to `other`. See [`Version::compare`].
    pub fn equal(&self, other: &Self, mode: CompareMode) -> Result<bool, VersionError> {
        self.check(other, mode, Ordering::is_eq)
    }

    /// [`Version::equal`], but panics on error.
    pub fn equal_or_panic(&self, other: &Self, mode: CompareMode) -> bool {
        self.check_or_panic(other, mode, Ordering::is_eq)
    }

    /// Returns whether this version is less than `other`. See [`Version::compare`].
    pub fn less_than(&self, other: &Self, mode: CompareMode) -> Result<bool, VersionError> {
        self.check(other, mode, Ordering::is_lt)
    }

    /// [`Version::less_than`], but panics on error.
    pub fn less_than_or_panic(&self, other: &Self, mode: CompareMode) -> bool {
        self.check_or_panic(other, mode, Ordering::is_lt)
    }

    /// Returns whether this version is greater than `other`. See [`Version::compare`].
    pub fn greater_than(&self, other: &Self, mode: CompareMode) -> Result<bool, VersionError> {
        self.check(other, mode, Ordering::is_gt)
    }

    /// [`Version::greater_than`], but panics on error.
    pub fn greater_than_or_panic(&self, other: &Self, mode: CompareMode) -> bool {
        self.check_or_panic(other, mode, Ordering::is_gt)
    }

    /// Returns whether this version is less than or equal to `other`. See [`Version::compare`].
    pub fn less_than_or_equal(
        &self,
        other: &Self,
        mode: CompareMode,
    ) -> Result<bool, VersionError> {
        self.check(other, mode, Ordering::is_le)
    }

    /// [`Version::less_than_or_equal`], but panics on error.
    pub fn less_than_or_equal_or_panic(&self, other: &Self, mode: CompareMode) -> bool {
        self.check_or_panic(other, mode, Ordering::is_le)
    }

    /// Returns whether this version is greater than or equal to `other`. See
    /// [`Version::compare`].
    pub fn greater_than_or_equal(
        &self,
        other: &Self,
        mode: CompareMode,
    ) -> Result<bool, VersionError> {
        self.check(other, mode, Ordering::is_ge)
    }

    /// [`Version::greater_than_or_equal`], but panics on error.
    pub fn greater_than_or_equal_or_panic(&self, other: &Self, mode: CompareMode) -> bool {
        self.check_or_panic(other, mode, Ordering::is_ge)
    }
}

impl PartialOrd for Version {
    /// Compares two versions in [`CompareMode::Strict`]. This is only a partial ordering: versions
    /// from different format strings return `None`, so every comparison operator between them is
    /// `false`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other, CompareMode::Strict).ok()
    }
}

impl PartialEq for Version {
    /// Consistent with [`PartialOrd`]: `07` and `7` are equal values for `<MM>`.
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatSet;
    use itertools::Itertools;
    use rstest::rstest;

    fn version(format_str: &str, version_str: &str) -> Version {
        Version::parse(version_str, [format_str]).unwrap()
    }

    #[rstest]
    #[case("<YYYY>-R<DD>", "2025-R1", "2025-R2", Ordering::Less)]
    #[case("<YYYY>-<MM>-<DD>", "2025-07-14", "2025-07-15", Ordering::Less)]
    #[case("<YYYY>-<MM>-<DD>", "2025-07-14", "2025-07-14", Ordering::Equal)]
    #[case("<YYYY>-<MM>-<DD>", "2025-07-16", "2025-07-14", Ordering::Greater)]
    #[case("<YYYY>-<MM>-<DD>", "2025-07-16", "2020-07-14", Ordering::Greater)]
    #[case("<YYYY>-<MM>-<DD>", "2025-7-14", "2025-07-14", Ordering::Equal)]
    #[case("<YYYY>-<MM>-<DD>", "2025-9-14", "2025-10-01", Ordering::Less)]
    #[case("<YYYY>.<MM>.<DD>", "2020.06.16", "2020.07.14", Ordering::Less)]
    #[case("<YYYY>-WW<DD>", "2025-WW14", "2025-WW15", Ordering::Less)]
    #[case(
        "RELEASE.<YYYY>-<0M>-<0D>T<MODIFIER>Z",
        "RELEASE.2025-07-23T15-54-02Z",
        "RELEASE.2025-07-22T15-54-02Z",
        Ordering::Greater
    )]
    #[case(
        "RELEASE.<YYYY>-<0M>-<0D>T<MODIFIER>Z",
        "RELEASE.2025-07-23T15-54-02Z",
        "RELEASE.2025-07-23T15-54-02Z",
        Ordering::Equal
    )]
    #[case(
        "RELEASE.<YYYY>-<0M>-<0D>T<MODIFIER>Z",
        "RELEASE.2025-07-23T15-54-02Z",
        "RELEASE.2025-07-23T15-54-03Z",
        Ordering::Less
    )]
    #[case(
        "<MAJOR>-<MINOR>-<MICRO>T<MODIFIER>Z",
        "2025-07-23T14-54-02Z",
        "2025-07-23T15-54-02Z",
        Ordering::Less
    )]
    #[case("<YYYY><MM><DD>", "20260723", "20250724", Ordering::Greater)]
    #[case("<YYYY>-alpha.<MODIFIER>", "2025-alpha.2", "2025-alpha.1", Ordering::Greater)]
    #[case("<YYYY>-alpha.<MODIFIER>", "2025-alpha.10", "2025-alpha.9", Ordering::Greater)]
    #[case("<YYYY>-foobar.<MODIFIER>", "2025-foobar.alpha", "2025-foobar.beta", Ordering::Less)]
    // one side numeric, the other not: string comparison
    #[case("<YYYY>-<MODIFIER>", "2025-10", "2025-9a", Ordering::Less)]
    // set but empty modifier sorts before any non-empty one
    #[case("<YYYY>.<MODIFIER>", "2025.", "2025.0", Ordering::Less)]
    fn test_compare(
        #[case] format_str: &str,
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let a = version(format_str, a);
        let b = version(format_str, b);
        assert_eq!(Ok(expected), a.compare(&b, CompareMode::Strict));
        assert_eq!(Ok(expected.reverse()), b.compare(&a, CompareMode::Strict));
        assert_eq!(Ok(expected), a.compare(&b, CompareMode::Lenient));
        assert_eq!(Some(expected), a.partial_cmp(&b));
    }

    #[rstest]
    #[case(None, None, Ordering::Equal)]
    #[case(None, Some(""), Ordering::Less)]
    #[case(Some("0"), None, Ordering::Greater)]
    #[case(Some("007"), Some("7"), Ordering::Equal)]
    #[case(Some("-1"), Some("0"), Ordering::Less)]
    #[case(Some("99999999999999999999"), Some("1"), Ordering::Greater)]
    #[case(Some("alpha"), Some("beta"), Ordering::Less)]
    #[case(Some("2"), Some("10a"), Ordering::Greater)]
    fn test_compare_values(
        #[case] a: Option<&str>,
        #[case] b: Option<&str>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(expected, compare_values(a, b));
    }

    #[test]
    fn test_unset_on_both_sides_is_skipped() {
        // minor and micro are unset in both, so the modifier decides
        let a = version("<YYYY>-<MODIFIER>", "2025-1");
        let b = version("<YYYY>-<MODIFIER>", "2025-2");
        assert_eq!(Ok(Ordering::Less), a.compare(&b, CompareMode::Strict));
    }

    #[test]
    fn test_unset_on_one_side_is_less() {
        let a = version("<YYYY>", "2025");
        let b = version("<YYYY>.<MM>", "2025.1");
        assert_eq!(Ok(Ordering::Less), a.compare(&b, CompareMode::Lenient));
        assert_eq!(Ok(Ordering::Greater), b.compare(&a, CompareMode::Lenient));
    }

    #[test]
    fn test_strict_format_mismatch() {
        let a = version("<YYYY>-<MM>-<DD>", "2025-07-14");
        let b = version("<YYYY>.<MM>.<DD>", "2025.07.14");
        let err = VersionError::FormatMismatch {
            format_a: "<YYYY>-<MM>-<DD>".to_string(),
            format_b: "<YYYY>.<MM>.<DD>".to_string(),
        };
        assert_eq!(Err(err.clone()), a.compare(&b, CompareMode::Strict));
        assert_eq!(Err(err.clone()), a.equal(&b, CompareMode::Strict));
        assert_eq!(Err(err.clone()), a.less_than(&b, CompareMode::Strict));
        assert_eq!(Err(err), a.greater_than_or_equal(&b, CompareMode::Strict));
        assert_eq!(Ok(Ordering::Equal), a.compare(&b, CompareMode::Lenient));
        assert_eq!(Ok(true), a.equal(&b, CompareMode::Lenient));

        assert_eq!(None, a.partial_cmp(&b));
        assert!(a != b);
        assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
    }

    #[test]
    fn test_default_mode_is_strict() {
        assert_eq!(CompareMode::Strict, CompareMode::default());
    }

    #[test]
    fn test_predicates() {
        let a = version("<YYYY>.<0M>", "2025.01");
        let b = version("<YYYY>.<0M>", "2025.02");
        let mode = CompareMode::Strict;

        assert_eq!(Ok(false), a.equal(&b, mode));
        assert_eq!(Ok(true), a.less_than(&b, mode));
        assert_eq!(Ok(false), a.greater_than(&b, mode));
        assert_eq!(Ok(true), a.less_than_or_equal(&b, mode));
        assert_eq!(Ok(false), a.greater_than_or_equal(&b, mode));
        assert_eq!(Ok(true), a.less_than_or_equal(&a, mode));
        assert_eq!(Ok(true), a.greater_than_or_equal(&a, mode));

        assert!(!a.equal_or_panic(&b, mode));
        assert!(a.less_than_or_panic(&b, mode));
        assert!(!a.greater_than_or_panic(&b, mode));
        assert!(a.less_than_or_equal_or_panic(&b, mode));
        assert!(!a.greater_than_or_equal_or_panic(&b, mode));
        assert_eq!(Ordering::Less, a.compare_or_panic(&b, mode));
    }

    #[test]
    #[should_panic(
        expected = "Versions from different format strings cannot be compared: `<YYYY>` and `<0Y>`"
    )]
    fn test_or_panic_panics_with_error() {
        let a = version("<YYYY>", "2025");
        let b = version("<0Y>", "25");
        a.less_than_or_panic(&b, CompareMode::Strict);
    }

    /// Exactly one of `<`, `==`, `>` holds for every pair of versions sharing a format.
    #[test]
    fn test_total_order() {
        let formats = FormatSet::new(["<0Y>.<MM>.<MICRO>-<MODIFIER>"]).unwrap();
        let versions = [
            "24.1.0-", "24.1.0-0", "24.1.0-1", "24.1.0-10", "24.1.0-alpha", "24.1.0-beta",
            "24.12.0-", "24.9.99-", "25.1.0-", "25.01.0-", "25.1.00-rc",
        ]
        .map(|v| formats.new_version(v).unwrap());

        for (a, b) in versions.iter().tuple_combinations() {
            let ab = a.compare_or_panic(b, CompareMode::Strict);
            let ba = b.compare_or_panic(a, CompareMode::Strict);
            assert_eq!(ab, ba.reverse(), "{a} vs {b}");
            let holds = [a < b, a == b, a > b];
            assert_eq!(1, holds.iter().filter(|h| **h).count(), "{a} vs {b}");
        }
    }
}
