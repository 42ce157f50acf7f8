use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// One of the four buckets every version reduces to. The declaration order is the comparison
/// precedence: `Major` is the most significant, `Modifier` the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Set by `<YYYY>`, `<YY>`, `<0Y>` or `<MAJOR>`.
    Major,
    /// Set by `<MM>`, `<0M>` or `<MINOR>`.
    Minor,
    /// Set by `<WW>`, `<0W>`, `<DD>`, `<0D>` or `<MICRO>`.
    Micro,
    /// Set by `<MODIFIER>`.
    Modifier,
}

impl Level {
    /// All levels, most significant first.
    pub const ALL: [Level; 4] = [Level::Major, Level::Minor, Level::Micro, Level::Modifier];

    /// The lowercase name of this level. Also used as the capture group name in compiled formats.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Micro => "micro",
            Level::Modifier => "modifier",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// The specifiers that belong to this level.
    pub fn specifiers(&self) -> impl Iterator<Item = &'static Specifier> + '_ {
        ALL.iter().copied().filter(move |spec| spec.level == *self)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown level `{0}`, expected one of major, minor, micro, modifier")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    /// Parses a level name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLevel(s.to_owned()))
    }
}

/// A placeholder in a format string, like `<YYYY>`. Each specifier sets exactly one [`Level`] and
/// matches its value with a fixed pattern.
#[derive(Debug, PartialEq, Eq)]
pub struct Specifier {
    /// The literal text of this specifier in a format string, angle brackets included.
    pub(crate) format_pattern: &'static str,

    /// The regex pattern used to match this specifier's value in a version string.
    pub(crate) version_pattern: &'static str,

    /// The level whose value this specifier sets.
    pub(crate) level: Level,
}

impl Specifier {
    /// Every known specifier.
    pub fn all() -> &'static [&'static Specifier] {
        ALL
    }

    /// Finds the specifier whose format pattern is exactly `pattern`, e.g. `"<0M>"`.
    pub fn lookup(pattern: &str) -> Option<&'static Specifier> {
        ALL.iter().copied().find(|spec| spec.format_pattern == pattern)
    }

    /// The text of this specifier in a format string, e.g. `<YYYY>`.
    pub fn format_pattern(&self) -> &'static str {
        self.format_pattern
    }

    /// The regex that a value for this specifier must match, without anchors or groups.
    pub fn version_pattern(&self) -> &'static str {
        self.version_pattern
    }

    /// The level this specifier sets.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns this specifier's pattern wrapped in a capture group named after its level.
    pub(crate) fn version_pattern_group(&self) -> String {
        format!("(?P<{}>{})", self.level.name(), self.version_pattern)
    }
}

impl Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_pattern)
    }
}

// ascii digits only: regex's `\d` would also accept other unicode digits
const FOUR_DIGITS: &str = "[0-9]{4}";
const TWO_DIGITS: &str = "[0-9]{2}";
const ONE_OR_TWO_DIGITS: &str = "[0-9]{1,2}";
const ANY_DIGITS: &str = "[0-9]+";
// reluctant: stops at the next literal or the end of input
const ANYTHING: &str = ".*?";

/// Full year - 2006, 2016
pub(crate) static FULL_YEAR: Specifier = Specifier {
    format_pattern: "<YYYY>",
    version_pattern: FOUR_DIGITS,
    level: Level::Major,
};

/// Short year - 6, 16
pub(crate) static SHORT_YEAR: Specifier = Specifier {
    format_pattern: "<YY>",
    version_pattern: ONE_OR_TWO_DIGITS,
    level: Level::Major,
};

/// Zero-padded year - 06, 16
pub(crate) static ZERO_PADDED_YEAR: Specifier = Specifier {
    format_pattern: "<0Y>",
    version_pattern: TWO_DIGITS,
    level: Level::Major,
};

pub(crate) static MAJOR: Specifier = Specifier {
    format_pattern: "<MAJOR>",
    version_pattern: ANY_DIGITS,
    level: Level::Major,
};

/// Short month - 1, 2 ... 11, 12
pub(crate) static SHORT_MONTH: Specifier = Specifier {
    format_pattern: "<MM>",
    version_pattern: ONE_OR_TWO_DIGITS,
    level: Level::Minor,
};

/// Zero-padded month - 01, 02 ... 11, 12
pub(crate) static ZERO_PADDED_MONTH: Specifier = Specifier {
    format_pattern: "<0M>",
    version_pattern: TWO_DIGITS,
    level: Level::Minor,
};

pub(crate) static MINOR: Specifier = Specifier {
    format_pattern: "<MINOR>",
    version_pattern: ANY_DIGITS,
    level: Level::Minor,
};

/// Short week - 1, 2, 33, 52
pub(crate) static SHORT_WEEK: Specifier = Specifier {
    format_pattern: "<WW>",
    version_pattern: ONE_OR_TWO_DIGITS,
    level: Level::Micro,
};

/// Zero-padded week - 01, 02, 33, 52
pub(crate) static ZERO_PADDED_WEEK: Specifier = Specifier {
    format_pattern: "<0W>",
    version_pattern: TWO_DIGITS,
    level: Level::Micro,
};

/// Short day - 1, 2 ... 30, 31
pub(crate) static SHORT_DAY: Specifier = Specifier {
    format_pattern: "<DD>",
    version_pattern: ONE_OR_TWO_DIGITS,
    level: Level::Micro,
};

/// Zero-padded day - 01, 02 ... 30, 31
pub(crate) static ZERO_PADDED_DAY: Specifier = Specifier {
    format_pattern: "<0D>",
    version_pattern: TWO_DIGITS,
    level: Level::Micro,
};

pub(crate) static MICRO: Specifier = Specifier {
    format_pattern: "<MICRO>",
    version_pattern: ANY_DIGITS,
    level: Level::Micro,
};

pub(crate) static MODIFIER: Specifier = Specifier {
    format_pattern: "<MODIFIER>",
    version_pattern: ANYTHING,
    level: Level::Modifier,
};

pub(crate) static ALL: &[&Specifier] = &[
    &FULL_YEAR,
    &SHORT_YEAR,
    &ZERO_PADDED_YEAR,
    &MAJOR,
    &SHORT_MONTH,
    &ZERO_PADDED_MONTH,
    &MINOR,
    &SHORT_WEEK,
    &ZERO_PADDED_WEEK,
    &SHORT_DAY,
    &ZERO_PADDED_DAY,
    &MICRO,
    &MODIFIER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("major", Ok(Level::Major))]
    #[case("MINOR", Ok(Level::Minor))]
    #[case("Micro", Ok(Level::Micro))]
    #[case("modifier", Ok(Level::Modifier))]
    #[case("", Err(UnknownLevel(String::new())))]
    #[case("patch", Err(UnknownLevel("patch".to_string())))]
    fn test_level_from_str(#[case] input: &str, #[case] expected: Result<Level, UnknownLevel>) {
        assert_eq!(expected, input.parse::<Level>());
    }

    #[test]
    fn test_level_order() {
        assert!(Level::Major < Level::Minor);
        assert!(Level::Minor < Level::Micro);
        assert!(Level::Micro < Level::Modifier);
    }

    #[test]
    fn test_specifiers_by_level() {
        let patterns = |level: Level| {
            level
                .specifiers()
                .map(|spec| spec.format_pattern())
                .collect::<Vec<_>>()
        };
        assert_eq!(vec!["<YYYY>", "<YY>", "<0Y>", "<MAJOR>"], patterns(Level::Major));
        assert_eq!(vec!["<MM>", "<0M>", "<MINOR>"], patterns(Level::Minor));
        assert_eq!(
            vec!["<WW>", "<0W>", "<DD>", "<0D>", "<MICRO>"],
            patterns(Level::Micro)
        );
        assert_eq!(vec!["<MODIFIER>"], patterns(Level::Modifier));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Some(&ZERO_PADDED_MONTH), Specifier::lookup("<0M>"));
        assert_eq!(Some(Level::Micro), Specifier::lookup("<0W>").map(Specifier::level));
        assert_eq!(None, Specifier::lookup("<YYY>"));
        assert_eq!(None, Specifier::lookup("YYYY"));
    }

    #[test]
    fn test_version_pattern_group() {
        assert_eq!("(?P<major>[0-9]{4})", FULL_YEAR.version_pattern_group());
        assert_eq!("(?P<modifier>.*?)", MODIFIER.version_pattern_group());
    }
}
