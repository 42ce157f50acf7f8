//! # calver
//!
//! A library for parsing, rendering and comparing calendar versions.
//!
//! Instead of conforming to one fixed scheme, this library lets you describe your version format
//! with [CalVer](https://calver.org/) placeholders, parse version strings against it, and then
//! render, truncate, increment, compare and sort the results.
//!
//! ## Examples
//!
//! *Below, the text in `<angle brackets>` is a specifier. See what they mean [here](#table).*
//!
//! Quickly parse and compare:
//!
//! ```
//! use calver::prelude::*;
//!
//! let a = Version::parse("Rel-2025-07-14", ["Rel-<YYYY>-<0M>-<0D>"]).unwrap();
//! let b = Version::parse("Rel-2025-07-15", ["Rel-<YYYY>-<0M>-<0D>"]).unwrap();
//! assert!(a < b);
//! assert_eq!("Rel-2025-07", a.series(Some(Level::Minor)));
//! ```
//!
//! Or, compile formats once for reuse. When several formats are given, a version string is
//! parsed with the one that extracts the most values:
//!
//! ```
//! use calver::prelude::*;
//!
//! let formats = FormatSet::new(["<YYYY>", "<YYYY>-<MM>", "<YYYY>-<MM>-<DD>"]).unwrap();
//! let version = formats.new_version("2025-07-14").unwrap();
//! assert_eq!("<YYYY>-<MM>-<DD>", version.format_string());
//!
//! let mut collection = Collection::new(["2025-07", "2024", "2025-07-01"], &formats).unwrap();
//! collection.sort();
//! assert_eq!("2024", collection[0].to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: A string that represents a specific point in a project's development, comprised
//!   of *values* and *literal text*. It's modeled by the [`Version`] struct.
//! - **Format**: A string that defines the structure of a version string. It contains
//!   *specifiers* and *literal text*. It's modeled by the [`Format`] struct.
//! - **Specifier**: A placeholder in a format that matches one value in a version. These are
//!   `<bracketed>` in a format string.
//! - **Level**: Every specifier sets one of four [`Level`]s: major, minor, micro or modifier. A
//!   format may contain at most one specifier per level. Versions are compared level by level, in
//!   that order.
//!
//! ## Specifiers
//!
//! ### Table
//!
//! | Specifier | Level | Matches | Example |
//! |---|---|---|---|
//! | `<YYYY>` | Major | exactly 4 digits | `2025` |
//! | `<YY>` | Major | 1 or 2 digits | `25`, `6` |
//! | `<0Y>` | Major | exactly 2 digits | `06` |
//! | `<MAJOR>` | Major | 1 or more digits | `1` |
//! | `<MM>` | Minor | 1 or 2 digits | `7` |
//! | `<0M>` | Minor | exactly 2 digits | `07` |
//! | `<MINOR>` | Minor | 1 or more digits | `2` |
//! | `<WW>` | Micro | 1 or 2 digits | `4` |
//! | `<0W>` | Micro | exactly 2 digits | `04` |
//! | `<DD>` | Micro | 1 or 2 digits | `3` |
//! | `<0D>` | Micro | exactly 2 digits | `03` |
//! | `<MICRO>` | Micro | 1 or more digits | `3` |
//! | `<MODIFIER>` | Modifier | any text, as little as possible | `rc.1` |
//!
//! Values are not checked to be real dates: `<MM>` accepts `13`.
//!
//! Any other text, including unknown `<BRACKETED>` text, is literal and must appear verbatim in
//! the version string.
//!
//! ## Comparison
//!
//! Values that are integers on both sides compare numerically; other values compare as strings.
//! A level missing from a version is less than any value. By default ([`CompareMode::Strict`])
//! only versions parsed with the same format string are comparable; [`CompareMode::Lenient`]
//! compares values regardless of format.
//!
//! ## Prelude
//!
//! calver provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use calver::prelude::*;
//! ```
#![warn(missing_docs)]

mod collection;
mod compare;
mod error;
mod format;
mod format_set;
mod specifier;
mod version;

pub use crate::collection::Collection;
pub use crate::compare::CompareMode;
pub use crate::error::{CompositeError, FormatError, VersionError};
pub use crate::format::Format;
pub use crate::format_set::FormatSet;
pub use crate::specifier::{Level, Specifier, UnknownLevel};
pub use crate::version::{increment_padded, Version};

/// A convenience module appropriate for glob imports (`use calver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Collection;
    #[doc(no_inline)]
    pub use crate::CompareMode;
    #[doc(no_inline)]
    pub use crate::CompositeError;
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::FormatSet;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
