use crate::{
    compare::CompareMode,
    error::{CompositeError, VersionError},
    format_set::FormatSet,
    version::Version,
};
use core::ops::Deref;

/// A sortable list of [`Version`]s parsed against the same [`FormatSet`].
///
/// # Example
///
/// ```
/// use calver::prelude::*;
///
/// let mut collection = Collection::parse(
///     ["2025-07-15", "2024-12-01", "2025-07-14"],
///     ["<YYYY>-<0M>-<0D>"],
/// )
/// .unwrap();
/// collection.sort();
/// let sorted: Vec<String> = collection.iter().map(|v| v.to_string()).collect();
/// assert_eq!(vec!["2024-12-01", "2025-07-14", "2025-07-15"], sorted);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collection {
    versions: Vec<Version>,
}

impl Collection {
    /// Parses every version string with `formats`, in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// - [`VersionError::InvalidEntry`] naming the index and text of the first version string
    ///   that could not be parsed.
    pub fn new<I, S>(version_strs: I, formats: &FormatSet) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let versions = version_strs
            .into_iter()
            .enumerate()
            .map(|(index, version_str)| {
                let version_str = version_str.as_ref();
                formats
                    .new_version(version_str)
                    .map_err(|err| VersionError::InvalidEntry {
                        index,
                        version_string: version_str.to_owned(),
                        source: Box::new(err),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { versions })
    }

    /// Like [`Collection::new`], but parses the format strings too.
    ///
    /// # Errors
    ///
    /// - [`CompositeError::Format`] if the format strings are invalid.
    /// - [`CompositeError::Version`] if a version string is invalid.
    pub fn parse<I, S, F, T>(version_strs: I, format_strs: F) -> Result<Self, CompositeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let formats = FormatSet::new(format_strs)?;
        Ok(Self::new(version_strs, &formats)?)
    }

    /// The number of versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Returns true if there are no versions.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Returns true if the version at `i` is less than the version at `j`, comparing leniently.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.versions[i]
            .compare_or_panic(&self.versions[j], CompareMode::Lenient)
            .is_lt()
    }

    /// Swaps the versions at `i` and `j`.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.versions.swap(i, j);
    }

    /// Sorts the versions in ascending order.
    ///
    /// Comparison is [lenient](CompareMode::Lenient), because a [`FormatSet`] can produce
    /// versions with different format strings.
    ///
    /// Mixed numeric and text modifiers (`2`, `10`, `1a`) do not compare transitively. The
    /// result is then some order where no version is less than the one before it.
    pub fn sort(&mut self) {
        // insertion sort over `less`/`swap`: unlike `slice::sort_by`, it cannot panic on a
        // comparison that is not a total order
        for i in 1..self.len() {
            let mut j = i;
            while j > 0 && self.less(j, j - 1) {
                self.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    /// Sorts the versions in ascending order using `mode`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::FormatMismatch`] in [`CompareMode::Strict`] if two versions have
    ///   different format strings. The versions are left unsorted in that case.
    pub fn sort_by_mode(&mut self, mode: CompareMode) -> Result<(), VersionError> {
        if let Some((first, rest)) = self.versions.split_first() {
            for other in rest {
                first.compare(other, mode)?;
            }
        }
        // every pair is now comparable in `mode`, and both modes agree on same-format versions
        self.sort();
        Ok(())
    }

    /// Consumes the collection, returning the versions.
    pub fn into_vec(self) -> Vec<Version> {
        self.versions
    }
}

impl Deref for Collection {
    type Target = [Version];

    fn deref(&self) -> &Self::Target {
        &self.versions
    }
}

impl IntoIterator for Collection {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Version;
    type IntoIter = core::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}
