//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{catalog::ReleaseStep, models::Release};

/// Newtype wrapper for displaying a release listing.
///
/// Keeps the order it was given, which for store listings is due date
/// descending, then ID descending.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use liftoff_core::{display::Releases, models::Release};
///
/// let release = Release {
///     id: 1,
///     name: "v1.2.0".to_string(),
///     due_date: Timestamp::now(),
///     additional_info: None,
///     completed_step_ids: vec![],
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
/// let output = Releases(vec![release]).to_string();
/// assert!(output.contains("## v1.2.0 (ID: 1) [planned 0/8]"));
/// ```
pub struct Releases(pub Vec<Release>);

impl Releases {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of releases in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the release at the given index.
    pub fn get(&self, index: usize) -> Option<&Release> {
        self.0.get(index)
    }

    /// Get an iterator over the releases.
    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.0.iter()
    }
}

impl Index<usize> for Releases {
    type Output = Release;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Releases {
    type Item = Release;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Releases {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Releases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No releases found.")
        } else {
            for release in &self.0 {
                release.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the checklist catalog.
pub struct StepCatalog(pub &'static [ReleaseStep]);

impl fmt::Display for StepCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.0.iter().enumerate() {
            writeln!(f, "{}. {step}", position + 1)?;
        }
        Ok(())
    }
}
