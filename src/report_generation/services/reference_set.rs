use crate::report_generation::domain::PackageReference;
use std::collections::HashSet;

/// ReferenceSet - de-duplication and ordering of collected package references
pub struct ReferenceSet;

impl ReferenceSet {
    /// Removes references whose name was already seen (case-insensitive)
    ///
    /// The first occurrence wins, so with several versions of one package the
    /// version from the earliest project in solution order is kept.
    pub fn deduplicate(references: Vec<PackageReference>) -> Vec<PackageReference> {
        let mut seen = HashSet::new();
        references
            .into_iter()
            .filter(|reference| seen.insert(reference.identity_key()))
            .collect()
    }

    /// Sorts by package name using ordinal string comparison (stable)
    pub fn sort_by_name(mut references: Vec<PackageReference>) -> Vec<PackageReference> {
        references.sort_by(|a, b| a.name().cmp(b.name()));
        references
    }
}
