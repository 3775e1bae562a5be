use crate::report_generation::domain::PackageReference;
use std::cell::RefCell;
use std::path::Path;

/// PrefixFilter - excludes projects or packages whose name starts with a prefix
///
/// Matching is case-insensitive. Projects are matched on the file name of their
/// path (e.g. `UnwantedProjA.csproj`), packages on the package name.
#[derive(Debug)]
pub struct PrefixFilter {
    prefixes: Vec<ExcludePrefix>,
}

impl PrefixFilter {
    /// Creates a filter from raw prefixes; blank entries are dropped
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .filter_map(|p| ExcludePrefix::new(p.as_ref()))
            .collect();

        Self { prefixes }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// True when `name` starts with any prefix, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        // Every prefix is evaluated so that match tracking stays accurate
        self.prefixes
            .iter()
            .map(|p| p.matches(&lowered))
            .fold(false, |any, hit| any || hit)
    }

    /// Removes project paths whose file name starts with an excluded prefix
    pub fn filter_projects(&self, projects: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return projects;
        }

        projects
            .into_iter()
            .filter(|project| !self.matches(&Self::file_name(project)))
            .collect()
    }

    /// Removes package references whose name starts with an excluded prefix
    pub fn filter_references(&self, references: Vec<PackageReference>) -> Vec<PackageReference> {
        if self.is_empty() {
            return references;
        }

        references
            .into_iter()
            .filter(|reference| !self.matches(reference.name()))
            .collect()
    }

    /// Returns the prefixes that did not exclude anything
    ///
    /// Call after filtering to identify prefixes that had no effect.
    pub fn get_unmatched_prefixes(&self) -> Vec<String> {
        self.prefixes
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }

    fn file_name(project: &str) -> String {
        Path::new(project)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| project.to_string())
    }
}

#[derive(Debug)]
struct ExcludePrefix {
    original: String,
    lowered: String,
    matched: RefCell<bool>,
}

impl ExcludePrefix {
    fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            original: trimmed.to_string(),
            lowered: trimmed.to_lowercase(),
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, lowered_name: &str) -> bool {
        let is_match = lowered_name.starts_with(&self.lowered);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<String> {
        vec![
            "src/UnwantedProjA/UnwantedProjA.csproj".to_string(),
            "src/OtherProj/OtherProj.csproj".to_string(),
            "tests/unwantedprojB/unwantedprojB.csproj".to_string(),
        ]
    }

    #[test]
    fn test_filter_projects_by_file_name() {
        let filter = PrefixFilter::new(["UnwantedProj"]);
        let result = filter.filter_projects(projects());
        assert_eq!(result, vec!["src/OtherProj/OtherProj.csproj".to_string()]);
    }

    #[test]
    fn test_filter_projects_ignores_directory_names() {
        let filter = PrefixFilter::new(["src"]);
        let result = filter.filter_projects(projects());
        assert_eq!(result.len(), 3);
        assert_eq!(filter.get_unmatched_prefixes(), vec!["src".to_string()]);
    }

    #[test]
    fn test_empty_filter_passes_through() {
        let filter = PrefixFilter::new(Vec::<String>::new());
        assert!(filter.is_empty());
        assert_eq!(filter.filter_projects(projects()), projects());
    }

    #[test]
    fn test_blank_prefixes_are_ignored() {
        let filter = PrefixFilter::new(["", "   "]);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_references_case_insensitive() {
        let filter = PrefixFilter::new(["Unwanted"]);
        let references = vec![
            PackageReference::new("UnwantedLib", "1.0.0"),
            PackageReference::new("unwanted.Other", "2.0.0"),
            PackageReference::new("Serilog", "3.1.1"),
        ];

        let result = filter.filter_references(references);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Serilog");
    }

    #[test]
    fn test_unmatched_prefixes_reported() {
        let filter = PrefixFilter::new(["Serilog", "Moq"]);
        let references = vec![PackageReference::new("Serilog.Sinks.Console", "5.0.0")];

        let result = filter.filter_references(references);
        assert!(result.is_empty());
        assert_eq!(filter.get_unmatched_prefixes(), vec!["Moq".to_string()]);
    }

    #[test]
    fn test_overlapping_prefixes_all_marked_matched() {
        let filter = PrefixFilter::new(["Microsoft.", "Microsoft.Extensions"]);
        assert!(filter.matches("Microsoft.Extensions.Logging"));
        assert!(filter.get_unmatched_prefixes().is_empty());
    }
}
