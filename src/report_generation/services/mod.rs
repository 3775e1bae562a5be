mod nuspec_parser;
mod package_archive;
mod prefix_filter;
mod project_parser;
mod reference_set;
mod solution_parser;
mod xml;

pub use nuspec_parser::NuspecParser;
pub use package_archive::PackageArchive;
pub use prefix_filter::PrefixFilter;
pub use project_parser::ProjectParser;
pub use reference_set::ReferenceSet;
pub use solution_parser::SolutionParser;
