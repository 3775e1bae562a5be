/// Project file extensions recognised in a solution file
const SUPPORTED_PROJECT_EXTENSIONS: [&str; 2] = [".csproj", ".fsproj"];

/// SolutionParser - extracts project file paths from a `.sln` manifest
///
/// A project entry looks like:
///
/// ```text
/// Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "src\App\App.csproj", "{GUID}"
/// ```
///
/// Every comma-separated segment of a `Project` line is unquoted and kept
/// when it ends with a supported project extension. Solution folders and
/// other project kinds are skipped.
pub struct SolutionParser;

impl SolutionParser {
    /// Returns project paths in file order, with `\` normalised to `/`
    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| line.starts_with("Project"))
            .flat_map(Self::project_paths_in_line)
            .collect()
    }

    fn project_paths_in_line(line: &str) -> Vec<String> {
        let segments: Vec<&str> = line.split(',').collect();
        if segments.len() < 2 {
            return Vec::new();
        }

        segments
            .into_iter()
            .map(|segment| segment.trim().trim_matches('"').trim())
            .filter(|value| Self::is_project_path(value))
            .map(|value| value.replace('\\', "/"))
            .collect()
    }

    fn is_project_path(value: &str) -> bool {
        SUPPORTED_PROJECT_EXTENSIONS
            .iter()
            .any(|extension| value.ends_with(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17.0.31903.59
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "src\App\App.csproj", "{0B1C1F4E-1111-4C1B-9F0B-000000000001}"
EndProject
Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "src", "src", "{0B1C1F4E-1111-4C1B-9F0B-000000000002}"
EndProject
Project("{F2A71F9B-5D33-465A-A702-920D77279786}") = "Core", "src/Core/Core.fsproj", "{0B1C1F4E-1111-4C1B-9F0B-000000000003}"
EndProject
Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "App.Tests", "tests\App.Tests\App.Tests.csproj", "{0B1C1F4E-1111-4C1B-9F0B-000000000004}"
EndProject
Global
EndGlobal
"#;

    #[test]
    fn test_parse_extracts_projects_in_order() {
        let projects = SolutionParser::parse(SOLUTION);
        assert_eq!(
            projects,
            vec![
                "src/App/App.csproj".to_string(),
                "src/Core/Core.fsproj".to_string(),
                "tests/App.Tests/App.Tests.csproj".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_skips_solution_folders() {
        let projects = SolutionParser::parse(SOLUTION);
        assert!(projects.iter().all(|p| p != "src"));
    }

    #[test]
    fn test_parse_ignores_other_project_kinds() {
        let content = r#"Project("{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}") = "Native", "native\Native.vcxproj", "{GUID}""#;
        assert!(SolutionParser::parse(content).is_empty());
    }

    #[test]
    fn test_parse_ignores_lines_not_starting_with_project() {
        let content = r#"  Project("{X}") = "App", "App.csproj", "{GUID}"
# "App", "Other.csproj""#;
        assert!(SolutionParser::parse(content).is_empty());
    }

    #[test]
    fn test_parse_requires_comma_separated_segments() {
        let content = "Project App.csproj";
        assert!(SolutionParser::parse(content).is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(SolutionParser::parse("").is_empty());
    }
}
