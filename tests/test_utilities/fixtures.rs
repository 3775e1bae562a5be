//! On-disk solution layouts and package manifests for tests

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const PROJECT_TYPE_GUID: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";

/// Writes `<dir>/<name>.sln` referencing each project as `<Project>\<Project>.csproj`
pub fn write_solution(dir: &Path, name: &str, projects: &[&str]) -> PathBuf {
    let mut content = String::from(
        "\u{feff}\nMicrosoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio Version 17\n",
    );
    for (idx, project) in projects.iter().enumerate() {
        content.push_str(&format!(
            "Project(\"{}\") = \"{}\", \"{}\\{}.csproj\", \"{{00000000-0000-0000-0000-{:012}}}\"\nEndProject\n",
            PROJECT_TYPE_GUID, project, project, project, idx
        ));
    }
    content.push_str("Global\nEndGlobal\n");

    let path = dir.join(format!("{}.sln", name));
    fs::write(&path, content).unwrap();
    path
}

/// Writes an SDK-style project with one PackageReference per `(name, version)`
pub fn write_sdk_project(dir: &Path, project: &str, references: &[(&str, &str)]) -> PathBuf {
    let items: String = references
        .iter()
        .map(|(name, version)| {
            format!(
                "    <PackageReference Include=\"{}\" Version=\"{}\" />\n",
                name, version
            )
        })
        .collect();
    let content = format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n  <ItemGroup>\n{}  </ItemGroup>\n</Project>\n",
        items
    );
    write_project_file(dir, project, &content)
}

/// Writes a legacy project with its references in `packages.config`
pub fn write_legacy_project(dir: &Path, project: &str, references: &[(&str, &str)]) -> PathBuf {
    let path = write_project_file(
        dir,
        project,
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Reference Include="System" />
  </ItemGroup>
</Project>
"#,
    );

    let packages: String = references
        .iter()
        .map(|(name, version)| {
            format!(
                "  <package id=\"{}\" version=\"{}\" targetFramework=\"net48\" />\n",
                name, version
            )
        })
        .collect();
    fs::write(
        dir.join(project).join("packages.config"),
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n{}</packages>\n",
            packages
        ),
    )
    .unwrap();

    path
}

fn write_project_file(dir: &Path, project: &str, content: &str) -> PathBuf {
    let project_dir = dir.join(project);
    fs::create_dir_all(&project_dir).unwrap();
    let path = project_dir.join(format!("{}.csproj", project));
    fs::write(&path, content).unwrap();
    path
}

/// A nuspec declaring a license expression and URL
pub fn nuspec(name: &str, license_type: &str, license_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>{}</id>
    <license type="{}">MIT</license>
    <licenseUrl>{}</licenseUrl>
  </metadata>
</package>
"#,
        name, license_type, license_url
    )
}

/// An in-memory `.nupkg` with the given root-level entries
pub fn nupkg(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
