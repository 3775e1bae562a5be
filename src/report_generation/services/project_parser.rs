use super::xml;
use crate::report_generation::domain::PackageReference;
use crate::shared::Result;
use roxmltree::Node;

/// ProjectParser - reads package references from project manifests
///
/// Two declaration styles exist:
/// - SDK-style project files list `<PackageReference>` items directly under
///   `Project/ItemGroup`, with the version either as an attribute or as a
///   `<Version>` child element.
/// - Legacy projects keep a `packages.config` side-car file with
///   `<package id=".." version=".."/>` entries under a `<packages>` root.
pub struct ProjectParser;

impl ProjectParser {
    /// Parses `Project/ItemGroup/PackageReference` items from a project file
    ///
    /// Missing names or versions become empty strings.
    ///
    /// # Errors
    /// Returns an error if the document is not well-formed XML
    pub fn parse_package_references(content: &str) -> Result<Vec<PackageReference>> {
        let document = xml::parse_document(content)?;
        let root = document.root_element();

        if !xml::is_element_named(&root, "Project") {
            return Ok(Vec::new());
        }

        let references: Vec<PackageReference> = xml::child_elements(root, "ItemGroup")
            .flat_map(|item_group| xml::child_elements(item_group, "PackageReference"))
            .map(|element| Self::reference_from_element(&element))
            .collect();

        Ok(references)
    }

    /// Parses `packages/package` entries from a legacy `packages.config`
    ///
    /// # Errors
    /// Returns an error if the document is not well-formed XML
    pub fn parse_packages_config(content: &str) -> Result<Vec<PackageReference>> {
        let document = xml::parse_document(content)?;
        let root = document.root_element();

        if !xml::is_element_named(&root, "packages") {
            return Ok(Vec::new());
        }

        let references: Vec<PackageReference> = xml::child_elements(root, "package")
            .map(|element| {
                PackageReference::new(
                    xml::attribute(&element, "id").unwrap_or_default(),
                    xml::attribute(&element, "version").unwrap_or_default(),
                )
            })
            .collect();

        Ok(references)
    }

    fn reference_from_element(element: &Node<'_, '_>) -> PackageReference {
        let name = xml::attribute(element, "Include").unwrap_or_default();

        let version = match xml::attribute(element, "Version") {
            Some(version) => version.to_string(),
            None => xml::first_child(*element, "Version")
                .map(|child| xml::text_content(&child))
                .unwrap_or_default(),
        };

        PackageReference::new(name, version)
    }
}
