use super::xml;
use crate::report_generation::domain::LicenseInfo;
use crate::shared::Result;

/// NuspecParser - extracts license fields from a NuGet package manifest
///
/// Reads `package/metadata/license/@type` and `package/metadata/licenseUrl`.
/// Element lookup is by local name only, so the nuspec schema namespace
/// (2010/07, 2011/08, 2013/05, ...) does not matter.
pub struct NuspecParser;

impl NuspecParser {
    /// Parses nuspec XML into license information
    ///
    /// Blank values are treated as absent.
    ///
    /// # Errors
    /// Returns an error if the text is not well-formed XML or the root
    /// element is not `package`
    pub fn parse(content: &str) -> Result<LicenseInfo> {
        let document = xml::parse_document(content)?;
        let root = document.root_element();

        if !xml::is_element_named(&root, "package") {
            anyhow::bail!(
                "Expected a <package> root element, found <{}>",
                root.tag_name().name()
            );
        }

        let Some(metadata) = xml::first_child(root, "metadata") else {
            return Ok(LicenseInfo::default());
        };

        let license_type = xml::first_child(metadata, "license")
            .and_then(|license| xml::attribute(&license, "type"))
            .and_then(non_blank);

        let license_url = xml::first_child(metadata, "licenseUrl")
            .map(|url| xml::text_content(&url))
            .and_then(|url| non_blank(&url));

        Ok(LicenseInfo::new(license_type, license_url))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
