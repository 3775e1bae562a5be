use crate::ports::outbound::ReportFormatter;
use crate::report_generation::domain::PackageReference;
use crate::shared::Result;

/// Stylesheet referenced by absolute URL so the report is a single file
const STYLESHEET_URL: &str = "https://maxcdn.bootstrapcdn.com/bootstrap/4.0.0/css/bootstrap.min.css";

/// Subresource integrity hash of the stylesheet above
const STYLESHEET_INTEGRITY: &str =
    "sha384-Gn5384xqQ1aoWXA+058RXPxPg6fy4IWvTNh0E263XmFcJlSAwiGgFAW/dAiS6JXm";

const REPORT_TITLE: &str = "Third party Licenses";

/// HtmlFormatter adapter rendering the license table as an HTML page
///
/// One `<tr>` per package with Name, Version, License Type and License Url
/// columns. The URL becomes a hyperlink only when one is known. Every value
/// is HTML-escaped before interpolation.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes the characters that are significant in HTML text and attributes
    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                other => escaped.push(other),
            }
        }
        escaped
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_head(&self, output: &mut String) {
        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", REPORT_TITLE));
        output.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\" integrity=\"{}\" crossorigin=\"anonymous\">\n",
            STYLESHEET_URL, STYLESHEET_INTEGRITY
        ));
        output.push_str("</head>\n");
    }

    fn render_table_header(&self, output: &mut String) {
        output.push_str("<table class=\"table table-striped\">\n");
        output.push_str("<thead class=\"thead-dark\">\n<tr>\n");
        for column in ["Name", "Version", "License Type", "License Url"] {
            output.push_str(&format!("<th scope=\"col\">{}</th>\n", column));
        }
        output.push_str("</tr>\n</thead>\n");
    }

    fn render_row(&self, output: &mut String, package: &PackageReference) {
        let license_type = package.license_type().map(Self::escape_html).unwrap_or_default();
        let license_url = package
            .license_url()
            .map(|url| {
                let escaped = Self::escape_html(url);
                format!("<a href=\"{}\">{}</a>", escaped, escaped)
            })
            .unwrap_or_default();

        output.push_str("<tr>\n");
        output.push_str(&format!("<td>{}</td>\n", Self::escape_html(package.name())));
        output.push_str(&format!("<td>{}</td>\n", Self::escape_html(package.version())));
        output.push_str(&format!("<td>{}</td>\n", license_type));
        output.push_str(&format!("<td>{}</td>\n", license_url));
        output.push_str("</tr>\n");
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, packages: &[PackageReference]) -> Result<String> {
        let mut output = String::new();

        self.render_head(&mut output);
        output.push_str("<body>\n<div class=\"jumbotron\">\n");
        output.push_str(&format!("<h1>{}</h1>\n", REPORT_TITLE));

        self.render_table_header(&mut output);
        output.push_str("<tbody>\n");
        for package in packages {
            self.render_row(&mut output, package);
        }
        output.push_str("</tbody>\n</table>\n</div>\n</body>\n</html>\n");

        Ok(output)
    }
}
