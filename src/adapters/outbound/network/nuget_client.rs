use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Default flat-container endpoint serving individual `.nuspec` files
pub const DEFAULT_FLAT_CONTAINER_URL: &str = "https://api.nuget.org/v3-flatcontainer/";

/// Default V2 endpoint serving complete `.nupkg` archives
pub const DEFAULT_PACKAGE_DOWNLOAD_URL: &str = "https://www.nuget.org/api/v2/package/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
const MAX_REDIRECTS: usize = 5;

/// NuGetRegistryClient adapter for the public NuGet endpoints
///
/// Owns one `reqwest::Client` configured at construction: at most 5
/// redirects, a 1 second timeout per request, no cookie store, and server
/// certificates accepted without validation.
pub struct NuGetRegistryClient {
    client: reqwest::Client,
    flat_container_url: String,
    package_download_url: String,
}

impl NuGetRegistryClient {
    /// Creates a client for the nuget.org endpoints
    pub fn new() -> Result<Self> {
        Self::with_endpoints(DEFAULT_FLAT_CONTAINER_URL, DEFAULT_PACKAGE_DOWNLOAD_URL)
    }

    /// Creates a client for alternative endpoints (mirrors, private feeds)
    ///
    /// A trailing `/` is added to either base URL when missing.
    pub fn with_endpoints(flat_container_url: &str, package_download_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nuget-license-report/{}", version);
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            flat_container_url: with_trailing_slash(flat_container_url),
            package_download_url: with_trailing_slash(package_download_url),
        })
    }

    /// URL of the `.nuspec` on the flat container
    ///
    /// The flat container only serves lowercase ids and versions.
    pub fn nuspec_url(&self, package_name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(package_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;

        let name = urlencoding::encode(&package_name.to_lowercase()).into_owned();
        let version = urlencoding::encode(&version.to_lowercase()).into_owned();

        Ok(format!(
            "{}{}/{}/{}.nuspec",
            self.flat_container_url, name, version, name
        ))
    }

    /// URL of the `.nupkg` download
    pub fn package_url(&self, package_name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(package_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;

        Ok(format!(
            "{}{}/{}",
            self.package_download_url,
            urlencoding::encode(package_name),
            urlencoding::encode(version)
        ))
    }

    /// Rejects name or version values that would change the URL's structure
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.trim().is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("{} failed due to {}!", url, response.status());
        }

        Ok(response)
    }
}

#[async_trait]
impl PackageRegistry for NuGetRegistryClient {
    async fn fetch_nuspec(&self, package_name: &str, version: &str) -> Result<String> {
        let url = self.nuspec_url(package_name, version)?;
        let response = self.get(&url).await?;
        Ok(response.text().await?)
    }

    async fn fetch_package_archive(&self, package_name: &str, version: &str) -> Result<Vec<u8>> {
        let url = self.package_url(package_name, version)?;
        let response = self.get(&url).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
