/// Network adapters for external API calls
mod nuget_client;

pub use nuget_client::{
    NuGetRegistryClient, DEFAULT_FLAT_CONTAINER_URL, DEFAULT_PACKAGE_DOWNLOAD_URL,
};
