use async_trait::async_trait;
use nuget_license_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PackageRegistry serving canned manifests and archives
///
/// Every request is recorded as `nuspec:<name>@<version>` or
/// `package:<name>@<version>` so tests can assert which tiers were hit.
#[derive(Default, Clone)]
pub struct MockPackageRegistry {
    pub nuspecs: HashMap<String, String>,
    pub archives: HashMap<String, Vec<u8>>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nuspec(mut self, name: &str, version: &str, content: &str) -> Self {
        self.nuspecs
            .insert(format!("{}@{}", name, version), content.to_string());
        self
    }

    pub fn with_archive(mut self, name: &str, version: &str, bytes: Vec<u8>) -> Self {
        self.archives.insert(format!("{}@{}", name, version), bytes);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn fetch_nuspec(&self, name: &str, version: &str) -> Result<String> {
        let key = format!("{}@{}", name, version);
        self.requests
            .lock()
            .unwrap()
            .push(format!("nuspec:{}", key));
        self.nuspecs
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("nuspec for {} failed due to 404 Not Found!", key))
    }

    async fn fetch_package_archive(&self, name: &str, version: &str) -> Result<Vec<u8>> {
        let key = format!("{}@{}", name, version);
        self.requests
            .lock()
            .unwrap()
            .push(format!("package:{}", key));
        self.archives
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("package {} failed due to 404 Not Found!", key))
    }
}
