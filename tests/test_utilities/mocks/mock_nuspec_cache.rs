use nuget_license_report::prelude::*;
use std::collections::HashMap;

/// Mock NuspecCache backed by an in-memory map
#[derive(Default)]
pub struct MockNuspecCache {
    pub nuspecs: HashMap<String, String>,
}

impl MockNuspecCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nuspec(mut self, name: &str, version: &str, content: &str) -> Self {
        self.nuspecs
            .insert(format!("{}@{}", name, version), content.to_string());
        self
    }
}

impl NuspecCache for MockNuspecCache {
    fn read_cached_nuspec(&self, name: &str, version: &str) -> Result<Option<String>> {
        Ok(self.nuspecs.get(&format!("{}@{}", name, version)).cloned())
    }
}
