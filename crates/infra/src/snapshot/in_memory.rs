use alyomi_catalog::Product;

use super::r#trait::{ProductSource, SnapshotError};

/// Snapshot held in memory as JSON text (embedded fixtures, tests).
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    json: String,
}

impl InMemorySource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl ProductSource for InMemorySource {
    fn load(&self) -> Result<Vec<Product>, SnapshotError> {
        super::parse_snapshot(&self.json)
    }

    fn describe(&self) -> String {
        format!("in-memory snapshot ({} bytes)", self.json.len())
    }
}
