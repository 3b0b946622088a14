use std::path::{Path, PathBuf};

use alyomi_catalog::Product;

use super::r#trait::{ProductSource, SnapshotError};

/// Snapshot stored as a JSON file (`data/products.json` in the storefront).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>, SnapshotError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;
        super::parse_snapshot(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::load_or_empty;
    use std::io::Write;

    #[test]
    fn loads_products_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"product_id": 1, "product_title": "Plush"}}]"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let products = source.load().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title(), "Plush");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("products.json"));

        match source.load().unwrap_err() {
            SnapshotError::Io { path, .. } => assert!(path.ends_with("products.json")),
            other => panic!("Expected Io, got {other:?}"),
        }
        assert!(load_or_empty(&source).is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>not found</html>").unwrap();

        assert!(load_or_empty(&JsonFileSource::new(file.path())).is_empty());
    }
}
