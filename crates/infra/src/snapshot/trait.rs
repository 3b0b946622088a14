use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use alyomi_catalog::Product;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("snapshot root must be an array, found {0}")]
    NotAnArray(&'static str),
}

/// Supplier of the full product collection.
///
/// Implementations return every product in snapshot order; the catalog never
/// asks a source for a subset.
pub trait ProductSource: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, SnapshotError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    fn load(&self) -> Result<Vec<Product>, SnapshotError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
