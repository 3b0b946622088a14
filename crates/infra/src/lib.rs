//! Infrastructure layer: where the catalog's product snapshot comes from.

pub mod snapshot;

pub use snapshot::{
    InMemorySource, JsonFileSource, ProductSource, SnapshotError, load_or_empty, parse_snapshot,
};
