//! Local snapshot storage.

pub mod snapshot_json;

pub use snapshot_json::SnapshotFileSource;
