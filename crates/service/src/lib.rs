//! Service layer: the shape domain model and its file-backed document store.
//! - `storage` holds the reusable JSON document collection.
//! - `shapes` wraps it with shape-specific operations.

pub mod errors;
pub mod shapes;
pub mod storage;
