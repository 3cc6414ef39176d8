mod file_mixtape_store;
mod mixtape_store;

pub use file_mixtape_store::{to_pretty_json, FileMixtapeStore};
pub use mixtape_store::{MixtapeStore, StoreError, StoreResult};
