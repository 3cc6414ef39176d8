use crate::catalog::Mixtape;
use crate::changes::RawChange;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Something is wrong with reading {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not encode the mixtape: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Where the mixtape and the changes come from, and where the result goes.
pub trait MixtapeStore {
    /// Loads the mixtape document the changes are applied to.
    fn load_mixtape(&self) -> StoreResult<Mixtape>;

    /// Loads the ordered list of change records.
    fn load_changes(&self) -> StoreResult<Vec<RawChange>>;

    /// Persists the (possibly modified) mixtape.
    fn save_mixtape(&self, mixtape: &Mixtape) -> StoreResult<()>;
}
