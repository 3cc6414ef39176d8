use super::mixtape_store::{MixtapeStore, StoreError, StoreResult};
use crate::catalog::Mixtape;
use crate::changes::RawChange;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    path::{Path, PathBuf},
};
use tracing::info;

/// Reads and writes plain JSON files.
pub struct FileMixtapeStore {
    mixtape_path: PathBuf,
    changes_path: PathBuf,
    output_path: PathBuf,
}

impl FileMixtapeStore {
    pub fn new(mixtape_path: PathBuf, changes_path: PathBuf, output_path: PathBuf) -> Self {
        FileMixtapeStore {
            mixtape_path,
            changes_path,
            output_path,
        }
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
        let mut file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(path.to_owned()),
            _ => StoreError::Io {
                path: path.to_owned(),
                source: err,
            },
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| StoreError::Io {
                path: path.to_owned(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Decode {
            path: path.to_owned(),
            source,
        })
    }
}

/// Pretty JSON with 4 spaces of indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

impl MixtapeStore for FileMixtapeStore {
    fn load_mixtape(&self) -> StoreResult<Mixtape> {
        let mixtape: Mixtape = Self::read_json(&self.mixtape_path)?;
        info!(
            "Loaded mixtape from {}: {} users, {} songs, {} playlists",
            self.mixtape_path.display(),
            mixtape.get_users_count(),
            mixtape.get_songs_count(),
            mixtape.get_playlists_count()
        );
        Ok(mixtape)
    }

    fn load_changes(&self) -> StoreResult<Vec<RawChange>> {
        let changes: Vec<RawChange> = Self::read_json(&self.changes_path)?;
        info!(
            "Loaded {} changes from {}",
            changes.len(),
            self.changes_path.display()
        );
        Ok(changes)
    }

    fn save_mixtape(&self, mixtape: &Mixtape) -> StoreResult<()> {
        let json = to_pretty_json(mixtape).map_err(StoreError::Encode)?;
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.output_path.clone(),
            source,
        };
        let mut file = File::create(&self.output_path).map_err(io_err)?;
        file.write_all(&json).map_err(io_err)?;
        info!(
            "Wrote mixtape with {} playlists to {}",
            mixtape.get_playlists_count(),
            self.output_path.display()
        );
        Ok(())
    }
}
