//! Mixtape Changes Library
//!
//! Applies a list of change records (new playlists, removed playlists, songs
//! added to playlists) to a mixtape JSON document.

pub mod catalog;
pub mod changes;
pub mod config;
pub mod report;
pub mod store;

pub use catalog::Mixtape;
pub use changes::{apply_changes, InvalidChangePolicy, RunSummary};
pub use config::AppConfig;
pub use report::{Reporter, StdoutReporter, VecReporter, WriteReporter};
pub use store::{FileMixtapeStore, MixtapeStore};

use anyhow::Result;

/// Loads both documents, applies the changes and saves the result.
///
/// Nothing is saved if loading fails or the run is aborted by an invalid
/// change. The final "done!" line is reported once the mixtape is saved.
pub fn run(
    store: &dyn MixtapeStore,
    policy: InvalidChangePolicy,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    let mut mixtape = store.load_mixtape()?;
    let changes = store.load_changes()?;

    let summary = apply_changes(&mut mixtape, &changes, policy, reporter)?;

    store.save_mixtape(&mixtape)?;
    reporter.report("done!");
    Ok(summary)
}

/// Same as [`run`], reading and writing the files named by the config.
pub fn run_with_config(config: &AppConfig, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    let store = FileMixtapeStore::new(
        config.mixtape_path.clone(),
        config.changes_path.clone(),
        config.output_path.clone(),
    );
    run(&store, config.on_invalid_change, reporter)
}
