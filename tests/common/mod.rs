//! Common test infrastructure
//!
//! Writes mixtape and changes documents into a temporary directory and runs
//! the whole load, apply, save cycle on them.

mod fixtures;

pub use fixtures::{TestDocuments, BASE_MIXTAPE};
