use mixtape_changes::{
    run_with_config, AppConfig, InvalidChangePolicy, RunSummary, VecReporter,
};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// 2 users, 3 songs, 2 playlists.
pub const BASE_MIXTAPE: &str = r#"{
    "users": [
        {"id": "1", "name": "Albin Jaye"},
        {"id": "2", "name": "Dipika Crescentia"}
    ],
    "songs": [
        {"id": "1", "artist": "Camila Cabello", "title": "Never Be the Same"},
        {"id": "2", "artist": "Zedd", "title": "The Middle"},
        {"id": "3", "artist": "The Weeknd", "title": "Pray For Me"}
    ],
    "playlists": [
        {"id": "1", "user_id": "2", "song_ids": ["1", "2"]},
        {"id": "2", "user_id": "1", "song_ids": ["3"]}
    ]
}"#;

pub struct TestDocuments {
    // removed with the documents when dropped
    _dir: TempDir,
    pub config: AppConfig,
}

impl TestDocuments {
    /// Writes the given documents, `None` leaves the file missing.
    pub fn create(mixtape: Option<&str>, changes: Option<&str>) -> TestDocuments {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            mixtape_path: dir.path().join("mixtape.json"),
            changes_path: dir.path().join("changes.json"),
            output_path: dir.path().join("output.json"),
            on_invalid_change: InvalidChangePolicy::Abort,
        };
        if let Some(content) = mixtape {
            std::fs::write(&config.mixtape_path, content).unwrap();
        }
        if let Some(content) = changes {
            std::fs::write(&config.changes_path, content).unwrap();
        }
        TestDocuments { _dir: dir, config }
    }

    pub fn with_policy(mut self, policy: InvalidChangePolicy) -> Self {
        self.config.on_invalid_change = policy;
        self
    }

    pub fn run(&self) -> (anyhow::Result<RunSummary>, Vec<String>) {
        let mut reporter = VecReporter::default();
        let result = run_with_config(&self.config, &mut reporter);
        (result, reporter.lines)
    }

    pub fn output_path(&self) -> PathBuf {
        self.config.output_path.clone()
    }

    pub fn output(&self) -> Value {
        let content = std::fs::read_to_string(self.output_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
