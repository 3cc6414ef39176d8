use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A change record as it appears in the changes document, before validation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RawChange {
    /// Any JSON value, only the known string tags are applied.
    pub change_type: Value,
    #[serde(default)]
    pub change_detail: Value,
}

impl RawChange {
    pub fn kind(&self) -> Option<ChangeKind> {
        self.change_type.as_str().and_then(ChangeKind::from_tag)
    }

    /// The change type as written in reports: strings bare, anything else as JSON.
    pub fn type_label(&self) -> String {
        match &self.change_type {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The change types this tool knows how to apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeKind {
    AddNewPlaylist,
    RemovePlaylist,
    AddSongToPlaylist,
}

impl ChangeKind {
    /// Returns None for tags that aren't defined, those are ignored by the runner.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "add_new_playlist" => Some(ChangeKind::AddNewPlaylist),
            "remove_playlist" => Some(ChangeKind::RemovePlaylist),
            "add_song_to_playlist" => Some(ChangeKind::AddSongToPlaylist),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ChangeKind::AddNewPlaylist => "add_new_playlist",
            ChangeKind::RemovePlaylist => "remove_playlist",
            ChangeKind::AddSongToPlaylist => "add_song_to_playlist",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated change, ready to be applied to a [`crate::catalog::Mixtape`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Change {
    AddNewPlaylist {
        user_id: String,
        song_ids: Vec<String>,
    },
    RemovePlaylist {
        playlist_id: String,
    },
    AddSongToPlaylist {
        song_id: String,
        playlist_id: String,
    },
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::AddNewPlaylist { .. } => ChangeKind::AddNewPlaylist,
            Change::RemovePlaylist { .. } => ChangeKind::RemovePlaylist,
            Change::AddSongToPlaylist { .. } => ChangeKind::AddSongToPlaylist,
        }
    }
}
