//! Validation of raw change details.
//!
//! Turns the untyped `change_detail` payload of a change record into a typed
//! [`Change`], given the kind declared by its `change_type`.

use super::{Change, ChangeKind};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("change_detail must be an object")]
    NotAnObject,

    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field '{field}' must contain only strings, item {index} is not")]
    WrongElementType { field: &'static str, index: usize },

    #[error("field '{field}' must contain at least 1 item")]
    EmptyList { field: &'static str },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn validate_change(kind: ChangeKind, detail: &Value) -> ValidationResult<Change> {
    let detail = detail.as_object().ok_or(ValidationError::NotAnObject)?;
    match kind {
        ChangeKind::AddNewPlaylist => Ok(Change::AddNewPlaylist {
            user_id: required_string(detail, "user_id")?,
            song_ids: required_song_list(detail)?,
        }),
        ChangeKind::RemovePlaylist => Ok(Change::RemovePlaylist {
            playlist_id: required_string(detail, "playlist_id")?,
        }),
        ChangeKind::AddSongToPlaylist => Ok(Change::AddSongToPlaylist {
            song_id: required_string(detail, "song_id")?,
            playlist_id: required_string(detail, "playlist_id")?,
        }),
    }
}

fn required_string(detail: &Map<String, Value>, field: &'static str) -> ValidationResult<String> {
    match detail.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

// `songs` is the name used by change documents, `song_ids` the one used by
// playlists in the mixtape. Both are accepted, `songs` wins.
fn required_song_list(detail: &Map<String, Value>) -> ValidationResult<Vec<String>> {
    const FIELD: &str = "songs";
    let value = detail
        .get(FIELD)
        .or_else(|| detail.get("song_ids"))
        .ok_or(ValidationError::MissingField { field: FIELD })?;
    let items = value.as_array().ok_or(ValidationError::WrongType {
        field: FIELD,
        expected: "a list of strings",
    })?;
    if items.is_empty() {
        return Err(ValidationError::EmptyList { field: FIELD });
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ValidationError::WrongElementType {
                field: FIELD,
                index,
            }),
        })
        .collect()
}
