use super::PlaylistNumber;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct User {
    pub id: String,

    /// Anything else the document carries (name, ...), written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Song {
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    pub song_ids: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Playlist {
    pub fn new(id: String, user_id: String, song_ids: Vec<String>) -> Playlist {
        Playlist {
            id,
            user_id,
            song_ids,
            extra: Map::new(),
        }
    }

    pub fn contains_song(&self, song_id: &str) -> bool {
        self.song_ids.iter().any(|s| s == song_id)
    }
}

/// The whole catalog document: users, songs and playlists.
///
/// Top-level keys are written back in the order they were read, unknown ones
/// included.
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Mixtape {
    pub users: Vec<User>,
    pub songs: Vec<Song>,
    pub playlists: Vec<Playlist>,

    pub extra: Map<String, Value>,

    key_order: Vec<String>,
}

const USERS_KEY: &str = "users";
const SONGS_KEY: &str = "songs";
const PLAYLISTS_KEY: &str = "playlists";

fn list_from_value<T: DeserializeOwned>(value: Option<Value>) -> serde_json::Result<Vec<T>> {
    Ok(value
        .map(serde_json::from_value)
        .transpose()?
        .unwrap_or_default())
}

impl TryFrom<Map<String, Value>> for Mixtape {
    type Error = serde_json::Error;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = document.keys().cloned().collect();
        let (mut users, mut songs, mut playlists) = (None, None, None);
        let mut extra = Map::new();
        for (key, value) in document {
            match key.as_str() {
                USERS_KEY => users = Some(value),
                SONGS_KEY => songs = Some(value),
                PLAYLISTS_KEY => playlists = Some(value),
                _ => {
                    extra.insert(key, value);
                }
            }
        }
        Ok(Mixtape {
            users: list_from_value(users)?,
            songs: list_from_value(songs)?,
            playlists: list_from_value(playlists)?,
            extra,
            key_order,
        })
    }
}

impl Serialize for Mixtape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut keys: Vec<&str> = self.key_order.iter().map(String::as_str).collect();
        for key in [USERS_KEY, SONGS_KEY, PLAYLISTS_KEY]
            .into_iter()
            .chain(self.extra.keys().map(String::as_str))
        {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let mut map = serializer.serialize_map(None)?;
        for key in keys {
            match key {
                USERS_KEY => map.serialize_entry(key, &self.users)?,
                SONGS_KEY => map.serialize_entry(key, &self.songs)?,
                PLAYLISTS_KEY => map.serialize_entry(key, &self.playlists)?,
                _ => {
                    if let Some(value) = self.extra.get(key) {
                        map.serialize_entry(key, value)?;
                    }
                }
            }
        }
        map.end()
    }
}

impl Mixtape {
    pub fn has_user(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    pub fn has_song(&self, song_id: &str) -> bool {
        self.songs.iter().any(|s| s.id == song_id)
    }

    pub fn get_playlist(&self, playlist_id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == playlist_id)
    }

    pub fn get_playlist_mut(&mut self, playlist_id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == playlist_id)
    }

    /// Removes the first playlist with the given id, keeping the others in order.
    pub fn remove_playlist(&mut self, playlist_id: &str) -> Option<Playlist> {
        let index = self.playlists.iter().position(|p| p.id == playlist_id)?;
        Some(self.playlists.remove(index))
    }

    /// Next playlist id, one past the highest numeric id currently present.
    ///
    /// Ids that don't parse as integers can never clash with a numeric one,
    /// so they are left out of the computation.
    pub fn next_playlist_id(&self) -> String {
        self.playlists
            .iter()
            .filter_map(|p| PlaylistNumber::parse(&p.id))
            .max()
            .map_or_else(PlaylistNumber::one, |max| max.next())
            .to_string()
    }

    pub fn get_users_count(&self) -> usize {
        self.users.len()
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn get_playlists_count(&self) -> usize {
        self.playlists.len()
    }

    #[cfg(test)]
    pub fn dummy() -> Mixtape {
        let user = |id: &str| User {
            id: id.to_string(),
            extra: Map::new(),
        };
        let song = |id: &str| Song {
            id: id.to_string(),
            extra: Map::new(),
        };
        Mixtape {
            users: vec![user("1"), user("2")],
            songs: vec![song("1"), song("2"), song("3")],
            playlists: vec![
                Playlist::new("1".to_string(), "1".to_string(), vec!["1".to_string()]),
                Playlist::new(
                    "2".to_string(),
                    "2".to_string(),
                    vec!["2".to_string(), "3".to_string()],
                ),
            ],
            extra: Map::new(),
            key_order: Vec::new(),
        }
    }
}
