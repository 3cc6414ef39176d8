use super::Change;
use crate::catalog::{Mixtape, Playlist};
use std::fmt;

/// What a successfully applied change did to the mixtape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Applied {
    PlaylistAdded { playlist_id: String },
    PlaylistRemoved { playlist_id: String },
    SongAdded { song_id: String, playlist_id: String },
}

/// Why a change was not applied. The mixtape is left untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rejection {
    UserNotFound { user_id: String },
    RemovedPlaylistNotFound { playlist_id: String },
    SongNotFound { song_id: String },
    PlaylistNotFound { playlist_id: String },
    SongAlreadyInPlaylist { song_id: String, playlist_id: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Accepted(Applied),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applied::PlaylistAdded { playlist_id } => {
                write!(f, "added new playlist_id {}", playlist_id)
            }
            Applied::PlaylistRemoved { playlist_id } => {
                write!(f, "removed playlist_id {}", playlist_id)
            }
            Applied::SongAdded {
                song_id,
                playlist_id,
            } => write!(f, "added song_id {} to playlist_id {}", song_id, playlist_id),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UserNotFound { user_id } => {
                write!(f, "user {} does not exist in users", user_id)
            }
            Rejection::RemovedPlaylistNotFound { playlist_id } => {
                write!(f, "{} does not exist", playlist_id)
            }
            Rejection::SongNotFound { song_id } => write!(f, "song_id {} does not exist", song_id),
            Rejection::PlaylistNotFound { playlist_id } => {
                write!(f, "playlist_id {} does not exist", playlist_id)
            }
            Rejection::SongAlreadyInPlaylist {
                song_id,
                playlist_id,
            } => write!(
                f,
                "song_id {} is already in playlist_id {}",
                song_id, playlist_id
            ),
        }
    }
}

/// Report line for the outcome: accepted changes read "successfully ...".
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted(applied) => write!(f, "successfully {}", applied),
            Outcome::Rejected(rejection) => write!(f, "{}", rejection),
        }
    }
}

/// Applies a validated change to the mixtape in place.
///
/// A change is either fully applied or rejected with no mutation at all.
pub fn apply_change(mixtape: &mut Mixtape, change: &Change) -> Outcome {
    match change {
        Change::AddNewPlaylist { user_id, song_ids } => {
            add_new_playlist(mixtape, user_id, song_ids)
        }
        Change::RemovePlaylist { playlist_id } => remove_playlist(mixtape, playlist_id),
        Change::AddSongToPlaylist {
            song_id,
            playlist_id,
        } => add_song_to_playlist(mixtape, song_id, playlist_id),
    }
}

fn add_new_playlist(mixtape: &mut Mixtape, user_id: &str, song_ids: &[String]) -> Outcome {
    if !mixtape.has_user(user_id) {
        return Outcome::Rejected(Rejection::UserNotFound {
            user_id: user_id.to_owned(),
        });
    }

    // Song ids are taken as they are, only add_song_to_playlist checks them.
    let playlist_id = mixtape.next_playlist_id();
    mixtape.playlists.push(Playlist::new(
        playlist_id.clone(),
        user_id.to_owned(),
        song_ids.to_vec(),
    ));
    Outcome::Accepted(Applied::PlaylistAdded { playlist_id })
}

fn remove_playlist(mixtape: &mut Mixtape, playlist_id: &str) -> Outcome {
    match mixtape.remove_playlist(playlist_id) {
        Some(removed) => Outcome::Accepted(Applied::PlaylistRemoved {
            playlist_id: removed.id,
        }),
        None => Outcome::Rejected(Rejection::RemovedPlaylistNotFound {
            playlist_id: playlist_id.to_owned(),
        }),
    }
}

fn add_song_to_playlist(mixtape: &mut Mixtape, song_id: &str, playlist_id: &str) -> Outcome {
    if !mixtape.has_song(song_id) {
        return Outcome::Rejected(Rejection::SongNotFound {
            song_id: song_id.to_owned(),
        });
    }

    let playlist = match mixtape.get_playlist_mut(playlist_id) {
        None => {
            return Outcome::Rejected(Rejection::PlaylistNotFound {
                playlist_id: playlist_id.to_owned(),
            })
        }
        Some(x) => x,
    };

    if playlist.contains_song(song_id) {
        return Outcome::Rejected(Rejection::SongAlreadyInPlaylist {
            song_id: song_id.to_owned(),
            playlist_id: playlist_id.to_owned(),
        });
    }

    playlist.song_ids.push(song_id.to_owned());
    Outcome::Accepted(Applied::SongAdded {
        song_id: song_id.to_owned(),
        playlist_id: playlist_id.to_owned(),
    })
}
