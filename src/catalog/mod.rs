mod mixtape;
mod playlist_number;

pub use mixtape::{Mixtape, Playlist, Song, User};
pub use playlist_number::PlaylistNumber;
