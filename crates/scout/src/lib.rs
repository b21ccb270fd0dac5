//! Discovery and validation of live TV streams.
//!
//! A run walks an ordered channel list, asks a [`CandidateSource`] for stream
//! URLs per channel, checks each URL with a [`StreamProber`] and collects the
//! streams that answered into a [`Playlist`], which [`PlaylistWriter`] renders
//! as an M3U file.
//!
//! [`CandidateSource`]: extractor::CandidateSource
//! [`StreamProber`]: probe::StreamProber
//! [`Playlist`]: playlist::Playlist
//! [`PlaylistWriter`]: playlist::PlaylistWriter

pub mod extractor;
pub mod pipeline;
pub mod playlist;
pub mod probe;
