use super::{
    entry::Playlist,
    error::PlaylistError,
    m3u::{DEFAULT_LOGO_TEMPLATE, render_m3u},
};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_OUTPUT: &str = "playlist.m3u";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, entries: usize },
    /// The playlist was empty, no file was touched.
    NothingToWrite,
}

/// Writes playlists to a fixed location, replacing what was there.
#[derive(Debug, Clone)]
pub struct PlaylistWriter {
    path: PathBuf,
    logo_template: String,
}

impl Default for PlaylistWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl PlaylistWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            logo_template: DEFAULT_LOGO_TEMPLATE.to_string(),
        }
    }

    pub fn with_logo_template<S: Into<String>>(mut self, logo_template: S) -> Self {
        self.logo_template = logo_template.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write(&self, playlist: &Playlist) -> Result<WriteOutcome, PlaylistError> {
        if playlist.is_empty() {
            return Ok(WriteOutcome::NothingToWrite);
        }

        let content = render_m3u(playlist, &self.logo_template);
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| PlaylistError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), entries = playlist.len(), "Playlist written");
        Ok(WriteOutcome::Written {
            path: self.path.clone(),
            entries: playlist.len(),
        })
    }
}
