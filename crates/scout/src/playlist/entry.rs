use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// A validated stream, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    pub channel_name: String,
    pub group: String,
    pub url: String,
}

impl PlaylistEntry {
    pub fn new<N: Into<String>, G: Into<String>, U: Into<String>>(
        channel_name: N,
        group: G,
        url: U,
    ) -> Self {
        Self {
            channel_name: channel_name.into(),
            group: group.into(),
            url: url.into(),
        }
    }
}

/// Entries in the order they were accepted.
///
/// A (channel, url) pair is stored at most once.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
    /// Accepted urls per channel.
    accepted: FxHashMap<String, FxHashSet<String>>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry`, returning `false` if the same channel already has
    /// this url.
    pub fn push(&mut self, entry: PlaylistEntry) -> bool {
        if self.contains(&entry.channel_name, &entry.url) {
            return false;
        }
        self.accepted
            .entry(entry.channel_name.clone())
            .or_default()
            .insert(entry.url.clone());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, channel_name: &str, url: &str) -> bool {
        self.accepted
            .get(channel_name)
            .is_some_and(|urls| urls.contains(url))
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
