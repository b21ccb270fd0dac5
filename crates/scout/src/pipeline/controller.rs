use super::channel_list::{ChannelEntry, DEFAULT_GROUP, Directive};
use crate::{
    extractor::CandidateSource,
    playlist::{Playlist, PlaylistEntry},
    probe::StreamProber,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Which validated candidates of a channel make it into the playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcceptPolicy {
    /// Probe every candidate and keep each one that validates.
    #[default]
    AllValid,
    /// Stop probing a channel after its first valid candidate.
    FirstValid,
}

impl fmt::Display for AcceptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptPolicy::AllValid => write!(f, "all-valid"),
            AcceptPolicy::FirstValid => write!(f, "first-valid"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub channels: usize,
    pub channels_found: usize,
    pub channels_not_found: usize,
    pub candidates_probed: usize,
    pub entries_accepted: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} channels ({} found, {} not found), {} candidates probed, {} entries accepted",
            self.channels,
            self.channels_found,
            self.channels_not_found,
            self.candidates_probed,
            self.entries_accepted
        )
    }
}

/// Drives a channel list through lookup and probing, one channel at a time.
pub struct Pipeline {
    source: Box<dyn CandidateSource>,
    prober: Box<dyn StreamProber>,
    policy: AcceptPolicy,
    default_group: String,
}

impl Pipeline {
    pub fn new(source: Box<dyn CandidateSource>, prober: Box<dyn StreamProber>) -> Self {
        Self {
            source,
            prober,
            policy: AcceptPolicy::default(),
            default_group: DEFAULT_GROUP.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: AcceptPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_default_group<S: Into<String>>(mut self, default_group: S) -> Self {
        self.default_group = default_group.into();
        self
    }

    pub fn policy(&self) -> AcceptPolicy {
        self.policy
    }

    /// Processes `directives` in order, appending accepted streams to
    /// `playlist` as soon as they validate.
    ///
    /// Entries already in `playlist` survive whatever happens to the run, so a
    /// caller that owns the playlist can always write out partial results.
    pub async fn run(&self, directives: &[Directive], playlist: &mut Playlist) -> RunSummary {
        info!(
            source = self.source.name(),
            prober = self.prober.name(),
            policy = %self.policy,
            "Starting pipeline over {} directives",
            directives.len()
        );

        let mut summary = RunSummary::default();
        let mut current_group = self.default_group.clone();

        for directive in directives {
            current_group = match directive {
                Directive::Group(group) => {
                    info!("--- Switched to group: {} ---", group);
                    group.clone()
                }
                Directive::Channel(name) => {
                    let channel = ChannelEntry::new(name.as_str(), current_group.as_str());
                    self.process_channel(&channel, playlist, &mut summary)
                        .await;
                    current_group
                }
            };
        }

        summary
    }

    async fn process_channel(
        &self,
        channel: &ChannelEntry,
        playlist: &mut Playlist,
        summary: &mut RunSummary,
    ) {
        info!("--- Searching for channel: {} ---", channel.name);
        summary.channels += 1;

        let candidates = self.source.fetch_candidates(&channel.name).await;
        debug!(channel = %channel.name, count = candidates.len(), "Fetched candidates");

        let mut accepted = 0;
        for url in candidates {
            if playlist.contains(&channel.name, &url) {
                debug!(channel = %channel.name, url = %url, "Skipping already accepted candidate");
                continue;
            }

            summary.candidates_probed += 1;
            let result = self.prober.probe(&url).await;
            if !result.is_valid() {
                debug!(url = %url, outcome = %result.outcome, "Candidate rejected");
                continue;
            }

            playlist.push(PlaylistEntry::new(
                channel.name.as_str(),
                channel.group.as_str(),
                url,
            ));
            accepted += 1;

            if self.policy == AcceptPolicy::FirstValid {
                break;
            }
        }

        if accepted == 0 {
            info!("No valid stream found for {}", channel.name);
            summary.channels_not_found += 1;
        } else {
            summary.channels_found += 1;
            summary.entries_accepted += accepted;
        }
    }
}
