use scout_core::{
    extractor::ExtractorError, pipeline::ChannelListError, playlist::PlaylistError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Channel list error: {0}")]
    ChannelList(#[from] ChannelListError),

    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
