use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelListError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
