use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("failed to write playlist {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
