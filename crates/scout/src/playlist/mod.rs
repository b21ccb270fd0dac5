pub mod entry;
pub mod error;
pub mod m3u;
pub mod writer;

pub use entry::{Playlist, PlaylistEntry};
pub use error::PlaylistError;
pub use m3u::{DEFAULT_LOGO_TEMPLATE, M3U_HEADER, render_m3u};
pub use writer::{DEFAULT_OUTPUT, PlaylistWriter, WriteOutcome};
