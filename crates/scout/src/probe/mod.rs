pub mod error;
pub mod ffmpeg;
pub mod result;

pub use error::ProbeError;
pub use ffmpeg::FfmpegProber;
pub use result::{ProbeOutcome, ValidationResult};

use async_trait::async_trait;

/// Checks whether a stream URL answers with usable media metadata.
///
/// Probing never fails outright: every problem, including a missing probe
/// tool, comes back as an invalid [`ValidationResult`] carrying a diagnostic.
#[async_trait]
pub trait StreamProber: Send + Sync {
    /// Name of the prober (for logging)
    fn name(&self) -> &str;

    async fn probe(&self, url: &str) -> ValidationResult;
}
