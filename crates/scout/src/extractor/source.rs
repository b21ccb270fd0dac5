use async_trait::async_trait;

/// Resolves a channel name to candidate stream URLs.
///
/// Implementations fail soft: lookup errors are logged and reported as an
/// empty list so one unreachable channel never stops a run. The returned URLs
/// keep the order the backend produced them in and are not deduplicated.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Name of the source (for logging)
    fn name(&self) -> &str;

    async fn fetch_candidates(&self, channel: &str) -> Vec<String>;
}
