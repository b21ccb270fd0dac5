use super::{default::DEFAULT_UA, error::ExtractorError, source::CandidateSource};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const DEFAULT_SEARCH_URL: &str = "https://tonkiang.us/";
pub const DEFAULT_SEARCH_PARAM: &str = "iptv";

static RESULT_BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").unwrap());
static RESULT_FIELD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tba").unwrap());

/// Looks channels up on an IPTV search page.
///
/// Every result on the page is a `<table>` block whose `<tba>` fields hold,
/// in order, the channel label and the stream URL. Only the URL is kept.
#[derive(Debug, Clone)]
pub struct SearchExtractor {
    client: Client,
    search_url: String,
    search_param: String,
    user_agent: String,
}

impl SearchExtractor {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_param: DEFAULT_SEARCH_PARAM.to_string(),
            user_agent: DEFAULT_UA.to_string(),
        }
    }

    pub fn with_search_url<S: Into<String>>(mut self, search_url: S) -> Self {
        self.search_url = search_url.into();
        self
    }

    pub fn with_search_param<S: Into<String>>(mut self, search_param: S) -> Self {
        self.search_param = search_param.into();
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Fetches the search page for `channel` and extracts its stream URLs.
    pub async fn search(&self, channel: &str) -> Result<Vec<String>, ExtractorError> {
        let body = self
            .client
            .get(&self.search_url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[(self.search_param.as_str(), channel)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let urls = parse_candidates(&body);
        debug!(channel, count = urls.len(), "Extracted candidate urls");
        Ok(urls)
    }
}

#[async_trait]
impl CandidateSource for SearchExtractor {
    fn name(&self) -> &str {
        "search"
    }

    async fn fetch_candidates(&self, channel: &str) -> Vec<String> {
        match self.search(channel).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!(
                    "Error fetching {}?{}={}: {}",
                    self.search_url, self.search_param, channel, e
                );
                Vec::new()
            }
        }
    }
}

/// Takes the trimmed text of the second `<tba>` inside each `<table>`, in
/// document order. Blocks with fewer than two fields and blank values are
/// skipped.
///
/// Fields must sit inside table cells, as they do on the search page. HTML
/// parsing moves stray content out of a `<table>`, so a `<tba>` placed
/// directly under `<table>` or `<tr>` does not belong to the block.
pub fn parse_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&RESULT_BLOCK_SELECTOR)
        .filter_map(|block| block.select(&RESULT_FIELD_SELECTOR).nth(1))
        .map(|field| field.text().collect::<String>().trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}
