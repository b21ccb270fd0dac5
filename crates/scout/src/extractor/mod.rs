mod default;
pub mod error;
pub mod search_extractor;
pub mod source;

pub use default::{DEFAULT_TIMEOUT, DEFAULT_UA, ProxyConfig, create_client, default_client};
pub use error::ExtractorError;
pub use search_extractor::{DEFAULT_SEARCH_PARAM, DEFAULT_SEARCH_URL, SearchExtractor};
pub use source::CandidateSource;
