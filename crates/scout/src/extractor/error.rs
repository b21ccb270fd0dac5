use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("tls error: {0}")]
    TlsError(#[from] rustls::Error),
}
