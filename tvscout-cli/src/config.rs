use crate::cli::Args;
use anyhow::{Context, Result, bail};
use scout_core::{
    extractor::{DEFAULT_SEARCH_PARAM, DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT, DEFAULT_UA, ProxyConfig},
    pipeline::{AcceptPolicy, DEFAULT_GROUP, DEFAULT_INPUT},
    playlist::{DEFAULT_LOGO_TEMPLATE, DEFAULT_OUTPUT},
    probe::ffmpeg::{DEFAULT_PROBE_TIMEOUT, DEFAULT_PROGRAM},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Channel list to read
    pub input: PathBuf,

    /// Playlist file to write
    pub output: PathBuf,

    /// Search page queried for each channel
    pub search_url: String,

    /// Query parameter carrying the channel name
    pub search_param: String,

    /// User agent string for requests
    pub user_agent: String,

    /// Search request timeout in seconds
    pub request_timeout_secs: u64,

    /// Probe tool executable
    pub probe_program: PathBuf,

    /// Probe timeout in seconds
    pub probe_timeout_secs: u64,

    /// Group for channels listed before any group marker
    pub default_group: String,

    /// Logo url, `{name}` is replaced by the channel name
    pub logo_template: String,

    pub accept_policy: AcceptPolicy,

    /// Proxy URL (supports http, https, socks5)
    pub proxy: Option<String>,

    /// Proxy username (if proxy requires authentication)
    pub proxy_username: Option<String>,

    /// Proxy password (if proxy requires authentication)
    pub proxy_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_param: DEFAULT_SEARCH_PARAM.to_string(),
            user_agent: DEFAULT_UA.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            probe_program: PathBuf::from(DEFAULT_PROGRAM),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs(),
            default_group: DEFAULT_GROUP.to_string(),
            logo_template: DEFAULT_LOGO_TEMPLATE.to_string(),
            accept_policy: AcceptPolicy::AllValid,
            proxy: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

// Proxy credentials never reach the logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "***");
        f.debug_struct("AppConfig")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("search_url", &self.search_url)
            .field("search_param", &self.search_param)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("probe_program", &self.probe_program)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("default_group", &self.default_group)
            .field("logo_template", &self.logo_template)
            .field("accept_policy", &self.accept_policy)
            .field("proxy", &self.proxy)
            .field("proxy_username", &redacted(&self.proxy_username))
            .field("proxy_password", &redacted(&self.proxy_password))
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from file, or defaults when no file is given.
    /// A given path that does not exist is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    bail!("Configuration file {} does not exist", path.display());
                }
                let content = std::fs::read_to_string(path)
                    .context("Failed to read configuration file")?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration file")
    }

    /// Apply command line overrides
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if args.first_valid {
            self.accept_policy = AcceptPolicy::FirstValid;
        }
        if let Some(proxy) = &args.proxy {
            self.proxy = Some(proxy.clone());
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn proxy_config(&self) -> Option<ProxyConfig> {
        self.proxy.as_ref().map(|url| ProxyConfig {
            url: url.clone(),
            username: self.proxy_username.clone(),
            password: self.proxy_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_fixed_behaviour() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.input, PathBuf::from("list.txt"));
        assert_eq!(config.output, PathBuf::from("playlist.m3u"));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.probe_timeout(), Duration::from_secs(30));
        assert_eq!(config.probe_program, PathBuf::from("ffmpeg"));
        assert_eq!(config.default_group, "Default");
        assert_eq!(config.accept_policy, AcceptPolicy::AllValid);
        assert!(config.proxy_config().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            output = "tv.m3u"
            probe_timeout_secs = 5
            accept_policy = "first-valid"
            proxy = "http://127.0.0.1:8080"
            proxy_username = "user"
            proxy_password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("tv.m3u"));
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
        assert_eq!(config.accept_policy, AcceptPolicy::FirstValid);
        assert_eq!(config.input, PathBuf::from("list.txt"));

        let proxy = config.proxy_config().unwrap();
        assert_eq!(proxy.url, "http://127.0.0.1:8080");
        assert_eq!(proxy.username.as_deref(), Some("user"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("accept_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tvscout.toml");
        std::fs::write(&path, "default_group = \"Misc\"\n").unwrap();

        assert_eq!(AppConfig::load(Some(&path)).unwrap().default_group, "Misc");

        let error = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_debug_output_hides_proxy_credentials() {
        let config = AppConfig::from_toml(
            r#"
            proxy = "http://127.0.0.1:8080"
            proxy_username = "alice"
            proxy_password = "hunter2"
            "#,
        )
        .unwrap();

        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("alice"));
        assert!(printed.contains("http://127.0.0.1:8080"));
        assert!(printed.contains("proxy_password: Some(\"***\")"));
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::try_parse_from([
            "tvscout",
            "--input",
            "channels.txt",
            "--first-valid",
        ])
        .unwrap();
        let config = AppConfig::default().with_args(&args);

        assert_eq!(config.input, PathBuf::from("channels.txt"));
        assert_eq!(config.output, PathBuf::from("playlist.m3u"));
        assert_eq!(config.accept_policy, AcceptPolicy::FirstValid);
    }
}
