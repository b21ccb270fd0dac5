use super::{
    StreamProber,
    error::ProbeError,
    result::{ProbeOutcome, ValidationResult},
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};
use tokio::{process::Command, time::timeout};
use tracing::{debug, info, warn};

pub const DEFAULT_PROGRAM: &str = "ffmpeg";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);
pub const NO_METADATA_DIAGNOSTIC: &str = "No metadata found or stream is not responding.";

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Probes streams by opening them with `ffmpeg -hide_banner -i <url>`.
///
/// ffmpeg reports the input's container and codecs on stderr and then exits
/// non-zero because no output was given, so the exit status is ignored and any
/// stderr text counts as a successful probe.
#[derive(Debug, Clone)]
pub struct FfmpegProber {
    program: PathBuf,
    timeout: Duration,
}

impl Default for FfmpegProber {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegProber {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn build_args(url: &str) -> [&str; 3] {
        ["-hide_banner", "-i", url]
    }

    /// Runs the probe tool against `url` and returns everything it wrote to
    /// stderr. The child is killed when the timeout elapses.
    pub async fn capture_diagnostics(&self, url: &str) -> Result<String, ProbeError> {
        let mut command = Command::new(&self.program);
        command
            .args(Self::build_args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProbeError::ToolNotFound(self.program_name()),
            _ => ProbeError::Io(e),
        })?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(ProbeError::TimedOut {
                    program: self.program_name(),
                    timeout: self.timeout,
                });
            }
        };

        debug!(status = %output.status, "Probe process exited");
        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

#[async_trait]
impl StreamProber for FfmpegProber {
    fn name(&self) -> &str {
        DEFAULT_PROGRAM
    }

    async fn probe(&self, url: &str) -> ValidationResult {
        info!("--- Analyzing: {} ---", url);

        match self.capture_diagnostics(url).await {
            Ok(diagnostics) if !diagnostics.is_empty() => {
                info!("{}", diagnostics);
                ValidationResult::new(url, ProbeOutcome::Metadata, diagnostics)
            }
            Ok(_) => {
                info!("{}", NO_METADATA_DIAGNOSTIC);
                ValidationResult::new(url, ProbeOutcome::NoMetadata, NO_METADATA_DIAGNOSTIC)
            }
            Err(e) => {
                let outcome = match &e {
                    ProbeError::TimedOut { .. } => ProbeOutcome::TimedOut,
                    ProbeError::ToolNotFound(_) => ProbeOutcome::ToolNotFound,
                    ProbeError::Io(_) => ProbeOutcome::Failed,
                };
                let diagnostic = match outcome {
                    ProbeOutcome::Failed => {
                        format!("An error occurred while analyzing stream: {e}")
                    }
                    _ => e.to_string(),
                };
                warn!("{}", diagnostic);
                ValidationResult::new(url, outcome, diagnostic)
            }
        }
    }
}
