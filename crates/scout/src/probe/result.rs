use std::fmt;

/// How a probe ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The tool printed diagnostic text about the stream.
    Metadata,
    /// The tool ran but printed nothing.
    NoMetadata,
    TimedOut,
    ToolNotFound,
    /// Any other failure running the tool.
    Failed,
}

impl ProbeOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ProbeOutcome::Metadata)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Metadata => write!(f, "metadata"),
            ProbeOutcome::NoMetadata => write!(f, "no metadata"),
            ProbeOutcome::TimedOut => write!(f, "timed out"),
            ProbeOutcome::ToolNotFound => write!(f, "tool not found"),
            ProbeOutcome::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub url: String,
    pub outcome: ProbeOutcome,
    pub diagnostic: String,
}

impl ValidationResult {
    pub fn new<U: Into<String>, D: Into<String>>(
        url: U,
        outcome: ProbeOutcome,
        diagnostic: D,
    ) -> Self {
        Self {
            url: url.into(),
            outcome,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}
