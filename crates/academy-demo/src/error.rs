use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] academy::ConfigError),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("unknown region slug: {slug} (expected one of: {expected})")]
    UnknownRegion { slug: String, expected: String },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Process exit code: 2 for usage and configuration problems, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::UnknownRegion { .. } | Self::InvalidArgument { .. } => 2,
            Self::Io(_) | Self::Terminal(_) | Self::Logging(_) => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<academy::Error> for CliError {
    fn from(err: academy::Error) -> Self {
        match err {
            academy::Error::Io(err) => Self::Io(err),
            academy::Error::Terminal(msg) => Self::Terminal(msg),
            academy::Error::Config(err) => Self::Config(err),
        }
    }
}
