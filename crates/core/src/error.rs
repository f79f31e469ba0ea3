//! Core error types for elinker

/// Result type alias for elinker
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Core error type
///
/// The facade never constructs or rewrites these; whatever an engine returns
/// reaches the caller as-is.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The named resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The named resource already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The engine rejected the request
    #[error("Engine error ({status}): {message}")]
    Engine {
        /// Status code reported by the engine
        status: u16,
        /// Message reported by the engine
        message: String,
    },

    /// The engine could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// Any other error, boxed
    #[error("Context error: {0}")]
    Context(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Configuration(format!("invalid endpoint URL: {}", err))
    }
}
