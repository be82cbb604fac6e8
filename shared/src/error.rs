/// Misconfiguration of a fixed table (palette, preset) detected at use time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Failure to reach or drive an external rendering library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RendererError {
    #[error("{library} is not loaded")]
    Unavailable { library: &'static str },
    #[error("{library} call failed: {message}")]
    Js {
        library: &'static str,
        message: String,
    },
}
