/// Result alias that carries the custom [`ShowcaseError`] type.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Common error type for the core crate.
///
/// Navigation and drag commands never produce errors; they are ignored when
/// the widget is not in a state to accept them. Only mounting and the loaders
/// for configuration and scripts can fail.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// Free-form message for failures without a dedicated variant.
    #[error("{0}")]
    Message(String),
    /// A collaborator the widget cannot run without was not supplied.
    #[error("required {0} element not found")]
    MissingElement(&'static str),
    /// A configuration value is outside the range the widgets accept.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A slide deck must hold at least one slide.
    #[error("slide deck must contain at least one slide")]
    EmptyDeck,
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed configuration or script JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShowcaseError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for ShowcaseError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ShowcaseError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
