/// Crate-wide result type for notification operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors surfaced to the host for direct operator display.
///
/// Every variant renders as human-readable text; the host shows the message
/// in its administrative UI as-is. Precondition failures (`MissingSettings`,
/// `NoTarget`) are produced before any network attempt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required provider setting is empty or missing.
    #[error("{message}")]
    MissingSettings { message: String },

    /// The triggered rule has no delivery target configured.
    #[error("{message}")]
    NoTarget { message: String },

    /// The remote messaging service rejected or failed the request.
    #[error("{message}")]
    Service { message: String },

    /// JSON (de)serialization failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn missing_settings(message: impl std::fmt::Display) -> Self {
        Self::MissingSettings {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn no_target(message: impl std::fmt::Display) -> Self {
        Self::NoTarget {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn service(message: impl std::fmt::Display) -> Self {
        Self::Service {
            message: message.to_string(),
        }
    }
}
