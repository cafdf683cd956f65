use thiserror::Error;

/// Core error type shared across demosynth crates.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier too short (or non-numeric) to classify.
    #[error("invalid id: {0}")]
    InvalidId(String),
    /// A max-selection was asked over an empty collection.
    #[error("empty collection")]
    EmptyCollection,
    /// A filtered max-selection matched no records; the payload names the
    /// criterion (city or group) that came up empty.
    #[error("no matching records: {0}")]
    NoMatch(String),
}

/// Convenience alias for results returned by demosynth crates.
pub type Result<T> = std::result::Result<T, Error>;
