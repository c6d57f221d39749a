use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation crate.
///
/// The physics step itself never fails; everything here happens while
/// building a [`Simulation`](crate::Simulation), loading its config, or
/// placing bodies by hand.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value that would produce physical artifacts.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A hand-placed body that the physics cannot handle.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Malformed JSON config.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be read, or a frame could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
