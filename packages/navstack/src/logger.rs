//! A small `tracing` setup for applications and examples.
//!
//! Libraries should not install a subscriber; this is for binaries that just want to see what
//! the history and router are doing.

use tracing::Level;

/// An error raised when installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Another global subscriber was installed first.
    #[error("failed to install the global tracing subscriber: {0}")]
    AlreadyInitialized(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Install a formatting subscriber that prints events at `level` and above.
///
/// ```rust
/// use tracing::Level;
///
/// navstack::logger::init(Level::DEBUG).expect("failed to init logger");
/// tracing::debug!("navstack logger ready");
/// ```
pub fn init(level: Level) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(LoggerError::AlreadyInitialized)?;

    tracing::trace!(%level, "logger initialized");
    Ok(())
}
