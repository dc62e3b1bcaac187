//! Error types for the discovery pipeline.
//!
//! Provides a unified error type covering all failure modes: help probing,
//! process spawning, artifact I/O, and serialization. Help-probe failures
//! carry the command path being probed, since the most common cause is a
//! help-text format change after a Hugo version bump.

use thiserror::Error;

/// Errors that can occur during discovery and artifact emission.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The help probe ran but did not produce usable help output.
    #[error("help probe failed for command path '{path}': {detail}")]
    HelpProbe {
        /// Space-joined command path being probed (empty for the root).
        path: String,
        /// Exit status and first line of error output.
        detail: String,
    },

    /// The target executable could not be spawned at all.
    #[error("failed to spawn '{program}' while probing command path '{path}': {source}")]
    Spawn {
        program: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results with [`DiscoveryError`].
pub type Result<T> = std::result::Result<T, DiscoveryError>;
