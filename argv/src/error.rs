//! Error type for runtime schema loading.

use thiserror::Error;

/// Errors raised by the argument-vector builder.
///
/// Building itself cannot fail; the only failure mode is loading the
/// persisted schema artifact. The error is `Clone` so the process-wide
/// cache can hand the same load failure to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgvError {
    /// The schema artifact is missing or not valid schema JSON.
    ///
    /// This is fatal by design: defaulting to an empty schema would
    /// silently degrade every command to unknown-flag fallback behavior.
    #[error("failed to load runtime schema from '{path}': {detail}")]
    SchemaLoad { path: String, detail: String },
}
