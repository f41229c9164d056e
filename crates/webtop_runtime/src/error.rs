//! Runtime error taxonomy.
//!
//! Window operations never fail; unknown ids are silent no-ops. The variants here cover composition
//! mistakes and configuration input only.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A surface asked for the desktop runtime outside [`crate::DesktopProvider`].
    #[error("DesktopRuntimeContext not provided")]
    ContextMissing,
    /// The desktop configuration could not be parsed.
    #[error("invalid desktop config: {0}")]
    Config(String),
}
