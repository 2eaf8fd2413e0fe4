//! Error types for QASM3 emission.

use thiserror::Error;

/// Errors that can occur while emitting QASM3 text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// A gate class depends, directly or transitively, on itself, so no
    /// valid definition order exists.
    #[error("Gate '{name}' participates in a dependency cycle")]
    CyclicGateDependency {
        /// A class on the cycle.
        name: String,
    },

    /// IR error surfaced while preparing the program.
    #[error("Circuit error: {0}")]
    Ir(#[from] alsvid_ir::IrError),
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
