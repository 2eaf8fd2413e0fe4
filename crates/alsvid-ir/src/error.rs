//! Error types for the IR crate.

use crate::qubit::WireId;
use thiserror::Error;

/// Errors that can occur while building gates, templates, or programs.
///
/// All of these are structural errors in the program description. None are
/// transient, and none should be retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate instantiated with the wrong number of wires.
    #[error("Gate '{gate}' requires {expected} wires, got {got}")]
    ArityMismatch {
        /// Name of the gate class.
        gate: String,
        /// Declared arity.
        expected: u32,
        /// Number of wires actually supplied.
        got: u32,
    },

    /// Control pattern length does not match the number of control wires.
    #[error("Control pattern \"{pattern}\" does not match {wires} control wires")]
    InvalidControlPattern {
        /// The offending pattern.
        pattern: String,
        /// Number of control wires supplied.
        wires: usize,
    },

    /// Relocation hit a wire with no entry in the wire map.
    #[error("Wire {wire} of gate '{gate}' has no entry in the wire map")]
    UnmappedWire {
        /// The unmapped wire.
        wire: WireId,
        /// Opcode of the gate being relocated.
        gate: String,
    },

    /// An actual register does not cover the formal register it binds.
    #[error("Register '{register}' binds {got} wires where at least {expected} are required")]
    RegisterArityMismatch {
        /// Name of the formal register.
        register: String,
        /// Formal register size.
        expected: u32,
        /// Actual register size.
        got: u32,
    },

    /// Instantiation bound a register name the template does not declare.
    #[error("Template declares no register named '{0}'")]
    UnknownRegister(String),

    /// Instantiation left a formal register unbound.
    #[error("No binding supplied for register '{0}'")]
    MissingRegister(String),

    /// Gate name not present in the gate set.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Parameterized gate bound with the wrong number of parameters.
    #[error("Gate '{gate}' expects {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// Name of the gate class.
        gate: String,
        /// Declared parameter count.
        expected: usize,
        /// Number of parameters actually supplied.
        got: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
