//! `OpenQASM` 3 Emitter for Alsvid
//!
//! This crate turns a hierarchical Alsvid gate program into flat
//! `OpenQASM` 3.0 source text: gate-definition blocks in dependency order,
//! a global wire register sized to the program, and one instruction line
//! per flattened gate.
//!
//! Emission is one-directional; there is no parser here.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{GateSet, Program};
//! use alsvid_qasm3::emit;
//!
//! let gates = GateSet::with_stdgates();
//! let h = gates.lookup("h").unwrap();
//! let cx = gates.lookup("cx").unwrap();
//!
//! let mut program = Program::new();
//! program.push(gates.gate(h, [0u32]).unwrap());
//! program.push(gates.gate(cx, [0u32, 1]).unwrap());
//!
//! let qasm = emit(&program, &gates).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("qubit[2] reg;"));
//! assert!(qasm.contains("h reg[0];"));
//! assert!(qasm.contains("cx reg[0],reg[1];"));
//! ```
//!
//! # Output Shape
//!
//! ```text
//! OPENQASM 3.0;
//! include "stdgates.inc";
//!
//! gate bar q0, q1, q2
//! {
//!     cx q0,q1;
//!     h q1;
//!     cx q1,q2;
//! }
//!
//! qubit[3] reg;
//!
//! bar reg[0],reg[1],reg[2];
//! ```
//!
//! Definition blocks appear only for gate classes with a body; the
//! `stdgates.inc` vocabulary and parameterized bindings are target-native
//! and need none.

mod deps;
mod emitter;
mod error;
mod scope;

pub use deps::definition_order;
pub use emitter::{GLOBAL_REGISTER, emit, emit_flat};
pub use error::{EmitError, EmitResult};
pub use scope::QubitScope;
