//! Alsvid Gate Program Representation
//!
//! This crate provides the data model for hierarchical gate programs in
//! Alsvid: gate classes with definition bodies and precomputed dependency
//! closures, gate values with control/inverse/relocation combinators,
//! named wire registers, reusable register-parameterized circuit
//! templates, and arbitrarily nested program streams.
//!
//! # Overview
//!
//! A program is assembled against a [`GateSet`], the registry of gate
//! classes. The standard vocabulary ([`StandardGate`]) covers the
//! `stdgates.inc` primitives; user-defined composite classes are added
//! with [`GateSet::define`], which records the definition body and
//! computes its transitive dependency closure once, at declaration time.
//!
//! # Core Components
//!
//! - **Wires**: [`WireId`] addresses a qubit line; [`WireMap`] drives
//!   relocation
//! - **Gates**: [`Gate`] immutable values with [`Gate::inverted`],
//!   [`Gate::with_control`], and [`Gate::relocate`] combinators
//! - **Classes**: [`GateSet`], [`GateDef`], [`StandardGate`], and
//!   [`BoundGate`] for parameterized classes
//! - **Registers**: [`QReg`] named wire groups, formal and actual
//! - **Templates**: [`CircuitTemplate`] + [`TemplateBuilder`] for
//!   register-parameterized reuse
//! - **Programs**: [`Program`] nested gate streams with
//!   [`Program::flatten`]
//!
//! # Example: Building a Program
//!
//! ```rust
//! use alsvid_ir::{GateSet, Program};
//!
//! let gates = GateSet::with_stdgates();
//! let h = gates.lookup("h").unwrap();
//! let cx = gates.lookup("cx").unwrap();
//!
//! let mut program = Program::new();
//! program.push(gates.gate(h, [0u32]).unwrap());
//! program.push(gates.gate(cx, [0u32, 1]).unwrap());
//! program.push(gates.gate(h, [0u32]).unwrap().inverted());
//!
//! assert_eq!(program.flatten().len(), 3);
//! ```
//!
//! # Example: Templates over Registers
//!
//! ```rust
//! use alsvid_ir::{GateSet, QReg, TemplateBuilder, WireId};
//!
//! let gates = GateSet::with_stdgates();
//! let cx = gates.lookup("cx").unwrap();
//!
//! // Declare a template over two one-wire registers.
//! let mut builder = TemplateBuilder::new();
//! let a = builder.qreg("a", 1);
//! let b = builder.qreg("b", 1);
//! builder.push(gates.gate(cx, [a.wires[0], b.wires[0]]).unwrap());
//! let template = builder.build().unwrap();
//!
//! // Instantiate it against global wires 4 and 7.
//! let bound = template
//!     .instantiate(&[QReg::range("a", 4, 1), QReg::range("b", 7, 1)])
//!     .unwrap();
//! assert_eq!(bound[0].qubits, vec![WireId(4), WireId(7)]);
//! ```

pub mod error;
pub mod gate;
pub mod param;
pub mod program;
pub mod qubit;
pub mod register;
pub mod registry;
pub mod template;

pub use error::{IrError, IrResult};
pub use gate::{Ctrl, Gate};
pub use program::{Program, ProgramNode, wire_count};
pub use qubit::{WireId, WireMap, wire_map};
pub use register::QReg;
pub use registry::{BoundGate, GateDef, GateSet, GateTypeId, StandardGate};
pub use template::{CircuitTemplate, TemplateBuilder};
