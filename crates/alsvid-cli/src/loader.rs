//! JSON program descriptions.
//!
//! The loader fills the front-end role: it turns a user-authored JSON
//! description into the gate set and nested program the compiler core
//! consumes. The description declares composite gate classes, then the
//! program body as an arbitrarily nested list of gate calls:
//!
//! ```json
//! {
//!     "gates": [
//!         {
//!             "name": "bar",
//!             "arity": 3,
//!             "body": [
//!                 { "gate": "cx", "qubits": [0, 1] },
//!                 { "gate": "h", "qubits": [1] },
//!                 { "gate": "cx", "qubits": [1, 2] }
//!             ]
//!         }
//!     ],
//!     "program": [
//!         { "gate": "h", "qubits": [0], "pattern": "01", "controls": [1, 2] },
//!         { "gate": "rx", "qubits": [0], "params": [1.5707963267948966] },
//!         [
//!             { "gate": "h", "qubits": [0], "inv": true },
//!             { "gate": "bar", "qubits": [0, 1, 2] }
//!         ]
//!     ]
//! }
//! ```
//!
//! Modifier order on a call: parameters bind first, then `inv`, then
//! controls, mirroring how the combinators nest in the IR.

use anyhow::{Context, Result};
use serde::Deserialize;

use alsvid_ir::{Gate, GateSet, Program, ProgramNode};

/// Top-level JSON document.
#[derive(Debug, Deserialize)]
pub struct ProgramDoc {
    /// Composite gate declarations, in dependency order.
    #[serde(default)]
    pub gates: Vec<GateDefDoc>,
    /// Program body: gate calls and nested sequences.
    pub program: Vec<NodeDoc>,
}

/// One composite gate declaration.
#[derive(Debug, Deserialize)]
pub struct GateDefDoc {
    /// Gate name.
    pub name: String,
    /// Declared arity; inferred from the body when omitted.
    #[serde(default)]
    pub arity: Option<u32>,
    /// Definition body over local wires.
    pub body: Vec<CallDoc>,
}

/// A program element: a gate call or a nested sequence.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NodeDoc {
    /// A single gate call.
    Call(CallDoc),
    /// A nested sequence.
    Seq(Vec<NodeDoc>),
}

/// One gate call with optional modifiers.
#[derive(Debug, Deserialize)]
pub struct CallDoc {
    /// Gate name, resolved against the gate set.
    pub gate: String,
    /// Operand wires.
    pub qubits: Vec<u32>,
    /// Call-time parameters for parameterized gates.
    #[serde(default)]
    pub params: Vec<f64>,
    /// Control wires (negative = control on |0⟩).
    #[serde(default)]
    pub controls: Vec<i64>,
    /// Explicit control pattern; inferred from wire signs when omitted.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Apply the inverse modifier.
    #[serde(default)]
    pub inv: bool,
}

/// Parse a JSON description and build the gate set and program.
pub fn load(source: &str) -> Result<(GateSet, Program)> {
    let doc: ProgramDoc =
        serde_json::from_str(source).context("Invalid program description")?;

    let mut set = GateSet::with_stdgates();
    for def in &doc.gates {
        let body = def
            .body
            .iter()
            .map(|call| build_call(&set, call))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("In definition of gate '{}'", def.name))?;
        set.define(&def.name, def.arity, body)
            .with_context(|| format!("Declaring gate '{}'", def.name))?;
    }

    let mut program = Program::new();
    for node in &doc.program {
        program.push(build_node(&set, node)?);
    }

    tracing::debug!(
        gates = set.len(),
        definitions = doc.gates.len(),
        "program description loaded"
    );
    Ok((set, program))
}

fn build_node(set: &GateSet, node: &NodeDoc) -> Result<ProgramNode> {
    match node {
        NodeDoc::Call(call) => Ok(ProgramNode::Gate(build_call(set, call)?)),
        NodeDoc::Seq(inner) => Ok(ProgramNode::Seq(
            inner
                .iter()
                .map(|node| build_node(set, node))
                .collect::<Result<Vec<_>>>()?,
        )),
    }
}

fn build_call(set: &GateSet, call: &CallDoc) -> Result<Gate> {
    let id = set.lookup(&call.gate)?;

    let mut gate = if call.params.is_empty() {
        set.gate(id, call.qubits.iter().copied())?
    } else {
        set.bind(id, &call.params)?.at(call.qubits.iter().copied())?
    };

    if call.inv {
        gate = gate.inverted();
    }
    if !call.controls.is_empty() || call.pattern.is_some() {
        gate = gate.with_control(call.pattern.as_deref(), &call.controls)?;
    }
    Ok(gate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_flat_program() {
        let source = r#"{
            "program": [
                { "gate": "h", "qubits": [0] },
                { "gate": "cx", "qubits": [0, 1] }
            ]
        }"#;

        let (set, program) = load(source).unwrap();
        let flat = program.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].opcode, "h");
        assert_eq!(flat[1].opcode, "cx");
        assert!(set.lookup("h").is_ok());
    }

    #[test]
    fn test_load_nested_with_modifiers() {
        let source = r#"{
            "gates": [
                {
                    "name": "foo",
                    "arity": 1,
                    "body": [ { "gate": "h", "qubits": [0] } ]
                }
            ],
            "program": [
                { "gate": "x", "qubits": [1] },
                [
                    { "gate": "foo", "qubits": [0], "inv": true },
                    { "gate": "rx", "qubits": [0], "params": [1.5707963267948966] }
                ],
                { "gate": "h", "qubits": [0], "pattern": "01", "controls": [1, 2] }
            ]
        }"#;

        let (set, program) = load(source).unwrap();
        let flat = program.flatten();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[1].opcode, "inv @ foo");
        assert_eq!(flat[2].opcode, "rx(pi/2)");
        assert_eq!(flat[3].opcode, "negctrl @ ctrl @ h");

        let foo = set.lookup("foo").unwrap();
        assert!(set.def(foo).body.is_some());
    }

    #[test]
    fn test_unknown_gate_reported() {
        let source = r#"{
            "program": [ { "gate": "nope", "qubits": [0] } ]
        }"#;
        assert!(load(source).is_err());
    }

    #[test]
    fn test_arity_error_reported() {
        let source = r#"{
            "program": [ { "gate": "cx", "qubits": [0] } ]
        }"#;
        let err = load(source).unwrap_err();
        assert!(format!("{err:#}").contains("requires 2 wires"));
    }
}
