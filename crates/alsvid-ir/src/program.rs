//! Nested gate streams and flattening.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;

/// One element of a nested gate stream: a gate, or a nested sequence.
///
/// The nesting is a tree of values, so flattening always terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgramNode {
    /// A single gate.
    Gate(Gate),
    /// A nested sequence, expanded in place during flattening.
    Seq(Vec<ProgramNode>),
}

impl From<Gate> for ProgramNode {
    fn from(gate: Gate) -> Self {
        ProgramNode::Gate(gate)
    }
}

impl From<Vec<Gate>> for ProgramNode {
    fn from(gates: Vec<Gate>) -> Self {
        ProgramNode::Seq(gates.into_iter().map(ProgramNode::Gate).collect())
    }
}

impl From<Vec<ProgramNode>> for ProgramNode {
    fn from(nodes: Vec<ProgramNode>) -> Self {
        ProgramNode::Seq(nodes)
    }
}

/// A top-level program: an ordered, arbitrarily nested gate stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level elements in program order.
    pub nodes: Vec<ProgramNode>,
}

impl Program {
    /// Empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element: a gate, a flat gate sequence, or a nested
    /// fragment.
    pub fn push(&mut self, node: impl Into<ProgramNode>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Depth-first, left-to-right expansion into a flat gate list.
    ///
    /// Relative gate order is preserved; empty sequences contribute
    /// nothing.
    pub fn flatten(&self) -> Vec<Gate> {
        fn walk(nodes: &[ProgramNode], out: &mut Vec<Gate>) {
            for node in nodes {
                match node {
                    ProgramNode::Gate(gate) => out.push(gate.clone()),
                    ProgramNode::Seq(inner) => walk(inner, out),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    /// Whether the program holds no gates at all.
    pub fn is_empty(&self) -> bool {
        fn empty(nodes: &[ProgramNode]) -> bool {
            nodes.iter().all(|node| match node {
                ProgramNode::Gate(_) => false,
                ProgramNode::Seq(inner) => empty(inner),
            })
        }
        empty(&self.nodes)
    }
}

impl FromIterator<ProgramNode> for Program {
    fn from_iter<I: IntoIterator<Item = ProgramNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Number of wires a flattened gate list requires: max index + 1.
pub fn wire_count(gates: &[Gate]) -> u32 {
    gates
        .iter()
        .filter_map(Gate::max_wire)
        .map(|wire| wire.0 + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::GateSet;
    use proptest::prelude::*;

    fn sample_gates(n: u32) -> Vec<Gate> {
        let gates = GateSet::with_stdgates();
        let h = gates.lookup("h").unwrap();
        (0..n).map(|i| gates.gate(h, [i]).unwrap()).collect()
    }

    #[test]
    fn test_flatten_preserves_order() {
        let gs = sample_gates(3);
        let mut program = Program::new();
        program.push(gs[0].clone());
        program.push(vec![gs[1].clone(), gs[2].clone()]);

        let flat = program.flatten();
        assert_eq!(flat, gs);
    }

    #[test]
    fn test_flatten_matches_unnested() {
        let gs = sample_gates(3);

        // [[a, b], [c]] flattens the same as [a, b, c].
        let mut nested = Program::new();
        nested.push(vec![gs[0].clone(), gs[1].clone()]);
        nested.push(vec![gs[2].clone()]);

        let mut flat = Program::new();
        for gate in &gs {
            flat.push(gate.clone());
        }

        assert_eq!(nested.flatten(), flat.flatten());
    }

    #[test]
    fn test_empty_sequences_contribute_nothing() {
        let gs = sample_gates(1);
        let mut program = Program::new();
        program.push(ProgramNode::Seq(vec![]));
        program.push(gs[0].clone());
        program.push(ProgramNode::Seq(vec![ProgramNode::Seq(vec![])]));

        assert_eq!(program.flatten(), gs);
        assert!(!program.is_empty());
        assert!(Program::new().is_empty());
    }

    #[test]
    fn test_wire_count() {
        let gates = GateSet::with_stdgates();
        let cx = gates.lookup("cx").unwrap();
        let stream = vec![gates.gate(cx, [2u32, 7]).unwrap()];
        assert_eq!(wire_count(&stream), 8);
        assert_eq!(wire_count(&[]), 0);
    }

    proptest! {
        /// Arbitrary re-nesting of a gate list flattens back to the list.
        #[test]
        fn prop_flatten_ignores_nesting(splits in prop::collection::vec(0usize..4, 1..6)) {
            let gs = sample_gates(splits.len() as u32);

            let mut nested = Program::new();
            let mut flat = Program::new();
            let mut chunk: Vec<ProgramNode> = Vec::new();
            for (gate, depth) in gs.iter().zip(&splits) {
                flat.push(gate.clone());
                let mut node = ProgramNode::Gate(gate.clone());
                for _ in 0..*depth {
                    node = ProgramNode::Seq(vec![node]);
                }
                chunk.push(node);
            }
            nested.push(ProgramNode::Seq(chunk));

            prop_assert_eq!(nested.flatten(), flat.flatten());
        }
    }
}
