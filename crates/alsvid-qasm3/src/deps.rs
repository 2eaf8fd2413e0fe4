//! Gate-class dependency collection and ordering.

use alsvid_ir::{Gate, GateSet, GateTypeId};
use petgraph::graph::DiGraph;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{EmitError, EmitResult};

/// Gate classes required by `gates`, in a valid definition order.
///
/// The needed set is the class of every gate in the stream plus each
/// class's precomputed dependency closure. Ordering is a topological sort
/// over the direct body references between needed classes; nodes enter the
/// graph in first-discovery order (stream order, then each class's
/// closure in ascending id order), so the result is deterministic for a
/// given program. A class never precedes one of its dependencies.
pub fn definition_order(gates: &[Gate], set: &GateSet) -> EmitResult<Vec<GateTypeId>> {
    let mut needed: Vec<GateTypeId> = Vec::new();
    let mut seen: FxHashSet<GateTypeId> = FxHashSet::default();
    for gate in gates {
        if seen.insert(gate.kind) {
            needed.push(gate.kind);
        }
        let mut deps: Vec<GateTypeId> = set.def(gate.kind).dependencies.iter().copied().collect();
        deps.sort_unstable();
        for dep in deps {
            if seen.insert(dep) {
                needed.push(dep);
            }
        }
    }

    let mut graph: DiGraph<GateTypeId, ()> = DiGraph::new();
    let mut nodes = FxHashMap::default();
    for &id in &needed {
        nodes.insert(id, graph.add_node(id));
    }
    // Edge dep → dependent for each direct body reference, so the sort
    // yields dependencies first.
    for &id in &needed {
        if let Some(body) = &set.def(id).body {
            for gate in body {
                if let Some(&dep_node) = nodes.get(&gate.kind) {
                    graph.update_edge(dep_node, nodes[&id], ());
                }
            }
        }
    }

    let sorted = petgraph::algo::toposort(&graph, None).map_err(|cycle| {
        EmitError::CyclicGateDependency {
            name: set.def(graph[cycle.node_id()]).name.clone(),
        }
    })?;
    Ok(sorted.into_iter().map(|node| graph[node]).collect())
}
