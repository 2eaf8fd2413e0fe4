//! Gate classes: the registry of definitions and their dependencies.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::param::format_angle;
use crate::program::wire_count;
use crate::qubit::WireId;

/// Identifier of a gate class within a [`GateSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GateTypeId(pub u32);

/// Standard gates with known names and arities.
///
/// This is the `stdgates.inc` vocabulary: every member is target-native and
/// produces no definition block in emitted programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Phase gate.
    P,
    /// Universal single-qubit gate U(θ, φ, λ).
    U,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// SWAP gate.
    Swap,
    /// Controlled rotation around X.
    CRx,
    /// Controlled rotation around Y.
    CRy,
    /// Controlled rotation around Z.
    CRz,
    /// Controlled phase gate.
    CP,
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,
}

impl StandardGate {
    /// Every standard gate, in registration order.
    pub const ALL: [StandardGate; 26] = [
        StandardGate::I,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::H,
        StandardGate::S,
        StandardGate::Sdg,
        StandardGate::T,
        StandardGate::Tdg,
        StandardGate::SX,
        StandardGate::Rx,
        StandardGate::Ry,
        StandardGate::Rz,
        StandardGate::P,
        StandardGate::U,
        StandardGate::CX,
        StandardGate::CY,
        StandardGate::CZ,
        StandardGate::CH,
        StandardGate::Swap,
        StandardGate::CRx,
        StandardGate::CRy,
        StandardGate::CRz,
        StandardGate::CP,
        StandardGate::CCX,
        StandardGate::CSwap,
    ];

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::Rx => "rx",
            StandardGate::Ry => "ry",
            StandardGate::Rz => "rz",
            StandardGate::P => "p",
            StandardGate::U => "u",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CH => "ch",
            StandardGate::Swap => "swap",
            StandardGate::CRx => "crx",
            StandardGate::CRy => "cry",
            StandardGate::CRz => "crz",
            StandardGate::CP => "cp",
            StandardGate::CCX => "ccx",
            StandardGate::CSwap => "cswap",
        }
    }

    /// Get the number of wires this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::SX
            | StandardGate::Rx
            | StandardGate::Ry
            | StandardGate::Rz
            | StandardGate::P
            | StandardGate::U => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CH
            | StandardGate::Swap
            | StandardGate::CRx
            | StandardGate::CRy
            | StandardGate::CRz
            | StandardGate::CP => 2,

            StandardGate::CCX | StandardGate::CSwap => 3,
        }
    }

    /// Number of angle parameters bound at call time.
    #[inline]
    pub fn num_params(&self) -> usize {
        match self {
            StandardGate::Rx
            | StandardGate::Ry
            | StandardGate::Rz
            | StandardGate::P
            | StandardGate::CRx
            | StandardGate::CRy
            | StandardGate::CRz
            | StandardGate::CP => 1,

            StandardGate::U => 3,

            _ => 0,
        }
    }
}

/// Metadata record for one gate class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDef {
    /// Gate name; doubles as the default opcode.
    pub name: String,
    /// Fixed wire count, when the class declares one.
    pub arity: Option<u32>,
    /// Number of call-time parameters (0 for ordinary gates).
    pub params: usize,
    /// Definition body over local wires. `None` marks a target-native
    /// primitive requiring no definition block.
    pub body: Option<Vec<Gate>>,
    /// Transitive closure of gate classes referenced by `body`.
    pub dependencies: FxHashSet<GateTypeId>,
}

/// Registry of gate classes.
///
/// Replaces class-creation hooks with an explicit table: declaring a class
/// records its metadata once, and composite declarations compute their
/// dependency closure immediately from the already-registered classes they
/// reference. The closure of a class is the set of body classes that
/// themselves carry a body, unioned with those classes' own closures.
#[derive(Debug, Clone, Default)]
pub struct GateSet {
    defs: Vec<GateDef>,
    by_name: FxHashMap<String, GateTypeId>,
}

impl GateSet {
    /// Empty gate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate set pre-populated with the [`StandardGate`] vocabulary.
    pub fn with_stdgates() -> Self {
        let mut set = Self::new();
        for gate in StandardGate::ALL {
            set.register(GateDef {
                name: gate.name().to_string(),
                arity: Some(gate.num_qubits()),
                params: gate.num_params(),
                body: None,
                dependencies: FxHashSet::default(),
            });
        }
        set
    }

    /// Assemble a gate set from raw records.
    ///
    /// No closure or cycle validation happens here; the emitter's
    /// topological sort is the backstop for hand-assembled records.
    pub fn from_defs(defs: Vec<GateDef>) -> Self {
        let by_name = defs
            .iter()
            .enumerate()
            .map(|(index, def)| (def.name.clone(), GateTypeId(index as u32)))
            .collect();
        Self { defs, by_name }
    }

    /// Declare a primitive (opaque) gate class with no definition body.
    pub fn declare(&mut self, name: impl Into<String>, arity: impl Into<Option<u32>>) -> GateTypeId {
        self.register(GateDef {
            name: name.into(),
            arity: arity.into(),
            params: 0,
            body: None,
            dependencies: FxHashSet::default(),
        })
    }

    /// Declare a primitive gate class taking `params` call-time parameters.
    pub fn declare_parameterized(
        &mut self,
        name: impl Into<String>,
        arity: impl Into<Option<u32>>,
        params: usize,
    ) -> GateTypeId {
        self.register(GateDef {
            name: name.into(),
            arity: arity.into(),
            params,
            body: None,
            dependencies: FxHashSet::default(),
        })
    }

    /// Declare a composite gate class with a definition body.
    ///
    /// The dependency closure is computed here, once. Body gates must have
    /// been built from classes already registered in this set, which also
    /// means a well-formed registration order can never produce a cycle.
    /// When `arity` is declared, the body must fit inside it.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        arity: impl Into<Option<u32>>,
        body: Vec<Gate>,
    ) -> IrResult<GateTypeId> {
        let name = name.into();
        let arity = arity.into();

        if let Some(expected) = arity {
            let used = wire_count(&body);
            if used > expected {
                return Err(IrError::ArityMismatch {
                    gate: name,
                    expected,
                    got: used,
                });
            }
        }

        let mut dependencies = FxHashSet::default();
        for gate in &body {
            let def = self
                .get(gate.kind)
                .ok_or_else(|| IrError::UnknownGate(gate.opcode.clone()))?;
            if def.body.is_some() {
                dependencies.insert(gate.kind);
                dependencies.extend(def.dependencies.iter().copied());
            }
        }

        Ok(self.register(GateDef {
            name,
            arity,
            params: 0,
            body: Some(body),
            dependencies,
        }))
    }

    fn register(&mut self, def: GateDef) -> GateTypeId {
        let id = GateTypeId(self.defs.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.defs.push(def);
        id
    }

    /// Look up a gate class by name.
    pub fn lookup(&self, name: &str) -> IrResult<GateTypeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| IrError::UnknownGate(name.to_string()))
    }

    /// Metadata for `id`, if it belongs to this set.
    pub fn get(&self, id: GateTypeId) -> Option<&GateDef> {
        self.defs.get(id.0 as usize)
    }

    /// Metadata for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different gate set.
    pub fn def(&self, id: GateTypeId) -> &GateDef {
        self.get(id).expect("gate id issued by a different gate set")
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether no classes are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all registered classes.
    pub fn iter(&self) -> impl Iterator<Item = (GateTypeId, &GateDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(index, def)| (GateTypeId(index as u32), def))
    }

    /// Instantiate class `id` on concrete wires.
    pub fn gate<I, W>(&self, id: GateTypeId, qubits: I) -> IrResult<Gate>
    where
        I: IntoIterator<Item = W>,
        W: Into<WireId>,
    {
        let def = self.def(id);
        if def.params > 0 {
            return Err(IrError::ParameterCountMismatch {
                gate: def.name.clone(),
                expected: def.params,
                got: 0,
            });
        }
        let qubits: Vec<WireId> = qubits.into_iter().map(Into::into).collect();
        check_arity(&def.name, def.arity, &qubits)?;
        Ok(Gate::new(id, def.name.clone(), qubits))
    }

    /// Bind call-time parameters, producing a reusable gate generator.
    pub fn bind(&self, id: GateTypeId, params: &[f64]) -> IrResult<BoundGate> {
        let def = self.def(id);
        if params.len() != def.params || def.params == 0 {
            return Err(IrError::ParameterCountMismatch {
                gate: def.name.clone(),
                expected: def.params,
                got: params.len(),
            });
        }
        let rendered: Vec<String> = params.iter().map(|p| format_angle(*p)).collect();
        Ok(BoundGate {
            kind: id,
            name: def.name.clone(),
            opcode: format!("{}({})", def.name, rendered.join(",")),
            arity: def.arity,
        })
    }
}

fn check_arity(name: &str, arity: Option<u32>, qubits: &[WireId]) -> IrResult<()> {
    if let Some(expected) = arity {
        if qubits.len() as u32 != expected {
            return Err(IrError::ArityMismatch {
                gate: name.to_string(),
                expected,
                got: qubits.len() as u32,
            });
        }
    }
    Ok(())
}

/// A parameterized gate class with its parameters bound.
///
/// The bound opcode embeds the literal parameter list (`rx(pi/2)`), so the
/// class stays a leaf in the dependency graph; calling [`BoundGate::at`]
/// yields gate values, any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundGate {
    kind: GateTypeId,
    name: String,
    opcode: String,
    arity: Option<u32>,
}

impl BoundGate {
    /// Instantiate on concrete wires.
    pub fn at<I, W>(&self, qubits: I) -> IrResult<Gate>
    where
        I: IntoIterator<Item = W>,
        W: Into<WireId>,
    {
        let qubits: Vec<WireId> = qubits.into_iter().map(Into::into).collect();
        check_arity(&self.name, self.arity, &qubits)?;
        Ok(Gate::new(self.kind, self.opcode.clone(), qubits))
    }

    /// The bound opcode, parameters included.
    pub fn opcode(&self) -> &str {
        &self.opcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);

        assert_eq!(StandardGate::H.num_params(), 0);
        assert_eq!(StandardGate::Rx.num_params(), 1);
        assert_eq!(StandardGate::U.num_params(), 3);
    }

    #[test]
    fn test_stdgates_registration() {
        let gates = GateSet::with_stdgates();
        assert_eq!(gates.len(), StandardGate::ALL.len());

        let cx = gates.lookup("cx").unwrap();
        assert_eq!(gates.def(cx).arity, Some(2));
        assert!(gates.def(cx).body.is_none());
    }

    #[test]
    fn test_gate_construction_checks_arity() {
        let gates = GateSet::with_stdgates();
        let cx = gates.lookup("cx").unwrap();

        let gate = gates.gate(cx, [0u32, 1]).unwrap();
        assert_eq!(gate.opcode, "cx");

        let err = gates.gate(cx, [0u32]).unwrap_err();
        assert!(matches!(
            err,
            IrError::ArityMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_name() {
        let gates = GateSet::with_stdgates();
        assert!(matches!(
            gates.lookup("frobnicate"),
            Err(IrError::UnknownGate(_))
        ));
    }

    #[test]
    fn test_define_computes_closure() {
        let mut gates = GateSet::with_stdgates();
        let h = gates.lookup("h").unwrap();
        let cx = gates.lookup("cx").unwrap();

        let foo = gates
            .define("foo", 1, vec![gates.gate(h, [0u32]).unwrap()])
            .unwrap();
        let bar = gates
            .define(
                "bar",
                3,
                vec![
                    gates.gate(cx, [0u32, 1]).unwrap(),
                    gates.gate(foo, [1u32]).unwrap(),
                    gates.gate(cx, [1u32, 2]).unwrap(),
                ],
            )
            .unwrap();

        // Primitives are excluded; composite members carry their closures.
        assert!(gates.def(foo).dependencies.is_empty());
        assert_eq!(gates.def(bar).dependencies.len(), 1);
        assert!(gates.def(bar).dependencies.contains(&foo));

        let baz = gates
            .define("baz", 3, vec![gates.gate(bar, [0u32, 1, 2]).unwrap()])
            .unwrap();
        assert!(gates.def(baz).dependencies.contains(&bar));
        assert!(gates.def(baz).dependencies.contains(&foo));
    }

    #[test]
    fn test_define_rejects_oversized_body() {
        let mut gates = GateSet::with_stdgates();
        let h = gates.lookup("h").unwrap();
        let err = gates
            .define("tiny", 1, vec![gates.gate(h, [3u32]).unwrap()])
            .unwrap_err();
        assert!(matches!(err, IrError::ArityMismatch { expected: 1, .. }));
    }

    #[test]
    fn test_bind_parameterized() {
        let gates = GateSet::with_stdgates();
        let rx = gates.lookup("rx").unwrap();

        let quarter = gates.bind(rx, &[PI / 2.0]).unwrap();
        assert_eq!(quarter.opcode(), "rx(pi/2)");

        // A generator can be applied repeatedly.
        let a = quarter.at([0u32]).unwrap();
        let b = quarter.at([4u32]).unwrap();
        assert_eq!(a.opcode, b.opcode);
        assert_ne!(a.qubits, b.qubits);

        let err = gates.bind(rx, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            IrError::ParameterCountMismatch {
                expected: 1,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_parameterized_requires_binding() {
        let gates = GateSet::with_stdgates();
        let rx = gates.lookup("rx").unwrap();
        let err = gates.gate(rx, [0u32]).unwrap_err();
        assert!(matches!(err, IrError::ParameterCountMismatch { .. }));
    }

    #[test]
    fn test_declare_parameterized_custom() {
        let mut gates = GateSet::new();
        let u1 = gates.declare_parameterized("u1", 1, 1);
        let bound = gates.bind(u1, &[0.0]).unwrap();
        assert_eq!(bound.opcode(), "u1(0.000000)");
        assert!(bound.at([0u32, 1]).is_err());
    }
}
