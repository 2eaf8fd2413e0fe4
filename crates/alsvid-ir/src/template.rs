//! Reusable circuit templates parameterized over registers.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::WireMap;
use crate::register::QReg;

/// A reusable program body parameterized over named formal registers.
///
/// Templates are plain data: declaration (via [`TemplateBuilder`]) and
/// invocation ([`CircuitTemplate::instantiate`]) are fully decoupled, and
/// one template can be instantiated any number of times against different
/// actual registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitTemplate {
    /// Formal registers in declaration order. Their wires form one
    /// contiguous zero-based range across the sequence.
    pub formals: Vec<QReg>,
    /// Template body over the formal registers' local wires.
    pub body: Vec<Gate>,
}

impl CircuitTemplate {
    /// Formal register named `name`.
    pub fn formal(&self, name: &str) -> Option<&QReg> {
        self.formals.iter().find(|reg| reg.name == name)
    }

    /// Bind actual registers and relocate the body onto their wires.
    ///
    /// The binding set must name exactly the formal registers, and each
    /// actual register must be at least as large as its formal counterpart.
    /// Each formal register's wires are zipped positionally to the actual
    /// register's wires; the body is relocated through the combined map.
    pub fn instantiate(&self, actuals: &[QReg]) -> IrResult<Vec<Gate>> {
        for (index, actual) in actuals.iter().enumerate() {
            if self.formal(&actual.name).is_none() {
                return Err(IrError::UnknownRegister(actual.name.clone()));
            }
            if actuals[..index].iter().any(|seen| seen.name == actual.name) {
                return Err(IrError::UnknownRegister(actual.name.clone()));
            }
        }

        let mut map = WireMap::default();
        for formal in &self.formals {
            let actual = actuals
                .iter()
                .find(|reg| reg.name == formal.name)
                .ok_or_else(|| IrError::MissingRegister(formal.name.clone()))?;
            if actual.size() < formal.size() {
                return Err(IrError::RegisterArityMismatch {
                    register: formal.name.clone(),
                    expected: formal.size(),
                    got: actual.size(),
                });
            }
            for (from, to) in formal.wires.iter().zip(&actual.wires) {
                map.insert(*from, *to);
            }
        }

        self.body.iter().map(|gate| gate.relocate(&map)).collect()
    }
}

/// Incremental construction of a [`CircuitTemplate`].
///
/// Formal registers receive contiguous zero-based wire ranges in
/// declaration order; the returned [`QReg`] supplies the local wires for
/// building the body.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    formals: Vec<QReg>,
    next_wire: u32,
    body: Vec<Gate>,
}

impl TemplateBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a formal register of `size` wires.
    pub fn qreg(&mut self, name: impl Into<String>, size: u32) -> QReg {
        let reg = QReg::range(name, self.next_wire, size);
        self.next_wire += size;
        self.formals.push(reg.clone());
        reg
    }

    /// Append a gate to the body.
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.body.push(gate);
        self
    }

    /// Append a flat gate sequence to the body.
    pub fn extend(&mut self, gates: impl IntoIterator<Item = Gate>) -> &mut Self {
        self.body.extend(gates);
        self
    }

    /// Finish, validating that the body only references declared wires.
    pub fn build(self) -> IrResult<CircuitTemplate> {
        for gate in &self.body {
            for &wire in &gate.qubits {
                if wire.0 >= self.next_wire {
                    return Err(IrError::UnmappedWire {
                        wire,
                        gate: gate.opcode.clone(),
                    });
                }
            }
        }
        Ok(CircuitTemplate {
            formals: self.formals,
            body: self.body,
        })
    }
}
