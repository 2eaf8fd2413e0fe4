//! Gate values and modifier combinators.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::{WireId, WireMap};
use crate::registry::GateTypeId;

/// An applied quantum operation: an opcode plus the wires it acts on.
///
/// Gates are immutable values. The modifier combinators ([`Gate::inverted`],
/// [`Gate::with_control`], [`Gate::relocate`]) return new gates and leave
/// the receiver untouched. `kind` records the gate's class through every
/// modifier, so a composite gate reached only via `inv @` still forces its
/// definition block at emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The gate class this value was built from.
    pub kind: GateTypeId,
    /// Rendered operation name, including any modifier chain and bound
    /// parameters.
    pub opcode: String,
    /// Wires the operation acts on, in operand order.
    pub qubits: Vec<WireId>,
}

impl Gate {
    pub(crate) fn new(kind: GateTypeId, opcode: String, qubits: Vec<WireId>) -> Self {
        Self {
            kind,
            opcode,
            qubits,
        }
    }

    /// The adjoint of this gate.
    #[must_use]
    pub fn inverted(&self) -> Gate {
        Gate {
            kind: self.kind,
            opcode: format!("inv @ {}", self.opcode),
            qubits: self.qubits.clone(),
        }
    }

    /// Control this gate on `control_wires`.
    ///
    /// `pattern` holds one `'0'`/`'1'` character per control wire: `'1'`
    /// controls on |1⟩, anything else controls on |0⟩. When `pattern` is
    /// omitted it is read off the wire signs: a non-negative wire controls
    /// on |1⟩, while a negative wire is the bitwise complement of the wire
    /// to control on |0⟩. Negative wires are normalized either way.
    ///
    /// Control wires are prepended to the gate's own wires, so the emitted
    /// modifier chain binds outermost-first the way OpenQASM 3 reads it:
    /// pattern bit `i` controls on control wire `i`.
    pub fn with_control(&self, pattern: Option<&str>, control_wires: &[i64]) -> IrResult<Gate> {
        let derived;
        let pattern = match pattern {
            Some(p) => p,
            None => {
                derived = control_wires
                    .iter()
                    .map(|&w| if w >= 0 { '1' } else { '0' })
                    .collect::<String>();
                derived.as_str()
            }
        };
        if pattern.len() != control_wires.len() {
            return Err(IrError::InvalidControlPattern {
                pattern: pattern.to_string(),
                wires: control_wires.len(),
            });
        }

        let mut qubits: Vec<WireId> = control_wires
            .iter()
            .map(|&w| {
                let index = if w < 0 { !w } else { w };
                WireId(u32::try_from(index).expect("wire index overflow: exceeds u32::MAX"))
            })
            .collect();
        qubits.extend(self.qubits.iter().copied());

        let mut opcode = String::new();
        for bit in pattern.chars() {
            opcode.push_str(if bit == '1' { "ctrl @ " } else { "negctrl @ " });
        }
        opcode.push_str(&self.opcode);

        Ok(Gate {
            kind: self.kind,
            opcode,
            qubits,
        })
    }

    /// Shorthand control application accepting the compact [`Ctrl`] forms.
    pub fn controlled(&self, ctrl: impl Into<Ctrl>) -> IrResult<Gate> {
        match ctrl.into() {
            Ctrl::Wire(wire) => self.with_control(None, &[wire]),
            Ctrl::Wires(wires) => self.with_control(None, &wires),
            Ctrl::Pattern(pattern, wires) => self.with_control(Some(&pattern), &wires),
        }
    }

    /// Remap every wire of this gate through `map`.
    ///
    /// Every wire must have an entry; a missing wire is an error, never a
    /// silent drop.
    pub fn relocate(&self, map: &WireMap) -> IrResult<Gate> {
        let qubits = self
            .qubits
            .iter()
            .map(|wire| {
                map.get(wire).copied().ok_or_else(|| IrError::UnmappedWire {
                    wire: *wire,
                    gate: self.opcode.clone(),
                })
            })
            .collect::<IrResult<Vec<_>>>()?;
        Ok(Gate {
            kind: self.kind,
            opcode: self.opcode.clone(),
            qubits,
        })
    }

    /// Largest wire index this gate touches, if it touches any.
    pub fn max_wire(&self) -> Option<WireId> {
        self.qubits.iter().copied().max()
    }
}

/// Compact control designators for [`Gate::controlled`].
///
/// The `From` conversions cover the shorthand call sites: a single wire, a
/// bare wire list (pattern inferred from signs), or an explicit pattern
/// with its wires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ctrl {
    /// A single control wire (negative = control on |0⟩).
    Wire(i64),
    /// Control wires with the pattern inferred from their signs.
    Wires(Vec<i64>),
    /// An explicit `'0'`/`'1'` pattern and its control wires.
    Pattern(String, Vec<i64>),
}

impl From<i64> for Ctrl {
    fn from(wire: i64) -> Self {
        Ctrl::Wire(wire)
    }
}

impl From<Vec<i64>> for Ctrl {
    fn from(wires: Vec<i64>) -> Self {
        Ctrl::Wires(wires)
    }
}

impl<const N: usize> From<[i64; N]> for Ctrl {
    fn from(wires: [i64; N]) -> Self {
        Ctrl::Wires(wires.to_vec())
    }
}

impl From<(&str, Vec<i64>)> for Ctrl {
    fn from((pattern, wires): (&str, Vec<i64>)) -> Self {
        Ctrl::Pattern(pattern.to_string(), wires)
    }
}

impl<const N: usize> From<(&str, [i64; N])> for Ctrl {
    fn from((pattern, wires): (&str, [i64; N])) -> Self {
        Ctrl::Pattern(pattern.to_string(), wires.to_vec())
    }
}
