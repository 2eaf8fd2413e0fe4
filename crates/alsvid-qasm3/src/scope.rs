//! Wire naming scopes.

use alsvid_ir::WireId;

/// Naming convention for emitted wire references.
///
/// Top-level instructions address the global program register (`reg[3]`);
/// instructions inside a definition block address the block's formal
/// parameters (`q3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QubitScope {
    /// Global register indexing.
    Global {
        /// Name of the global register.
        register: String,
    },
    /// Local formal-parameter naming.
    Local,
}

impl QubitScope {
    /// Render a single wire reference.
    pub fn wire(&self, wire: WireId) -> String {
        match self {
            QubitScope::Global { register } => format!("{register}[{wire}]"),
            QubitScope::Local => format!("q{wire}"),
        }
    }

    /// Render a comma-separated wire list.
    pub fn wire_list(&self, wires: &[WireId]) -> String {
        wires
            .iter()
            .map(|wire| self.wire(*wire))
            .collect::<Vec<_>>()
            .join(",")
    }
}
