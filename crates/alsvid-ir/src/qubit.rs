//! Wire addressing types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a wire (qubit line) within a program or definition body.
///
/// Inside a definition body the index is local to the body's formal
/// parameters; at the top level it addresses the global program register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

impl From<usize> for WireId {
    fn from(id: usize) -> Self {
        WireId(u32::try_from(id).expect("WireId overflow: exceeds u32::MAX"))
    }
}

/// Wire-to-wire mapping used during relocation.
pub type WireMap = FxHashMap<WireId, WireId>;

/// Build a [`WireMap`] from `(from, to)` pairs.
pub fn wire_map<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> WireMap
where
    A: Into<WireId>,
    B: Into<WireId>,
{
    pairs
        .into_iter()
        .map(|(from, to)| (from.into(), to.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_display() {
        assert_eq!(format!("{}", WireId(7)), "7");
    }

    #[test]
    fn test_wire_map_from_pairs() {
        let map = wire_map([(0u32, 4u32), (1, 7)]);
        assert_eq!(map[&WireId(0)], WireId(4));
        assert_eq!(map[&WireId(1)], WireId(7));
    }
}
