use petgraph::graph::{EdgeIndex, NodeIndex};

/// A ring found by [`find_ring`](crate::find_ring).
///
/// `atoms` is a closed walk without its repeated endpoint: bond `i` joins
/// `atoms[i]` and `atoms[(i + 1) % len]`, so both sequences have the same
/// length. The first atom is the search origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
    aromatic: bool,
}

impl Ring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring from already-ordered sequences without checking that
    /// they form a cycle.
    pub fn from_parts(atoms: Vec<NodeIndex>, bonds: Vec<EdgeIndex>) -> Self {
        Self {
            atoms,
            bonds,
            aromatic: false,
        }
    }

    pub fn set_atoms(&mut self, atoms: Vec<NodeIndex>) {
        self.atoms = atoms;
    }

    pub fn set_bonds(&mut self, bonds: Vec<EdgeIndex>) {
        self.bonds = bonds;
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn contains_atom(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn contains_bond(&self, bond: EdgeIndex) -> bool {
        self.bonds.contains(&bond)
    }

    pub fn is_aromatic(&self) -> bool {
        self.aromatic
    }

    pub fn set_aromatic(&mut self, aromatic: bool) {
        self.aromatic = aromatic;
    }

    /// Atoms rotated to start at the lowest index and oriented towards the
    /// lower of its two ring neighbours.
    pub fn canonical_atoms(&self) -> Vec<NodeIndex> {
        let len = self.atoms.len();
        let Some(min_pos) = self
            .atoms
            .iter()
            .enumerate()
            .min_by_key(|&(_, idx)| idx)
            .map(|(i, _)| i)
        else {
            return vec![];
        };

        let mut normalized: Vec<NodeIndex> =
            (0..len).map(|i| self.atoms[(min_pos + i) % len]).collect();
        if len > 2 && normalized[1] > normalized[len - 1] {
            normalized[1..].reverse();
        }
        normalized
    }

    /// True if both rings trace the same physical cycle, whatever atom they
    /// start from and whichever way round they run.
    pub fn same_cycle(&self, other: &Ring) -> bool {
        if self.size() != other.size() {
            return false;
        }
        let mut mine = self.bonds.clone();
        let mut theirs = other.bonds.clone();
        mine.sort();
        theirs.sort();
        mine == theirs && self.canonical_atoms() == other.canonical_atoms()
    }
}
