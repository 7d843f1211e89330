use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::{debug, trace};

use crate::mol::Mol;
use crate::ring::Ring;

/// Slack on the half-ring depth bound so odd-sized rings, whose two arms
/// differ in length by one, still close.
const HALF_RING_SLACK: f64 = 0.1;

/// Where a ring search starts.
///
/// A bond origin searches from its first endpoint and only reports rings
/// that run through the bond itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingOrigin {
    Atom(NodeIndex),
    Bond(EdgeIndex),
}

impl From<NodeIndex> for RingOrigin {
    fn from(atom: NodeIndex) -> Self {
        Self::Atom(atom)
    }
}

impl From<EdgeIndex> for RingOrigin {
    fn from(bond: EdgeIndex) -> Self {
        Self::Bond(bond)
    }
}

/// Constraints and enumeration policy for [`find_ring`].
///
/// Every field has a neutral default, so callers only spell out what they
/// need:
///
/// ```
/// use ringcrab::FindRingOptions;
///
/// let six_rings = FindRingOptions {
///     all: true,
///     size: Some(6),
///     ..FindRingOptions::default()
/// };
/// assert_eq!(six_rings.size_bounds(), (6, Some(6)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FindRingOptions {
    /// Report every qualifying ring instead of stopping at the first.
    pub all: bool,
    /// Smallest accepted ring, counted in atoms.
    pub min: usize,
    /// Largest accepted ring. Also bounds how deep the search goes.
    pub max: Option<usize>,
    /// Exact ring size; overrides both `min` and `max` when set.
    pub size: Option<usize>,
    /// Atoms no reported ring may contain.
    pub exclude: HashSet<NodeIndex>,
    /// Report each ring once per direction of travel.
    pub mirror: bool,
}

impl FindRingOptions {
    /// Effective `(min, max)` after applying `size`.
    pub fn size_bounds(&self) -> (usize, Option<usize>) {
        match self.size {
            Some(size) => (size, Some(size)),
            None => (self.min, self.max),
        }
    }
}

/// Finds rings through `origin`.
///
/// The search is breadth-first, so along any one pair of branches out of
/// the origin the first ring that closes is the smallest. With
/// `options.all` unset the result holds at most one ring; otherwise it holds
/// every accepted ring in the order the search closed them. A ring that
/// strictly contains a smaller ring already accepted is dropped.
///
/// This is not an SSSR: rings that only close between branches the search
/// never brings together (the outer ring of a bridged system seen from a
/// bridgehead, for instance) are not reported.
///
/// # Examples
///
/// ```
/// use ringcrab::{find_ring, Atom, Bond, FindRingOptions, Mol};
///
/// let mut mol = Mol::new();
/// let atoms: Vec<_> = (0..6).map(|_| mol.add_atom(Atom::carbon(2))).collect();
/// for i in 0..6 {
///     mol.add_bond(atoms[i], atoms[(i + 1) % 6], Bond::single());
/// }
///
/// let rings = find_ring(&mol, atoms[0], &FindRingOptions::default());
/// assert_eq!(rings.len(), 1);
/// assert_eq!(rings[0].size(), 6);
/// assert_eq!(rings[0].atoms()[0], atoms[0]);
/// ```
pub fn find_ring<A, B>(
    mol: &Mol<A, B>,
    origin: impl Into<RingOrigin>,
    options: &FindRingOptions,
) -> Vec<Ring> {
    let origin = origin.into();
    let (start, required_bond) = match origin {
        RingOrigin::Atom(atom) => (atom, None),
        RingOrigin::Bond(bond) => match mol.bond_endpoints(bond) {
            Some((a, _)) => (a, Some(bond)),
            None => {
                debug!(bond = bond.index(), "ring origin bond not in molecule");
                return vec![];
            }
        },
    };

    let (min_size, max_size) = options.size_bounds();
    debug!(
        ?origin,
        min_size,
        ?max_size,
        all = options.all,
        "searching for rings"
    );

    if options.exclude.contains(&start) {
        debug!(atom = start.index(), "ring origin is excluded");
        return vec![];
    }

    let rings = Traversal::new(start, required_bond, options).run(mol);
    debug!(?origin, found = rings.len(), "ring search finished");
    rings
}

/// How the search reached one atom. Written once, when the atom is first
/// seen, and never updated.
#[derive(Debug)]
struct PathRecord {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
}

impl PathRecord {
    fn origin(atom: NodeIndex) -> Self {
        Self {
            atoms: vec![atom],
            bonds: vec![],
        }
    }

    fn extended(&self, bond: EdgeIndex, atom: NodeIndex) -> Self {
        let mut atoms = Vec::with_capacity(self.atoms.len() + 1);
        atoms.extend_from_slice(&self.atoms);
        atoms.push(atom);
        let mut bonds = Vec::with_capacity(self.bonds.len() + 1);
        bonds.extend_from_slice(&self.bonds);
        bonds.push(bond);
        Self { atoms, bonds }
    }

    fn len(&self) -> usize {
        self.atoms.len()
    }

    /// The atom this path arrived from.
    fn previous(&self) -> Option<NodeIndex> {
        self.atoms.len().checked_sub(2).map(|i| self.atoms[i])
    }

    /// First atom after the origin, identifying which branch the path took.
    fn branch(&self) -> Option<NodeIndex> {
        self.atoms.get(1).copied()
    }
}

/// Why a collision did not become a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    SameBranch,
    Size,
    Mirror,
    MissingBond,
    Contains,
}

/// All mutable state of one search.
struct Traversal<'o> {
    options: &'o FindRingOptions,
    min_size: usize,
    max_size: Option<usize>,
    required_bond: Option<EdgeIndex>,
    paths: HashMap<NodeIndex, PathRecord>,
    queue: VecDeque<NodeIndex>,
    used_terminals: HashSet<NodeIndex>,
    rings: Vec<Ring>,
}

impl<'o> Traversal<'o> {
    fn new(
        start: NodeIndex,
        required_bond: Option<EdgeIndex>,
        options: &'o FindRingOptions,
    ) -> Self {
        let (min_size, max_size) = options.size_bounds();
        let mut paths = HashMap::new();
        paths.insert(start, PathRecord::origin(start));
        Self {
            options,
            min_size,
            max_size,
            required_bond,
            paths,
            queue: VecDeque::from([start]),
            used_terminals: HashSet::new(),
            rings: Vec::new(),
        }
    }

    fn run<A, B>(mut self, mol: &Mol<A, B>) -> Vec<Ring> {
        while let Some(a) = self.queue.pop_front() {
            let Some(from) = self.paths.get(&a).map(PathRecord::previous) else {
                continue;
            };
            for (bond, nei) in mol.neighbors_excluding(a, from) {
                if self.options.exclude.contains(&nei) {
                    continue;
                }
                if self.paths.contains_key(&nei) {
                    let Some(ring) = self.close(a, bond, nei) else {
                        continue;
                    };
                    if !self.options.all {
                        return vec![ring];
                    }
                    if let Some(&terminal) = ring.atoms().last() {
                        self.used_terminals.insert(terminal);
                    }
                    self.rings.push(ring);
                } else {
                    self.extend(a, bond, nei);
                }
            }
        }
        self.rings
    }

    fn extend(&mut self, a: NodeIndex, bond: EdgeIndex, nei: NodeIndex) {
        let Some(path_a) = self.paths.get(&a) else {
            return;
        };
        if let Some(max) = self.max_size {
            if path_a.len() as f64 >= max as f64 / 2.0 + HALF_RING_SLACK {
                return;
            }
        }
        let path = path_a.extended(bond, nei);
        self.paths.insert(nei, path);
        self.queue.push_back(nei);
    }

    /// Turns the collision of `a` with the already visited `nei` into a ring,
    /// if it passes every filter.
    fn close(&self, a: NodeIndex, bond: EdgeIndex, nei: NodeIndex) -> Option<Ring> {
        let path_a = self.paths.get(&a)?;
        let path_nei = self.paths.get(&nei)?;
        let size = path_a.len() + path_nei.len() - 1;

        match self.validate(path_a, bond, path_nei, size) {
            Ok(ring) => {
                trace!(
                    atom = a.index(),
                    neighbor = nei.index(),
                    size,
                    "ring accepted"
                );
                Some(ring)
            }
            Err(reason) => {
                trace!(
                    atom = a.index(),
                    neighbor = nei.index(),
                    size,
                    ?reason,
                    "ring rejected"
                );
                None
            }
        }
    }

    fn validate(
        &self,
        path_a: &PathRecord,
        bond: EdgeIndex,
        path_nei: &PathRecord,
        size: usize,
    ) -> Result<Ring, Rejection> {
        if path_a.branch() == path_nei.branch() {
            return Err(Rejection::SameBranch);
        }
        if size < self.min_size || self.max_size.is_some_and(|max| size > max) {
            return Err(Rejection::Size);
        }

        let mut atoms: Vec<NodeIndex> = path_a
            .atoms
            .iter()
            .chain(path_nei.atoms.iter().rev())
            .copied()
            .collect();
        atoms.pop();
        let bonds: Vec<EdgeIndex> = path_a
            .bonds
            .iter()
            .copied()
            .chain(std::iter::once(bond))
            .chain(path_nei.bonds.iter().rev().copied())
            .collect();

        if !self.options.mirror
            && atoms
                .get(1)
                .is_some_and(|second| self.used_terminals.contains(second))
        {
            return Err(Rejection::Mirror);
        }
        if self
            .required_bond
            .is_some_and(|required| !bonds.contains(&required))
        {
            return Err(Rejection::MissingBond);
        }
        if contains_smaller_ring(&atoms, &self.rings) {
            return Err(Rejection::Contains);
        }

        Ok(Ring::from_parts(atoms, bonds))
    }
}

/// True if some ring in `accepted` is smaller than `candidate` and made up
/// entirely of its atoms.
fn contains_smaller_ring(candidate: &[NodeIndex], accepted: &[Ring]) -> bool {
    let members: HashSet<NodeIndex> = candidate.iter().copied().collect();
    accepted
        .iter()
        .filter(|ring| ring.size() < candidate.len())
        .any(|ring| ring.atoms().iter().all(|atom| members.contains(atom)))
}
