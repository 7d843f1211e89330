use std::collections::HashSet;

use petgraph::graph::{EdgeIndex, NodeIndex};
use proptest::prelude::*;
use ringcrab::{find_ring, Atom, Bond, FindRingOptions, Mol};

fn build(atom_count: usize, bonds: &[(usize, usize)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    let atoms: Vec<NodeIndex> = (0..atom_count)
        .map(|_| mol.add_atom(Atom::carbon(2)))
        .collect();
    for &(a, b) in bonds {
        mol.add_bond(atoms[a], atoms[b], Bond::single());
    }
    mol
}

fn cycle(size: usize) -> Mol<Atom, Bond> {
    let bonds: Vec<(usize, usize)> = (0..size).map(|i| (i, (i + 1) % size)).collect();
    build(size, &bonds)
}

/// Simple graphs: no self-loops, no parallel bonds.
fn simple_graph() -> impl Strategy<Value = Mol<Atom, Bond>> {
    (3usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..24).prop_map(move |pairs| {
            let mut seen = HashSet::new();
            let bonds: Vec<(usize, usize)> = pairs
                .into_iter()
                .filter(|&(a, b)| a != b && seen.insert((a.min(b), a.max(b))))
                .collect();
            build(n, &bonds)
        })
    })
}

fn all() -> FindRingOptions {
    FindRingOptions {
        all: true,
        ..FindRingOptions::default()
    }
}

proptest! {
    #[test]
    fn simple_cycle_yields_itself(size in 3usize..24, origin in 0usize..24) {
        let mol = cycle(size);
        let origin = NodeIndex::new(origin % size);
        let rings = find_ring(&mol, origin, &FindRingOptions::default());
        prop_assert_eq!(rings.len(), 1);
        prop_assert_eq!(rings[0].size(), size);
        prop_assert_eq!(rings[0].atoms()[0], origin);
    }

    #[test]
    fn max_equal_to_size_still_closes(size in 3usize..24) {
        let mol = cycle(size);
        let options = FindRingOptions {
            max: Some(size),
            ..FindRingOptions::default()
        };
        let rings = find_ring(&mol, NodeIndex::new(0), &options);
        prop_assert_eq!(rings.len(), 1);
        prop_assert_eq!(rings[0].size(), size);
    }

    #[test]
    fn mirror_doubles_simple_cycle(size in 3usize..24) {
        let mol = cycle(size);
        let once = find_ring(&mol, NodeIndex::new(0), &all());
        let mirrored = FindRingOptions {
            all: true,
            mirror: true,
            ..FindRingOptions::default()
        };
        let twice = find_ring(&mol, NodeIndex::new(0), &mirrored);
        prop_assert_eq!(twice.len(), 2 * once.len());
        prop_assert!(twice[0].same_cycle(&twice[1]));
    }

    #[test]
    fn excluding_ring_atom_breaks_cycle(size in 3usize..24, excluded in 1usize..24) {
        let mol = cycle(size);
        let excluded = NodeIndex::new(1 + excluded % (size - 1));
        let options = FindRingOptions {
            all: true,
            exclude: [excluded].into_iter().collect(),
            ..FindRingOptions::default()
        };
        prop_assert!(find_ring(&mol, NodeIndex::new(0), &options).is_empty());
    }

    #[test]
    fn search_is_repeatable(mol in simple_graph()) {
        for atom in mol.atoms() {
            prop_assert_eq!(find_ring(&mol, atom, &all()), find_ring(&mol, atom, &all()));
        }
    }

    #[test]
    fn first_ring_is_among_all(mol in simple_graph()) {
        for atom in mol.atoms() {
            let first = find_ring(&mol, atom, &FindRingOptions::default());
            let every = find_ring(&mol, atom, &all());
            prop_assert!(first.len() <= 1);
            prop_assert_eq!(first.is_empty(), every.is_empty());
            if let Some(ring) = first.first() {
                prop_assert!(every.contains(ring));
            }
        }
    }

    #[test]
    fn rings_are_simple_and_start_at_origin(mol in simple_graph()) {
        for atom in mol.atoms() {
            for ring in find_ring(&mol, atom, &all()) {
                prop_assert_eq!(ring.atoms()[0], atom);
                prop_assert_eq!(ring.atoms().len(), ring.bonds().len());
                let unique: HashSet<_> = ring.atoms().iter().collect();
                prop_assert_eq!(unique.len(), ring.size());
                prop_assert!(ring.size() >= 3);
            }
        }
    }

    #[test]
    fn excluded_atoms_never_appear(mol in simple_graph(), excluded in 0usize..12) {
        let excluded = NodeIndex::new(excluded % mol.atom_count());
        let options = FindRingOptions {
            all: true,
            exclude: [excluded].into_iter().collect(),
            ..FindRingOptions::default()
        };
        for atom in mol.atoms() {
            for ring in find_ring(&mol, atom, &options) {
                prop_assert!(!ring.contains_atom(excluded));
            }
        }
    }

    #[test]
    fn bond_origin_rings_hold_the_bond(mol in simple_graph()) {
        let bonds: Vec<EdgeIndex> = mol.bonds().collect();
        for bond in bonds {
            for ring in find_ring(&mol, bond, &all()) {
                prop_assert!(ring.contains_bond(bond));
            }
        }
    }

    #[test]
    fn size_filter_is_respected(mol in simple_graph(), min in 0usize..8, span in 0usize..6) {
        let options = FindRingOptions {
            all: true,
            min,
            max: Some(min + span),
            ..FindRingOptions::default()
        };
        for atom in mol.atoms() {
            for ring in find_ring(&mol, atom, &options) {
                prop_assert!(ring.size() >= min && ring.size() <= min + span);
            }
        }
    }
}
