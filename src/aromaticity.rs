use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::ring::Ring;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

const SP2_CAPABLE: [u8; 9] = [
    5,  // B
    6,  // C
    7,  // N
    8,  // O
    15, // P
    16, // S
    33, // As
    34, // Se
    52, // Te
];

/// Sets the aromaticity flag of every ring in `rings` from its Hückel
/// pi-electron count.
///
/// Bond orders must be kekulized; each ring is judged on its own, so a ring
/// that is only aromatic as part of a larger fused system stays unflagged.
pub fn perceive_ring_aromaticity<A, B>(mol: &Mol<A, B>, rings: &mut [Ring])
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    for ring in rings.iter_mut() {
        let aromatic = is_aromatic_ring(mol, ring);
        ring.set_aromatic(aromatic);
    }
}

pub fn is_aromatic_ring<A, B>(mol: &Mol<A, B>, ring: &Ring) -> bool
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let atoms = ring.atoms();
    if atoms.len() < 3 || ring.bonds().len() != atoms.len() {
        return false;
    }

    if atoms
        .iter()
        .any(|&atom| !SP2_CAPABLE.contains(&mol.atom(atom).atomic_num()))
    {
        return false;
    }

    if ring
        .bonds()
        .iter()
        .any(|&bond| mol.bond(bond).bond_order() == BondOrder::Triple)
    {
        return false;
    }

    let mut pi_total: u8 = 0;
    for (i, &atom) in atoms.iter().enumerate() {
        match pi_electrons(mol, atom, ring, i) {
            Some(e) => pi_total = pi_total.saturating_add(e),
            None => return false,
        }
    }

    is_huckel(pi_total)
}

fn pi_electrons<A, B>(
    mol: &Mol<A, B>,
    atom_idx: NodeIndex,
    ring: &Ring,
    pos: usize,
) -> Option<u8>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let atom = mol.atom(atom_idx);
    let anum = atom.atomic_num();
    let charge = atom.formal_charge();

    let has_double = mol
        .bonds_of(atom_idx)
        .any(|e| mol.bond(e).bond_order() == BondOrder::Double);
    let has_double_in_ring = has_double_ring_bond(mol, ring, pos);
    let total_degree = mol.neighbors(atom_idx).count() as u8 + atom.hydrogen_count();

    match anum {
        6 => match charge {
            0 if has_double => Some(1),
            -1 => Some(2),
            1 if has_double => Some(1),
            1 => Some(0),
            _ => None,
        },
        7 => match charge {
            0 if has_double => Some(1),
            0 if total_degree <= 3 => Some(2),
            1 if has_double_in_ring => Some(1),
            _ => None,
        },
        8 | 16 | 34 | 52 => {
            if has_double_in_ring {
                Some(1)
            } else {
                Some(2)
            }
        }
        5 => {
            if has_double {
                Some(1)
            } else {
                Some(0)
            }
        }
        15 | 33 => {
            if has_double {
                Some(1)
            } else if total_degree <= 3 {
                Some(2)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Whether either ring bond at position `pos` is a double bond.
fn has_double_ring_bond<A, B>(mol: &Mol<A, B>, ring: &Ring, pos: usize) -> bool
where
    B: HasBondOrder,
{
    let bonds = ring.bonds();
    let len = bonds.len();
    [bonds[(pos + len - 1) % len], bonds[pos]]
        .iter()
        .any(|&bond| mol.bond(bond).bond_order() == BondOrder::Double)
}

fn is_huckel(pi_electrons: u8) -> bool {
    if pi_electrons < 2 {
        return false;
    }
    (pi_electrons - 2).is_multiple_of(4)
}
