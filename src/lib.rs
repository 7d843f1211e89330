pub mod aromaticity;
pub mod atom;
pub mod bond;
pub mod mol;
pub mod ring;
pub mod rings;
pub mod traits;

pub use aromaticity::{is_aromatic_ring, perceive_ring_aromaticity};
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use mol::Mol;
pub use ring::Ring;
pub use rings::{find_ring, FindRingOptions, RingOrigin};
pub use traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
