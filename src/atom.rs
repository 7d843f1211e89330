/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties ring perception needs: element,
/// charge, and how many hydrogens it carries. Ring membership and aromaticity
/// are not stored here; they live on the [`Ring`](crate::Ring) values that
/// [`find_ring`](crate::find_ring) returns.
///
/// # Examples
///
/// ```
/// use ringcrab::Atom;
///
/// let nitrogen = Atom {
///     atomic_num: 7,
///     hydrogen_count: 1,
///     ..Atom::default()
/// };
/// assert_eq!(nitrogen.atomic_num, 7);
/// assert_eq!(nitrogen.formal_charge, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units (e.g. −1 for a carboxylate oxygen).
    pub formal_charge: i8,
    /// Number of virtual (suppressed) hydrogens on this atom.
    pub hydrogen_count: u8,
}

impl Atom {
    pub fn carbon(hydrogen_count: u8) -> Self {
        Self {
            atomic_num: 6,
            hydrogen_count,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
