use crate::{
    atom::Atom,
    config::{parse_atoms, ConfigInput},
    error::{ConvertError, Result},
};

/// A group of atoms carrying a net charge.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(crate) charge: i32,
    pub(crate) atoms: Vec<Atom>,
}

impl Fragment {
    pub fn new(charge: i32) -> Self {
        Self {
            charge,
            atoms: Vec::new(),
        }
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// The atoms of this fragment, in the order they appear in the input
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

/// Splits the molecule of `input` into its fragments.
///
/// Returns exactly `nfrag` fragments; fragment `k` has charge `fragment_charges[k]`
/// and holds the atoms whose fragment id is `k + 1`, in input order.
pub fn parse_fragments(input: &ConfigInput) -> Result<Vec<Fragment>> {
    let atoms = parse_atoms(&input.molecule)?;
    let fragments = &input.molecule.fragments;
    let nfrag = fragments.nfrag;

    check_length("fragment_charges", nfrag, fragments.fragment_charges.len())?;
    check_length("fragid", atoms.len(), fragments.fragid.len())?;

    let mut fragment_vector = fragments
        .fragment_charges
        .iter()
        .map(|&charge| Fragment::new(charge))
        .collect::<Vec<_>>();

    for (index, (atom, fragid)) in atoms.into_iter().zip(&fragments.fragid).enumerate() {
        let slot = fragid
            .as_u64()
            .and_then(|id| usize::try_from(id).ok())
            .and_then(|id| id.checked_sub(1))
            .filter(|&slot| slot < nfrag)
            .ok_or_else(|| ConvertError::FragmentIndexOutOfRange {
                atom: index,
                fragid: fragid.clone(),
                nfrag,
            })?;

        fragment_vector[slot].atoms.push(atom);
    }

    for (k, fragment) in fragment_vector.iter().enumerate() {
        log::trace!(
            "fragment {k}: {} atoms, charge {}",
            fragment.atoms.len(),
            fragment.charge
        );
    }
    log::debug!("assigned atoms to {nfrag} fragments");

    Ok(fragment_vector)
}

fn check_length(field: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ConvertError::SchemaLengthMismatch {
            field,
            expected,
            found,
        })
    }
}
