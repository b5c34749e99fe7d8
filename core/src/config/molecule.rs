use itertools::Itertools;
use nalgebra::Vector3;
use serde::Deserialize;

use crate::{
    atom::Atom,
    error::{ConvertError, Result},
};

/// Represents a full input document. Only the molecule is read, everything else
/// in the document is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ConfigInput {
    pub molecule: ConfigMolecule,
}

/// A molecule in an input document: flat element symbols and coordinates plus
/// the fragmentation scheme.
#[derive(Clone, Debug, Deserialize)]
pub struct ConfigMolecule {
    pub symbols: Vec<String>,
    /// consecutive (x, y, z) triples, one per entry of `symbols`
    pub geometry: Vec<f64>,
    pub fragments: ConfigFragments,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigFragments {
    pub nfrag: usize,
    pub fragment_charges: Vec<i32>,
    /// 1-based fragment id for every atom. Kept as raw JSON numbers so that
    /// `-1`, `1.5` or ids beyond `u64` are reported as out of range ids instead
    /// of decoding failures.
    pub fragid: Vec<serde_json::Number>,
}

/// Extracts the atoms of `molecule` in input order.
pub fn parse_atoms(molecule: &ConfigMolecule) -> Result<Vec<Atom>> {
    let ConfigMolecule {
        symbols, geometry, ..
    } = molecule;

    if geometry.len() != 3 * symbols.len() {
        return Err(ConvertError::MalformedGeometry {
            symbols: symbols.len(),
            geometry: geometry.len(),
        });
    }

    let atoms = symbols
        .iter()
        .zip(geometry.iter().copied().tuples())
        .map(|(symbol, (x, y, z))| Atom::new(symbol.as_str(), Vector3::new(x, y, z)))
        .collect::<Vec<_>>();

    log::debug!("parsed {} atoms", atoms.len());
    Ok(atoms)
}
