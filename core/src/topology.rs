use serde::Serialize;

use crate::fragment::Fragment;

/// The fragment-major layout of a molecule as the fragment calculation reads it.
///
/// Atoms are renumbered so that the atoms of fragment 0 come first, then those
/// of fragment 1 and so on. `fragments[k]` lists the new indices of fragment `k`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Topology {
    pub symbols: Vec<String>,
    pub geometry: Vec<f64>,
    pub fragments: Vec<Vec<usize>>,
    pub fragment_charges: Vec<i32>,
    /// (atom, atom, bond order) triples. Bonds are never perceived, so this is
    /// always empty.
    pub connectivity: Vec<(usize, usize, f64)>,
}

impl Topology {
    pub fn n_atoms(&self) -> usize {
        self.symbols.len()
    }

    pub fn n_fragments(&self) -> usize {
        self.fragments.len()
    }
}

/// Lays out `fragments` fragment by fragment, numbering atoms consecutively
/// from 0.
pub fn encode_topology(fragments: &[Fragment]) -> Topology {
    let (topology, n_atoms) = fragments.iter().fold(
        (Topology::default(), 0),
        |(mut topology, next_index), fragment| {
            let end = next_index + fragment.atoms.len();

            for atom in &fragment.atoms {
                topology.symbols.push(atom.symbol.clone());
                topology.geometry.extend(atom.position.iter());
            }
            topology.fragments.push((next_index..end).collect());
            topology.fragment_charges.push(fragment.charge);

            (topology, end)
        },
    );

    log::debug!(
        "encoded topology of {n_atoms} atoms in {} fragments",
        topology.n_fragments()
    );
    topology
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use nalgebra::Vector3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::encode_topology;
    use crate::{atom::Atom, fragment::Fragment};

    fn fragment(charge: i32, atoms: &[(&str, [f64; 3])]) -> Fragment {
        Fragment {
            charge,
            atoms: atoms
                .iter()
                .map(|&(symbol, [x, y, z])| Atom::new(symbol, Vector3::new(x, y, z)))
                .collect(),
        }
    }

    #[test]
    fn single_fragment() {
        let topology = encode_topology(&[fragment(
            0,
            &[("O", [0.0, 0.0, 0.0]), ("H", [0.0, 0.0, 1.0])],
        )]);

        assert_eq!(topology.fragments, [vec![0, 1]]);
        assert_eq!(topology.symbols, ["O", "H"]);
        assert_eq!(topology.geometry, [0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(topology.fragment_charges, [0]);
        assert!(topology.connectivity.is_empty());
    }

    #[test]
    fn fragment_major_order() {
        let topology = encode_topology(&[
            fragment(0, &[("B", [1.0, 0.0, 0.0]), ("C", [2.0, 0.0, 0.0])]),
            fragment(-1, &[("A", [0.0, 0.0, 0.0])]),
        ]);

        assert_eq!(topology.fragments, [vec![0, 1], vec![2]]);
        assert_eq!(topology.symbols, ["B", "C", "A"]);
        assert_eq!(
            topology.geometry,
            [1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(topology.fragment_charges, [0, -1]);
    }

    #[test]
    fn empty_fragments_get_empty_index_arrays() {
        let topology = encode_topology(&[
            fragment(1, &[]),
            fragment(0, &[("Ne", [0.0, 0.0, 0.0])]),
            fragment(2, &[]),
        ]);

        assert_eq!(topology.fragments, [vec![], vec![0], vec![]]);
        assert_eq!(topology.fragment_charges, [1, 0, 2]);
        assert_eq!(topology.n_atoms(), 1);
        assert_eq!(topology.n_fragments(), 3);
    }

    #[test]
    fn no_fragments() {
        let topology = encode_topology(&[]);

        assert_eq!(topology.n_atoms(), 0);
        assert!(topology.fragments.is_empty());
        assert!(topology.geometry.is_empty());
    }

    #[test]
    fn indices_partition_all_atoms() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..50 {
            let fragments = (0..rng.gen_range(1..8))
                .map(|k| {
                    let atoms = (0..rng.gen_range(0..6))
                        .map(|i| {
                            let position = Vector3::new(k as f64, i as f64, 0.0);
                            Atom::new(format!("X{k}_{i}"), position)
                        })
                        .collect();
                    Fragment {
                        charge: rng.gen_range(-2..=2),
                        atoms,
                    }
                })
                .collect::<Vec<_>>();
            let n_atoms = fragments.iter().map(|f| f.atoms.len()).sum::<usize>();

            let topology = encode_topology(&fragments);

            assert_eq!(topology.n_atoms(), n_atoms);
            assert_eq!(topology.geometry.len(), 3 * n_atoms);
            assert_eq!(
                topology.fragments.iter().map(Vec::len).sum::<usize>(),
                n_atoms
            );

            let seen = topology
                .fragments
                .iter()
                .flatten()
                .copied()
                .collect::<HashSet<_>>();
            assert_eq!(seen, (0..n_atoms).collect::<HashSet<_>>());

            for (fragment, indices) in fragments.iter().zip(&topology.fragments) {
                assert_eq!(indices.len(), fragment.atoms.len());
                for (atom, &j) in fragment.atoms.iter().zip(indices) {
                    assert_eq!(topology.symbols[j], atom.symbol);
                    assert_eq!(
                        topology.geometry[3 * j..3 * j + 3],
                        *atom.position.as_slice()
                    );
                }
            }
            assert_eq!(
                topology.fragment_charges,
                fragments.iter().map(|f| f.charge).collect::<Vec<_>>()
            );
        }
    }
}
