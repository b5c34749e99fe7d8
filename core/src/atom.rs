use nalgebra::Vector3;

/// Represents an atom in a molecule.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub(crate) symbol: String,
    pub(crate) position: Vector3<f64>,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }

    /// The element symbol exactly as it was given in the input
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }
}
