//! Turns a fragmented molecule into the job document of a fragment-based
//! RI-MP2 calculation.
//!
//! The input names every atom's fragment; the output lists the atoms fragment by
//! fragment, together with the index range of each fragment and its charge.
//!
//! ```
//! use fragment_core::{config::{ConfigInput, JobTemplate}, convert};
//!
//! let input: ConfigInput = serde_json::from_str(r#"{"molecule": {
//!     "symbols": ["A", "B", "C"],
//!     "geometry": [0, 0, 0, 1, 0, 0, 2, 0, 0],
//!     "fragments": {"nfrag": 2, "fragment_charges": [0, -1], "fragid": [2, 1, 1]}
//! }}"#)?;
//!
//! let document = convert(&input, &JobTemplate::default())?;
//! assert_eq!(document.topology.symbols, ["B", "C", "A"]);
//! assert_eq!(document.topology.fragments, [vec![0, 1], vec![2]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod atom;
pub mod config;
pub mod error;
pub mod fragment;
pub mod io;
pub mod job;
pub mod topology;

pub use error::{ConvertError, Result};
pub use fragment::{parse_fragments, Fragment};
pub use job::{convert, JobDocument};
pub use topology::{encode_topology, Topology};
