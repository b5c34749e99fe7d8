pub use molecule::{parse_atoms, ConfigFragments, ConfigInput, ConfigMolecule};
pub use template::{
    CutoffSettings, FragKeywords, GuessKeywords, JobTemplate, Keywords, ModelSettings,
    ScfKeywords, SystemSettings,
};

mod molecule;
mod template;
