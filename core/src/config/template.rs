use serde::Serialize;

/// The fixed part of every job document: method, resources and solver settings
/// for a distributed RI-MP2 trimer calculation. Nothing in here depends on the
/// molecule.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobTemplate {
    pub model: ModelSettings,
    pub system: SystemSettings,
    pub keywords: Keywords,
    pub driver: String,
}

impl JobTemplate {
    /// Bumped whenever any default below changes.
    pub const VERSION: u32 = 1;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelSettings {
    pub method: String,
    pub spin_configuration: String,
    pub fragmentation: bool,
    pub basis: String,
    pub aux_basis: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemSettings {
    pub max_gpu_memory_mb: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Keywords {
    pub scf: ScfKeywords,
    pub frag: FragKeywords,
    pub guess: GuessKeywords,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScfKeywords {
    pub niter: u32,
    pub ndiis: u32,
    pub scf_conv: f64,
    pub convergence_metric: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragKeywords {
    pub fragmentation_level: String,
    pub fragmented_energy_type: String,
    pub ngpus_per_node: u32,
    pub cutoffs: CutoffSettings,
}

/// Distance cutoffs (in angstrom) beyond which polymers are skipped
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CutoffSettings {
    pub dimer: u32,
    pub trimer: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuessKeywords {
    pub superposition_monomer_densities: bool,
}

impl Default for JobTemplate {
    fn default() -> Self {
        Self {
            model: ModelSettings {
                method: "rimp2".into(),
                spin_configuration: "restricted".into(),
                fragmentation: true,
                basis: "cc-pVDZ".into(),
                aux_basis: "cc-pVDZ-RIFIT".into(),
            },
            system: SystemSettings {
                max_gpu_memory_mb: 30000,
            },
            keywords: Keywords {
                scf: ScfKeywords {
                    niter: 50,
                    ndiis: 8,
                    scf_conv: 1e-8,
                    convergence_metric: "energy".into(),
                },
                frag: FragKeywords {
                    fragmentation_level: "trimer".into(),
                    fragmented_energy_type: "total_energy".into(),
                    ngpus_per_node: 4,
                    cutoffs: CutoffSettings {
                        dimer: 40,
                        trimer: 30,
                    },
                },
                guess: GuessKeywords {
                    superposition_monomer_densities: false,
                },
            },
            driver: "energy".into(),
        }
    }
}
