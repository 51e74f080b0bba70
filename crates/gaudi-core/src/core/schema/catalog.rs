use super::params::{ModuleSchema, ParamKind, ParamSpec};
use crate::core::models::module::ModuleCategory;
use phf::{Map, phf_map};

const NON_NEGATIVE: ParamKind = ParamKind::Float {
    min: Some(0.0),
    max: None,
};
const COUNT: ParamKind = ParamKind::Int {
    min: Some(0),
    max: None,
};
const ROTAMER_LIBRARIES: ParamKind = ParamKind::Choice(&["dunbrack", "dynameomics"]);
const RESIDUES: ParamKind = ParamKind::ListOf(&ParamKind::ResidueRef);
const MOLECULES: ParamKind = ParamKind::ListOf(&ParamKind::MoleculeRef);
const ATOMS: ParamKind = ParamKind::ListOf(&ParamKind::AtomRef);
const POINT_OR_ATOM: ParamKind = ParamKind::Either(&ParamKind::Coordinates, &ParamKind::AtomRef);
const COVALENT: ParamKind = ParamKind::Choice(&["covalent"]);
const DISTANCE_THRESHOLD: ParamKind = ParamKind::Either(&NON_NEGATIVE, &COVALENT);

static MOLECULE: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.molecule",
    category: ModuleCategory::Gene,
    summary: "Loads a molecule, or picks one from a directory of molecules.",
    params: &[
        ParamSpec::required("path", ParamKind::Path, "Molecule file, or directory of files"),
        ParamSpec::optional("hydrogens", ParamKind::Bool, "Add missing hydrogens on load"),
        ParamSpec::optional("pseudoatoms", ParamKind::Bool, "Keep metal pseudo-atoms"),
        ParamSpec::optional("symmetry", ParamKind::Text, "Symmetry group label"),
    ],
    positional: &[],
};

static SEARCH: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.search",
    category: ModuleCategory::Gene,
    summary: "Rigid translation and rotation of a molecule inside a sphere.",
    params: &[
        ParamSpec::required("target", ParamKind::MoleculeRef, "Molecule to move"),
        ParamSpec::required("center", POINT_OR_ATOM, "Center of the search sphere"),
        ParamSpec::optional("radius", NON_NEGATIVE, "Radius of the search sphere (A)"),
        ParamSpec::optional("rotate", ParamKind::Bool, "Also sample orientations"),
        ParamSpec::optional("precision", COUNT, "Decimal places kept for translations"),
    ],
    positional: &[],
};

static TORSION: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.torsion",
    category: ModuleCategory::Gene,
    summary: "Rotation around the rotatable bonds of a molecule.",
    params: &[
        ParamSpec::required("target", ParamKind::MoleculeRef, "Molecule whose bonds rotate"),
        ParamSpec::optional(
            "flexibility",
            ParamKind::Float {
                min: Some(0.0),
                max: Some(360.0),
            },
            "Maximum rotation per bond (degrees)",
        ),
        ParamSpec::optional("max_bonds", COUNT, "Cap on the number of rotatable bonds"),
        ParamSpec::optional("anchor", ParamKind::AtomRef, "Atom kept fixed while rotating"),
        ParamSpec::optional(
            "rotatable_elements",
            ParamKind::ListOf(&ParamKind::Text),
            "Elements allowed at either end of a rotatable bond",
        ),
        ParamSpec::optional("precision", COUNT, "Decimal places kept for angles"),
    ],
    positional: &[],
};

static ROTAMERS: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.rotamers",
    category: ModuleCategory::Gene,
    summary: "Side-chain conformations picked from a rotamer library.",
    params: &[
        ParamSpec::required("residues", RESIDUES, "Residues whose side chains move"),
        ParamSpec::optional("library", ROTAMER_LIBRARIES, "Rotamer library"),
        ParamSpec::optional("with_original", ParamKind::Bool, "Keep the input side chain"),
        ParamSpec::optional("hydrogens", ParamKind::Bool, "Add hydrogens to new rotamers"),
    ],
    positional: &[],
};

static MUTAMERS: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.mutamers",
    category: ModuleCategory::Gene,
    summary: "Side-chain flexibility with mutation to other residue types.",
    params: &[
        ParamSpec::required("residues", RESIDUES, "Residues that can mutate"),
        ParamSpec::optional("library", ROTAMER_LIBRARIES, "Rotamer library"),
        ParamSpec::optional(
            "mutations",
            ParamKind::ListOf(&ParamKind::ResidueCode),
            "Residue types the residues can mutate to",
        ),
        ParamSpec::optional(
            "ligation",
            ParamKind::Bool,
            "Mutate every residue to the same type",
        ),
        ParamSpec::optional("hydrogens", ParamKind::Bool, "Add hydrogens to new residues"),
        ParamSpec::optional(
            "avoid_replacement",
            ParamKind::Bool,
            "Move atoms instead of swapping residues when the type is unchanged",
        ),
    ],
    positional: &[],
};

static TRAJECTORY: ModuleSchema = ModuleSchema {
    path: "gaudi.genes.trajectory",
    category: ModuleCategory::Gene,
    summary: "Coordinates of a molecule taken from the frames of a trajectory.",
    params: &[
        ParamSpec::required("target", ParamKind::MoleculeRef, "Molecule to update"),
        ParamSpec::required("path", ParamKind::Path, "Trajectory file"),
        ParamSpec::optional("max_frame", COUNT, "Last frame to consider"),
        ParamSpec::optional(
            "stride",
            ParamKind::Int {
                min: Some(1),
                max: None,
            },
            "Use every n-th frame",
        ),
        ParamSpec::optional("preload", ParamKind::Bool, "Read all frames up front"),
    ],
    positional: &[],
};

static CONTACTS: ModuleSchema = ModuleSchema {
    path: "gaudi.objectives.contacts",
    category: ModuleCategory::Objective,
    summary: "Steric clashes or hydrophobic contacts around the probes.",
    params: &[
        ParamSpec::required("probes", MOLECULES, "Molecules whose surroundings are scored"),
        ParamSpec::optional("radius", NON_NEGATIVE, "Search radius around the probes (A)"),
        ParamSpec::optional(
            "which",
            ParamKind::Choice(&["hydrophobic", "clashes"]),
            "Kind of contact to count",
        ),
        ParamSpec::optional("clash_threshold", NON_NEGATIVE, "Overlap counted as a clash (A)"),
        ParamSpec::optional(
            "hydrophobic_threshold",
            ParamKind::Float {
                min: None,
                max: None,
            },
            "Overlap counted as a hydrophobic contact (A)",
        ),
        ParamSpec::optional("cutoff", NON_NEGATIVE, "Overlap below which contacts are ignored"),
        ParamSpec::optional("bond_separation", COUNT, "Bonds between atoms to ignore a pair"),
        ParamSpec::optional("same_residue", ParamKind::Bool, "Count pairs in the same residue"),
        ParamSpec::optional("only_internal", ParamKind::Bool, "Only count intramolecular pairs"),
    ],
    positional: &[],
};

static DISTANCE: ModuleSchema = ModuleSchema {
    path: "gaudi.objectives.distance",
    category: ModuleCategory::Objective,
    summary: "Distance between probe atoms and a target atom.",
    params: &[
        ParamSpec::required("probes", ATOMS, "Atoms measured against the target"),
        ParamSpec::required("target", ParamKind::AtomRef, "Reference atom"),
        ParamSpec::optional(
            "threshold",
            DISTANCE_THRESHOLD,
            "Distance considered optimal (A), or 'covalent'",
        ),
        ParamSpec::optional("tolerance", NON_NEGATIVE, "Allowed deviation from the threshold"),
        ParamSpec::optional(
            "center_of_mass",
            ParamKind::Bool,
            "Measure from the probes' center of mass",
        ),
    ],
    positional: &[],
};

static HBONDS: ModuleSchema = ModuleSchema {
    path: "gaudi.objectives.hbonds",
    category: ModuleCategory::Objective,
    summary: "Hydrogen bonds formed by the probes.",
    params: &[
        ParamSpec::required("probes", MOLECULES, "Molecules whose hydrogen bonds count"),
        ParamSpec::optional("distance_tolerance", NON_NEGATIVE, "Distance slack (A)"),
        ParamSpec::optional("angle_tolerance", NON_NEGATIVE, "Angle slack (degrees)"),
        ParamSpec::optional("radius", NON_NEGATIVE, "Search radius around the probes (A)"),
    ],
    positional: &[],
};

static ENERGY: ModuleSchema = ModuleSchema {
    path: "gaudi.objectives.energy",
    category: ModuleCategory::Objective,
    summary: "Force-field potential energy of the target molecules.",
    params: &[
        ParamSpec::optional("targets", MOLECULES, "Molecules included in the calculation"),
        ParamSpec::optional(
            "forcefields",
            ParamKind::ListOf(&ParamKind::Text),
            "Force-field definition files or names",
        ),
        ParamSpec::optional(
            "auto_parametrize",
            MOLECULES,
            "Molecules parametrized on the fly",
        ),
    ],
    positional: &[],
};

static SOLVATION: ModuleSchema = ModuleSchema {
    path: "gaudi.objectives.solvation",
    category: ModuleCategory::Objective,
    summary: "Solvent-exposed surface or volume of the targets.",
    params: &[
        ParamSpec::required("targets", MOLECULES, "Molecules whose exposure is measured"),
        ParamSpec::optional("threshold", NON_NEGATIVE, "Exposure considered optimal"),
        ParamSpec::optional("radius", NON_NEGATIVE, "Probe radius (A)"),
        ParamSpec::optional(
            "method",
            ParamKind::Choice(&["area", "volume"]),
            "Measure area or volume",
        ),
    ],
    positional: &[],
};

static RMSD: ModuleSchema = ModuleSchema {
    path: "gaudi.similarity.rmsd",
    category: ModuleCategory::Similarity,
    summary: "Individuals are similar when the RMSD of the given molecules is below a threshold.",
    params: &[],
    positional: &[
        ParamSpec::required("molecules", MOLECULES, "Molecules compared between individuals"),
        ParamSpec::required("threshold", NON_NEGATIVE, "RMSD below which two are similar (A)"),
    ],
};

static BUILTIN_MODULES: Map<&'static str, &'static ModuleSchema> = phf_map! {
    "gaudi.genes.molecule" => &MOLECULE,
    "gaudi.genes.search" => &SEARCH,
    "gaudi.genes.torsion" => &TORSION,
    "gaudi.genes.rotamers" => &ROTAMERS,
    "gaudi.genes.mutamers" => &MUTAMERS,
    "gaudi.genes.trajectory" => &TRAJECTORY,
    "gaudi.objectives.contacts" => &CONTACTS,
    "gaudi.objectives.distance" => &DISTANCE,
    "gaudi.objectives.hbonds" => &HBONDS,
    "gaudi.objectives.energy" => &ENERGY,
    "gaudi.objectives.solvation" => &SOLVATION,
    "gaudi.similarity.rmsd" => &RMSD,
};

pub fn lookup(path: &str) -> Option<&'static ModuleSchema> {
    BUILTIN_MODULES.get(path).copied()
}

/// All built-in modules, sorted by path.
pub fn all() -> Vec<&'static ModuleSchema> {
    let mut modules: Vec<_> = BUILTIN_MODULES.values().copied().collect();
    modules.sort_by_key(|m| m.path);
    modules
}

pub fn by_category(category: ModuleCategory) -> Vec<&'static ModuleSchema> {
    all()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Closest built-in module path to a misspelled one, if any is within two edits.
pub fn suggest(path: &str) -> Option<&'static str> {
    BUILTIN_MODULES
        .keys()
        .map(|candidate| (edit_distance(path, candidate), *candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= 2)
        .min()
        .map(|(_, candidate)| candidate)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }
    previous[b.len()]
}
