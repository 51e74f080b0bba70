use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where and how the results of a job are written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputConfig {
    /// Results directory, already resolved against the input file's directory.
    pub path: PathBuf,
    /// Job name, used as the stem of every output file.
    pub name: String,
    /// Decimal places used when reporting fitness values.
    pub precision: usize,
    /// Bundle the results in a single compressed archive.
    pub compress: bool,
    /// Keep the genealogy of every individual.
    pub history: bool,
    /// Report the Pareto front instead of a plain hall of fame.
    pub pareto: bool,
    pub verbose: bool,
    /// Generations between checkpoints; `0` disables checkpointing.
    pub check_every: usize,
    /// Ask the user before exiting on an unhandled exception.
    pub prompt_on_exception: bool,
}

impl OutputConfig {
    pub fn checkpoints_enabled(&self) -> bool {
        self.check_every > 0
    }

    /// Path of an output file called `<name><suffix>` inside the results directory.
    pub fn file_path(&self, suffix: &str) -> PathBuf {
        self.path.join(format!("{}{}", self.name, suffix))
    }

    pub fn results_dir(&self) -> &Path {
        &self.path
    }
}
