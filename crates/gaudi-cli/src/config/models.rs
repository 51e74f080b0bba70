use gaudimm::core::io::raw::RawDocument;
use gaudimm::workflows::load::LoadOptions;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    /// The input file with every override applied, still without defaults.
    pub raw: RawDocument,
    pub load_options: LoadOptions,
}
