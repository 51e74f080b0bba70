use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use gaudimm::core::io::format::InputFormat;
use gaudimm::core::models::module::ModuleCategory;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Jaime Rodriguez-Guerra, Jean-Didier Marechal",
    version,
    about = "GaudiMM CLI - Validate, normalize and scaffold input files for GaudiMM, a genetic-algorithm platform for molecular docking and design.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to validate several files at once.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one or more input files and report every problem found.
    Validate(ValidateArgs),
    /// Print an input file with every default filled in.
    Show(ShowArgs),
    /// List the built-in genes, objectives and similarity functions.
    Modules(ModulesArgs),
    /// Print or write an annotated example input file.
    Template(TemplateArgs),
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input files (YAML, or TOML by extension).
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,

    /// Require every path parameter to exist on disk.
    #[arg(long)]
    pub check_paths: bool,

    /// Accept modules missing from the built-in catalog, with a warning.
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        value_name = "BOOL"
    )]
    pub allow_unknown_modules: bool,

    /// Set a value in every input before validating it.
    /// Can be used multiple times. Example: -S ga.population=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Input file to normalize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output syntax. Defaults to the extension of --output, or YAML.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Write the document to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: InputOverrides,
}

/// Values that replace the ones in the input file.
#[derive(Args, Debug, Clone, Default)]
pub struct InputOverrides {
    /// Override `ga.population`.
    #[arg(long, value_name = "INT")]
    pub population: Option<usize>,

    /// Override `ga.generations`.
    #[arg(long, value_name = "INT")]
    pub generations: Option<usize>,

    /// Override `output.path`. Relative paths are resolved against the current directory.
    #[arg(long, value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Override `output.name`.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Set a specific value, overriding the input file.
    /// Can be used multiple times. Example: -S output.precision=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `modules` subcommand.
#[derive(Args, Debug)]
pub struct ModulesArgs {
    /// Only list modules of this kind.
    #[arg(short, long, value_enum, value_name = "CATEGORY")]
    pub category: Option<CategoryArg>,

    /// Show the parameters of one module, e.g. gaudi.genes.torsion.
    #[arg(value_name = "MODULE")]
    pub module: Option<String>,
}

/// Arguments for the `template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the example to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(long, requires = "output")]
    pub force: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Yaml,
    Toml,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => InputFormat::Yaml,
            FormatArg::Toml => InputFormat::Toml,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Gene,
    Objective,
    Similarity,
}

impl From<CategoryArg> for ModuleCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Gene => ModuleCategory::Gene,
            CategoryArg::Objective => ModuleCategory::Objective,
            CategoryArg::Similarity => ModuleCategory::Similarity,
        }
    }
}
