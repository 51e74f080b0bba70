use crate::cli::ModulesArgs;
use crate::error::{CliError, Result};
use gaudimm::core::models::module::ModuleCategory;
use gaudimm::core::schema::catalog;
use gaudimm::core::schema::params::{ModuleSchema, ParamSpec};
use std::fmt::Write as _;

const CATEGORIES: [ModuleCategory; 3] = [
    ModuleCategory::Gene,
    ModuleCategory::Objective,
    ModuleCategory::Similarity,
];

pub fn run(args: ModulesArgs) -> Result<()> {
    let rendered = match &args.module {
        Some(path) => {
            let schema = catalog::lookup(path).ok_or_else(|| unknown_module(path))?;
            render_module(schema)
        }
        None => render_catalog(args.category.map(Into::into)),
    };
    print!("{}", rendered);
    Ok(())
}

fn unknown_module(path: &str) -> CliError {
    let hint = catalog::suggest(path)
        .map(|candidate| format!(" Did you mean '{}'?", candidate))
        .unwrap_or_default();
    CliError::Argument(format!("'{}' is not a built-in module.{}", path, hint))
}

pub fn render_catalog(category: Option<ModuleCategory>) -> String {
    let mut out = String::new();
    for current in CATEGORIES {
        if category.is_some_and(|c| c != current) {
            continue;
        }
        let modules = catalog::by_category(current);
        let width = modules.iter().map(|m| m.path.len()).max().unwrap_or(0);
        let _ = writeln!(out, "{} modules:", capitalize(&current.to_string()));
        for module in modules {
            let _ = writeln!(out, "  {:<width$}  {}", module.path, module.summary);
        }
        out.push('\n');
    }
    out
}

pub fn render_module(schema: &ModuleSchema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", schema.path, schema.category);
    let _ = writeln!(out, "  {}", schema.summary);
    if !schema.positional.is_empty() {
        let _ = writeln!(out, "\nPositional arguments (args):");
        write_params(&mut out, schema.positional);
    }
    if !schema.params.is_empty() {
        let heading = if schema.category == ModuleCategory::Similarity {
            "Keyword arguments (kwargs)"
        } else {
            "Parameters"
        };
        let _ = writeln!(out, "\n{}:", heading);
        write_params(&mut out, schema.params);
    }
    out
}

fn write_params(out: &mut String, params: &[ParamSpec]) {
    let width = params.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for param in params {
        let requirement = if param.required { "required" } else { "optional" };
        let _ = writeln!(
            out,
            "  {:<width$}  {:<8}  {}. Expects {}.",
            param.name, requirement, param.help, param.kind
        );
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
