use crate::cli::TemplateArgs;
use crate::error::{CliError, Result};
use gaudimm::workflows::template::EXAMPLE_INPUT;
use tracing::info;

pub fn run(args: TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(CliError::Argument(format!(
                    "'{}' already exists. Use --force to overwrite it.",
                    path.display()
                )));
            }
            info!("Writing example input to {:?}", path);
            std::fs::write(path, EXAMPLE_INPUT)?;
            println!("Example input written to: {}", path.display());
        }
        None => print!("{}", EXAMPLE_INPUT),
    }
    Ok(())
}
