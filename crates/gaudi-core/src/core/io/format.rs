use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Surface syntax of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    #[default]
    Yaml,
    Toml,
}

impl InputFormat {
    /// Picks the format from the file extension, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Yaml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Yaml => "yaml",
            InputFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Yaml => f.write_str("YAML"),
            InputFormat::Toml => f.write_str("TOML"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "toml" => Ok(InputFormat::Toml),
            other => Err(format!("Unknown input format '{}'", other)),
        }
    }
}
