use rand::Rng;
use rand::distributions::Alphanumeric;

pub const DEFAULT_NAME_LENGTH: usize = 5;

/// Generates a random alphanumeric job name, used when `output.name` is absent.
pub fn random_name(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns `true` if `name` can be used verbatim as a file stem inside the output
/// directory.
pub fn is_safe_file_stem(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed == name
        && trimmed != "."
        && trimmed != ".."
        && !name.contains(['/', '\\', '\0'])
}
