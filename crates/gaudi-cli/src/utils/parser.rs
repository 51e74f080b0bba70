use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),
}

/// Splits `KEY=VALUE` at the first `=`. The value may itself contain `=` or be empty.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(input.to_string()));
    }
    Ok((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_the_first_separator() {
        assert_eq!(parse_key_value("ga.mu=0.5"), Ok(("ga.mu", "0.5")));
        assert_eq!(
            parse_key_value(" output.name = a=b "),
            Ok(("output.name", "a=b"))
        );
        assert_eq!(parse_key_value("output.name="), Ok(("output.name", "")));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert_eq!(
            parse_key_value("ga.mu"),
            Err(ParseError::MissingSeparator("ga.mu".to_string()))
        );
        assert_eq!(
            parse_key_value("=3"),
            Err(ParseError::EmptyKey("=3".to_string()))
        );
    }
}
