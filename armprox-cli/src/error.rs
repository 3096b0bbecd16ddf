//! Error handling for ArmProx CLI

use thiserror::Error;
use std::path::PathBuf;

/// Main error type for ArmProx CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    Argument { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parsing error in {file}: {message}")]
    Parse { file: String, message: String },
}

impl CliError {
    pub fn argument<S: Into<String>>(message: S) -> Self {
        Self::Argument { message: message.into() }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn parse<S: Into<String>>(file: S, message: S) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Parse { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Each line must read: id<TAB>locus<TAB>(x,y), e.g. seq1\t3p\t(0.5,1.2)\n\
                 • Loci are a chromosome number followed by 'p' or 'q'"
            );
        }

        CliError::Argument { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The distance threshold --k must be a non-negative number"
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your armprox.toml configuration file\n\
                 • Use 'armprox config --example' to generate a sample configuration"
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CliError::argument("k is negative");
        assert!(matches!(err, CliError::Argument { .. }));
        assert_eq!(err.to_string(), "Invalid argument: k is negative");
    }

    #[test]
    fn test_error_suggestions() {
        let err = CliError::file_not_found(PathBuf::from("records.tsv"));
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Suggestions:"));
        assert!(formatted.contains("Check that the file path is correct"));
    }

    #[test]
    fn test_parse_suggestions_mention_format() {
        let err = CliError::parse("records.tsv", "Error parsing line 3: Invalid locus");
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.starts_with("Parsing error in records.tsv"));
        assert!(formatted.contains("(x,y)"));
    }
}
