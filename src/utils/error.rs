use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Failed to write {filename}: {source}")]
    WriteFailure {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Manifest error: {message}")]
    ManifestError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate document filename: {filename}")]
    DuplicateDocumentError { filename: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Configuration,
    Serialization,
}

impl DocgenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DocgenError::WriteFailure { .. } | DocgenError::IoError(_) => ErrorCategory::Filesystem,
            DocgenError::SerializationError(_) => ErrorCategory::Serialization,
            DocgenError::ManifestError { .. }
            | DocgenError::InvalidConfigValueError { .. }
            | DocgenError::MissingConfigError { .. }
            | DocgenError::DuplicateDocumentError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DocgenError::WriteFailure { filename, source } => {
                format!("Could not write '{}': {}", filename, source)
            }
            DocgenError::IoError(e) => format!("File system error: {}", e),
            DocgenError::SerializationError(e) => format!("Could not render report: {}", e),
            DocgenError::ManifestError { message } => format!("Manifest problem: {}", message),
            DocgenError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            DocgenError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            DocgenError::DuplicateDocumentError { filename } => {
                format!("Document '{}' is listed more than once", filename)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DocgenError::WriteFailure { .. } | DocgenError::IoError(_) => {
                "Check that the output directory exists and is writable (or pass --create-dir)"
            }
            DocgenError::SerializationError(_) => "Retry with --report text",
            DocgenError::ManifestError { .. } => {
                "Check the manifest is valid TOML and every body_file exists"
            }
            DocgenError::InvalidConfigValueError { .. } | DocgenError::MissingConfigError { .. } => {
                "Fix the highlighted setting and run again"
            }
            DocgenError::DuplicateDocumentError { .. } => {
                "Give every document a unique filename"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_is_filesystem_error() {
        let err = DocgenError::WriteFailure {
            filename: "01_a.md".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert!(err.to_string().contains("01_a.md"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let dup = DocgenError::DuplicateDocumentError {
            filename: "x.md".to_string(),
        };
        let missing = DocgenError::MissingConfigError {
            field: "documents".to_string(),
        };
        assert_eq!(dup.category(), ErrorCategory::Configuration);
        assert_eq!(missing.category(), ErrorCategory::Configuration);
    }
}
