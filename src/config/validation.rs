//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check static roots point at real directories
//! - Check the bind policy allows at least one attempt
//! - Check TLS credential files exist when TLS is requested
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the merged config
//! - Runs on the CLI path only; `StaticServer::start` does no per-field
//!   validation beyond port defaulting

use std::fmt;
use std::path::PathBuf;

use crate::config::schema::ServeConfig;
use crate::net::tls::{CERT_FILE, KEY_FILE};

/// A single semantic problem with a config.
#[derive(Debug)]
pub enum ValidationError {
    RootNotADirectory(PathBuf),
    ProjectRootNotADirectory(PathBuf),
    NoBindAttempts,
    MissingTlsCredential(PathBuf),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RootNotADirectory(path) => {
                write!(f, "root is not a directory: {}", path.display())
            }
            ValidationError::ProjectRootNotADirectory(path) => {
                write!(f, "project_root is not a directory: {}", path.display())
            }
            ValidationError::NoBindAttempts => {
                write!(f, "bind.max_attempts must be at least 1")
            }
            ValidationError::MissingTlsCredential(path) => {
                write!(f, "TLS credential file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a config for semantic problems, collecting every error found.
pub fn validate_config(config: &ServeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(root) = &config.root {
        if !root.is_dir() {
            errors.push(ValidationError::RootNotADirectory(root.clone()));
        }
    }

    if let Some(project_root) = &config.project_root {
        if !project_root.is_dir() {
            errors.push(ValidationError::ProjectRootNotADirectory(project_root.clone()));
        }
    }

    if config.bind.max_attempts == 0 {
        errors.push(ValidationError::NoBindAttempts);
    }

    if config.use_https {
        let dir = config.credentials_dir();
        for file in [KEY_FILE, CERT_FILE] {
            let path = dir.join(file);
            if !path.is_file() {
                errors.push(ValidationError::MissingTlsCredential(path));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServeConfig::default()).is_ok());
    }

    #[test]
    fn missing_root_is_reported() {
        let config = ServeConfig {
            root: Some(PathBuf::from("/nonexistent/www")),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::RootNotADirectory(_)));
    }

    #[test]
    fn zero_attempts_is_reported() {
        let mut config = ServeConfig::default();
        config.bind.max_attempts = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::NoBindAttempts));
    }

    #[test]
    fn https_without_credentials_reports_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServeConfig {
            use_https: true,
            tls_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ServeConfig {
            root: Some(PathBuf::from("/nonexistent/www")),
            ..Default::default()
        };
        config.bind.max_attempts = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
