//! Registry parsing and validation
//!
//! The registry file (`.s3env.yaml`) maps environment names to their remote
//! object, local file, and KMS key.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::locator::{LocatorError, RemoteLocator};

/// Fixed registry filename, looked up in the working directory.
pub const REGISTRY_FILE: &str = ".s3env.yaml";

/// Errors that can occur when loading or resolving the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read registry file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse registry YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid remote URL for environment '{name}': {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: LocatorError,
    },

    #[error("Environment '{0}' not found in registry")]
    EnvironmentNotFound(String),
}

/// One deployment target: where its env file lives remotely and locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Environment name (e.g., "development", "production")
    pub name: String,
    /// Remote object URL (s3://bucket/key)
    pub url: String,
    /// AWS region of the bucket
    pub region: String,
    /// Local file path
    pub local: String,
    /// KMS key id for server-side encryption on push
    pub kms: String,
}

impl EnvironmentConfig {
    /// Parse this environment's remote URL into a (bucket, key) locator.
    pub fn locator(&self) -> Result<RemoteLocator, LocatorError> {
        RemoteLocator::parse(&self.url)
    }
}

/// The loaded registry: every environment known to this invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub environments: Vec<EnvironmentConfig>,
}

impl Registry {
    /// Load a registry from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a registry from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, RegistryError> {
        let registry: Registry = serde_yaml::from_str(yaml)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Validate the registry
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.environments.is_empty() {
            return Err(RegistryError::ValidationError(
                "Registry must have at least one environment".to_string(),
            ));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for env in &self.environments {
            self.validate_environment(env)?;
            if !seen.insert(env.name.as_str()) {
                return Err(RegistryError::ValidationError(format!(
                    "Duplicate environment name '{}'",
                    env.name
                )));
            }
        }

        Ok(())
    }

    fn validate_environment(&self, env: &EnvironmentConfig) -> Result<(), RegistryError> {
        if env.name.is_empty() {
            return Err(RegistryError::ValidationError(
                "Environment must have a name".to_string(),
            ));
        }

        for (field, value) in [
            ("url", &env.url),
            ("region", &env.region),
            ("local", &env.local),
            ("kms", &env.kms),
        ] {
            if value.is_empty() {
                return Err(RegistryError::ValidationError(format!(
                    "Environment '{}' must have a {}",
                    env.name, field
                )));
            }
        }

        env.locator().map_err(|source| RegistryError::InvalidUrl {
            name: env.name.clone(),
            source,
        })?;

        Ok(())
    }

    /// Resolve an environment name to its config.
    pub fn resolve(&self, name: &str) -> Result<&EnvironmentConfig, RegistryError> {
        self.environments
            .iter()
            .find(|env| env.name == name)
            .ok_or_else(|| RegistryError::EnvironmentNotFound(name.to_string()))
    }
}

/// Default registry content written by `s3env init`.
pub fn template() -> String {
    let registry = Registry {
        environments: vec![
            EnvironmentConfig {
                name: "development".to_string(),
                url: "s3://my-bucket/development.env".to_string(),
                region: "eu-west-1".to_string(),
                local: "./development.env".to_string(),
                kms: "alias/my-key".to_string(),
            },
            EnvironmentConfig {
                name: "production".to_string(),
                url: "s3://my-bucket/production.env".to_string(),
                region: "eu-west-1".to_string(),
                local: "./production.env".to_string(),
                kms: "alias/my-key".to_string(),
            },
        ],
    };
    // Serializing the typed template keeps init output and parser in lockstep.
    serde_yaml::to_string(&registry).expect("template registry must serialize")
}
