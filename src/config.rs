//! Configuration object
//!
//! A [`Config`] is built once from [`Settings`] and handed to consumers by
//! reference. It owns the resolved folder layout and the parameter registry.

use crate::error::ConfigError;
use crate::layout::folders::FolderMap;
use crate::layout::paths::ExperimentLayout;
use crate::layout::roots::{resolve_root, Environment};
use crate::param::registry::ParamRegistry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Caller-supplied knobs. `{}` is a valid settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Explicit experiment root; overrides the environment default
    pub root: Option<PathBuf>,
    pub environment: Environment,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        if settings
            .root
            .as_deref()
            .is_some_and(|root| root.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidSettings(
                "root must not be empty".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolved folder layout plus parameter registry
#[derive(Debug, Clone)]
pub struct Config {
    pub layout: ExperimentLayout,
    pub params: ParamRegistry,
}

impl Config {
    /// Build from an explicit experiment root
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_settings(&Settings {
            root: Some(root.as_ref().to_path_buf()),
            environment: Environment::default(),
        })
    }

    /// Build under the default root of `environment`
    pub fn with_environment(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_settings(&Settings {
            root: None,
            environment,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let root = resolve_root(settings.root.as_deref(), settings.environment)?;
        let layout = ExperimentLayout::new(FolderMap::new(root)?);
        let params = ParamRegistry::assemble()?;

        tracing::info!(
            root = %layout.root().display(),
            environment = settings.environment.as_str(),
            folders = layout.folders().len(),
            params = params.len(),
            "configuration assembled"
        );

        Ok(Self { layout, params })
    }

    /// Same registry, layout rebuilt under `new_root`
    pub fn with_root(&self, new_root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            layout: ExperimentLayout::new(self.layout.folders().with_root(new_root)?),
            params: self.params.clone(),
        })
    }
}
