//! FlyHigher Config - canonical layout and column schema for the behavior pipeline
//!
//! Two independent parts, bundled into one [`Config`] built at startup:
//!
//! - **Layout**: experiment root → folder map → filename policy → path builders
//!   → read-only discovery and diagnostics over the experiment tree.
//! - **Parameters**: the registry of every CSV column the pipeline produces,
//!   used by loaders as a reference schema.
//!
//! The crate never writes to disk and never installs a `tracing` subscriber.

pub mod config;
pub mod error;
pub mod layout;
pub mod param;

pub use config::{Config, Settings};
pub use error::ConfigError;

// Layout exports
pub use layout::{
    ArtifactKind, DoctorReport, Environment, ExperimentLayout, FolderKey, FolderMap, ReportKind,
    ScanTarget, Siblings, SuffixPolicy,
};

// Parameter exports
pub use param::{ParamRegistry, ParamSpec, Tag};

/// Crate version, recorded in diagnostics reports
pub const CONFIG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for diagnostics reports
pub const PRODUCER_NAME: &str = "flyhigher-config";
