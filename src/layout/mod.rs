//! Experiment folder map and filename conventions
//!
//! Pipeline: root → folder map → name/path builders → discovery.
//! Everything is pure path math except discovery and diagnostics, which only
//! read directory listings.

pub mod diagnostics;
pub mod discovery;
pub mod folders;
pub mod names;
pub mod paths;
pub mod policy;
pub mod roots;
pub mod transforms;

pub use diagnostics::{CheckStatus, DoctorCheck, DoctorReport, FolderCount, FolderSample};
pub use discovery::{ScanTarget, Siblings};
pub use folders::{FolderKey, FolderMap, FOLDER_COUNT};
pub use names::stem_without_suffix;
pub use paths::{ErrorCopyKind, ExperimentLayout, FlaggedKind};
pub use policy::{ArtifactKind, ReportKind, SuffixPolicy, KNOWN_SUFFIXES};
pub use roots::{resolve_root, Environment};
pub use transforms::{final_from_temp, is_temp_path, parse_base_fly, swap_suffix, temp_path};
