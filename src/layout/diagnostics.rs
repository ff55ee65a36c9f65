//! Layout diagnostics
//!
//! Read-only health checks over the experiment tree. Everything returns data;
//! formatting is left to the caller.

use crate::layout::discovery::ScanTarget;
use crate::layout::folders::FolderKey;
use crate::layout::paths::ExperimentLayout;
use crate::layout::roots::normalize_lexically;
use crate::{CONFIG_VERSION, PRODUCER_NAME};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Default number of filenames sampled per folder
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// File count of one scan target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCount {
    pub folder: &'static str,
    pub count: usize,
}

/// First filenames of one scan target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSample {
    pub folder: &'static str,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub producer: String,
    pub version: String,
    pub root: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn has_errors(&self) -> bool {
        self.checks.iter().any(|c| c.status == CheckStatus::Error)
    }
}

impl ExperimentLayout {
    /// Canonical subfolders that do not exist on disk
    pub fn missing_folders(&self) -> Vec<PathBuf> {
        FolderKey::subfolders()
            .map(|key| self.folder(key))
            .filter(|path| !path.exists())
            .map(|path| path.to_path_buf())
            .collect()
    }

    /// Per-folder file counts; missing folders count as zero
    pub fn tree_counts(&self) -> Vec<FolderCount> {
        ScanTarget::ALL
            .iter()
            .map(|target| FolderCount {
                folder: target.label(),
                count: self.discover(*target).len(),
            })
            .collect()
    }

    /// First `n` sorted filenames of each scan target
    pub fn sample_files(&self, n: usize) -> Vec<FolderSample> {
        ScanTarget::ALL
            .iter()
            .map(|target| FolderSample {
                folder: target.label(),
                files: self
                    .discover(*target)
                    .into_iter()
                    .take(n)
                    .filter_map(|p| p.file_name().map(|name| name.to_string_lossy().into_owned()))
                    .collect(),
            })
            .collect()
    }

    /// Structural issues in the layout; empty when healthy
    pub fn sanity_checks(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let package = normalize_lexically(self.folder(FolderKey::BehaviorClassifier));
        let outputs = normalize_lexically(self.folder(FolderKey::BehaviorClassification));
        if package == outputs {
            issues.push(
                "pBehaviorClassifier equals pBehaviorClassification (package vs outputs collision)."
                    .to_string(),
            );
        }

        if !self.root().is_absolute() {
            issues.push(format!(
                "Experiment root is relative: {}",
                self.root().display()
            ));
        }

        issues
    }

    /// Full health report built from the individual diagnostics
    pub fn doctor(&self) -> DoctorReport {
        let mut checks = Vec::new();

        if self.root().is_dir() {
            checks.push(DoctorCheck {
                name: "experiment_root".to_string(),
                status: CheckStatus::Ok,
                message: format!("Experiment root found at {}", self.root().display()),
            });
        } else {
            checks.push(DoctorCheck {
                name: "experiment_root".to_string(),
                status: CheckStatus::Error,
                message: format!("Experiment root does not exist: {}", self.root().display()),
            });
        }

        let missing = self.missing_folders();
        checks.push(if missing.is_empty() {
            DoctorCheck {
                name: "folders".to_string(),
                status: CheckStatus::Ok,
                message: "All canonical folders present".to_string(),
            }
        } else {
            DoctorCheck {
                name: "folders".to_string(),
                status: CheckStatus::Warning,
                message: format!("{} canonical folders missing", missing.len()),
            }
        });

        let issues = self.sanity_checks();
        checks.push(if issues.is_empty() {
            DoctorCheck {
                name: "sanity".to_string(),
                status: CheckStatus::Ok,
                message: "No layout issues".to_string(),
            }
        } else {
            DoctorCheck {
                name: "sanity".to_string(),
                status: CheckStatus::Error,
                message: issues.join("; "),
            }
        });

        for count in self.tree_counts() {
            checks.push(DoctorCheck {
                name: format!("count:{}", count.folder),
                status: CheckStatus::Ok,
                message: format!("{} files", count.count),
            });
        }

        let pending = self.tracked_missing_scored().len();
        if pending > 0 {
            checks.push(DoctorCheck {
                name: "pending_scoring".to_string(),
                status: CheckStatus::Warning,
                message: format!("{pending} tracked files awaiting scoring"),
            });
        }

        DoctorReport {
            producer: PRODUCER_NAME.to_string(),
            version: CONFIG_VERSION.to_string(),
            root: self.root().to_path_buf(),
            generated_at: Utc::now(),
            checks,
        }
    }
}
