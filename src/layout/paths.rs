//! Canonical path builders
//!
//! Joins a canonical folder with a policy filename. No existence checks are
//! made here; callers that care about the filesystem test the returned paths.

use crate::layout::folders::{FolderKey, FolderMap};
use crate::layout::names::{artifact_name, file_name_of};
use crate::layout::policy::{ArtifactKind, ReportKind};
use std::path::{Path, PathBuf};

/// QC destination for outputs that passed classification but were flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlaggedKind {
    Scored,
    Pose,
}

impl FlaggedKind {
    pub fn folder(&self) -> FolderKey {
        match self {
            FlaggedKind::Scored => FolderKey::FlagScored,
            FlaggedKind::Pose => FolderKey::FlagPose,
        }
    }

    pub fn artifact(&self) -> ArtifactKind {
        match self {
            FlaggedKind::Scored => ArtifactKind::Scored,
            FlaggedKind::Pose => ArtifactKind::Pose,
        }
    }
}

/// QC destination for verbatim copies of inputs that failed classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCopyKind {
    /// Tracked input copies
    Tracked,
    /// Sleap input copies (the pose stage's input)
    Pose,
}

impl ErrorCopyKind {
    pub fn folder(&self) -> FolderKey {
        match self {
            ErrorCopyKind::Tracked => FolderKey::ErrorTracked,
            ErrorCopyKind::Pose => FolderKey::ErrorPose,
        }
    }

    /// Suffix carried by the copied input files
    pub fn input_kind(&self) -> ArtifactKind {
        match self {
            ErrorCopyKind::Tracked => ArtifactKind::Tracked,
            ErrorCopyKind::Pose => ArtifactKind::Sleap,
        }
    }
}

impl ArtifactKind {
    /// Canonical folder holding good outputs of this kind
    pub fn folder(&self) -> FolderKey {
        match self {
            ArtifactKind::Tracked => FolderKey::Tracked,
            ArtifactKind::Sleap => FolderKey::Sleap,
            ArtifactKind::ArenaImage => FolderKey::ArenaImage,
            ArtifactKind::FlyVideo => FolderKey::FlyVideo,
            ArtifactKind::CropVideo => FolderKey::CropVideo,
            ArtifactKind::Scored => FolderKey::Scored,
            ArtifactKind::Pose => FolderKey::Pose,
        }
    }
}

impl ReportKind {
    pub fn folder(&self) -> FolderKey {
        match self {
            ReportKind::Error => FolderKey::Error,
            ReportKind::Flag => FolderKey::Flag,
        }
    }
}

/// Experiment layout: the folder map plus every path builder on top of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentLayout {
    folders: FolderMap,
}

impl ExperimentLayout {
    pub fn new(folders: FolderMap) -> Self {
        Self { folders }
    }

    pub fn folders(&self) -> &FolderMap {
        &self.folders
    }

    pub fn root(&self) -> &Path {
        self.folders.root()
    }

    pub fn folder(&self, key: FolderKey) -> &Path {
        self.folders.get(key)
    }

    /// Canonical path of a good output: `{folder}/{stem}{suffix}`
    pub fn artifact_path(&self, kind: ArtifactKind, stem: &str) -> PathBuf {
        self.folder(kind.folder()).join(artifact_name(kind, stem))
    }

    pub fn report_path(&self, kind: ReportKind) -> PathBuf {
        self.folder(kind.folder()).join(kind.file_name())
    }

    /// Canonical path of a flagged output, named from the stem like good outputs
    pub fn flagged_path(&self, kind: FlaggedKind, stem: &str) -> PathBuf {
        self.folder(kind.folder())
            .join(artifact_name(kind.artifact(), stem))
    }

    /// Error copy destination. The original filename is kept exactly (only its
    /// final component is used) so the copy stays traceable to its source.
    pub fn error_copy_path(&self, kind: ErrorCopyKind, original_filename: &str) -> PathBuf {
        self.folder(kind.folder()).join(file_name_of(original_filename))
    }

    pub fn tracked_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::Tracked, stem)
    }

    pub fn sleap_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::Sleap, stem)
    }

    pub fn scored_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::Scored, stem)
    }

    pub fn pose_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::Pose, stem)
    }

    pub fn arenaimg_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::ArenaImage, stem)
    }

    pub fn flyvideo_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::FlyVideo, stem)
    }

    pub fn cropvideo_path(&self, stem: &str) -> PathBuf {
        self.artifact_path(ArtifactKind::CropVideo, stem)
    }

    pub fn report_error_path(&self) -> PathBuf {
        self.report_path(ReportKind::Error)
    }

    pub fn report_flag_path(&self) -> PathBuf {
        self.report_path(ReportKind::Flag)
    }

    pub fn flag_scored_path(&self, stem: &str) -> PathBuf {
        self.flagged_path(FlaggedKind::Scored, stem)
    }

    pub fn flag_pose_path(&self, stem: &str) -> PathBuf {
        self.flagged_path(FlaggedKind::Pose, stem)
    }

    pub fn error_tracked_copy_path(&self, original_filename: &str) -> PathBuf {
        self.error_copy_path(ErrorCopyKind::Tracked, original_filename)
    }

    pub fn error_pose_copy_path(&self, original_filename: &str) -> PathBuf {
        self.error_copy_path(ErrorCopyKind::Pose, original_filename)
    }
}
