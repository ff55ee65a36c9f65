//! Filename builders
//!
//! Builders work on bare strings; folders are attached in `paths`.
//! A "stem" is the shared per-fly identifier, e.g. `Exp1_fly3`.

use crate::layout::policy::{ArtifactKind, ReportKind, KNOWN_SUFFIXES};
use std::path::Path;

/// Filename of `kind` for `stem`: `stem + suffix`
pub fn artifact_name(kind: ArtifactKind, stem: &str) -> String {
    format!("{}{}", stem, kind.suffix())
}

pub fn tracked_name(stem: &str) -> String {
    artifact_name(ArtifactKind::Tracked, stem)
}

pub fn sleap_name(stem: &str) -> String {
    artifact_name(ArtifactKind::Sleap, stem)
}

pub fn scored_name(stem: &str) -> String {
    artifact_name(ArtifactKind::Scored, stem)
}

pub fn pose_name(stem: &str) -> String {
    artifact_name(ArtifactKind::Pose, stem)
}

pub fn arenaimg_name(stem: &str) -> String {
    artifact_name(ArtifactKind::ArenaImage, stem)
}

pub fn flyvideo_name(stem: &str) -> String {
    artifact_name(ArtifactKind::FlyVideo, stem)
}

pub fn cropvideo_name(stem: &str) -> String {
    artifact_name(ArtifactKind::CropVideo, stem)
}

pub fn report_error_name() -> &'static str {
    ReportKind::Error.file_name()
}

pub fn report_flag_name() -> &'static str {
    ReportKind::Flag.file_name()
}

/// Base stem of any policy filename or path.
///
/// Only the final path component is considered. Known suffixes are tried in
/// declaration order and the first match is stripped; if none matches, the
/// final extension is dropped instead.
///
/// `"a/Exp1_fly3_tracked.csv"` -> `"Exp1_fly3"`, `"notes.txt"` -> `"notes"`
pub fn stem_without_suffix(filename: &str) -> String {
    let name = file_name_of(filename);
    for suffix in KNOWN_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Artifact kind whose suffix ends `filename`, in declaration order
pub fn kind_of(filename: &str) -> Option<ArtifactKind> {
    let name = file_name_of(filename);
    ArtifactKind::ALL
        .into_iter()
        .find(|kind| name.ends_with(kind.suffix()))
}

/// Final component of a `/`-separated string; empty for `/`, `..` and the like
pub(crate) fn file_name_of(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}
