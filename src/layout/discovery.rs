//! File discovery
//!
//! Single-level scans of the canonical folders. Results are sorted by path so
//! batch runs see the same order on every machine. A missing folder is an
//! empty result, never an error: the layout is routinely queried before the
//! pipeline has produced anything.

use crate::layout::folders::FolderKey;
use crate::layout::names::{file_name_of, stem_without_suffix};
use crate::layout::paths::{ErrorCopyKind, ExperimentLayout};
use crate::layout::policy::ArtifactKind;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One canonical (folder, suffix) pair that discovery can scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanTarget {
    Tracked,
    Sleap,
    Scored,
    Pose,
    ArenaImage,
    FlyVideo,
    CropVideo,
    FlagScored,
    FlagPose,
    ErrorTracked,
    ErrorPose,
}

impl ScanTarget {
    pub const ALL: [ScanTarget; 11] = [
        ScanTarget::Tracked,
        ScanTarget::Sleap,
        ScanTarget::Scored,
        ScanTarget::Pose,
        ScanTarget::ArenaImage,
        ScanTarget::FlyVideo,
        ScanTarget::CropVideo,
        ScanTarget::FlagScored,
        ScanTarget::FlagPose,
        ScanTarget::ErrorTracked,
        ScanTarget::ErrorPose,
    ];

    pub fn folder(&self) -> FolderKey {
        match self {
            ScanTarget::Tracked => FolderKey::Tracked,
            ScanTarget::Sleap => FolderKey::Sleap,
            ScanTarget::Scored => FolderKey::Scored,
            ScanTarget::Pose => FolderKey::Pose,
            ScanTarget::ArenaImage => FolderKey::ArenaImage,
            ScanTarget::FlyVideo => FolderKey::FlyVideo,
            ScanTarget::CropVideo => FolderKey::CropVideo,
            ScanTarget::FlagScored => FolderKey::FlagScored,
            ScanTarget::FlagPose => FolderKey::FlagPose,
            ScanTarget::ErrorTracked => ErrorCopyKind::Tracked.folder(),
            ScanTarget::ErrorPose => ErrorCopyKind::Pose.folder(),
        }
    }

    /// Artifact kind whose suffix the scan matches
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ScanTarget::Tracked => ArtifactKind::Tracked,
            ScanTarget::Sleap => ArtifactKind::Sleap,
            ScanTarget::Scored | ScanTarget::FlagScored => ArtifactKind::Scored,
            ScanTarget::Pose | ScanTarget::FlagPose => ArtifactKind::Pose,
            ScanTarget::ArenaImage => ArtifactKind::ArenaImage,
            ScanTarget::FlyVideo => ArtifactKind::FlyVideo,
            ScanTarget::CropVideo => ArtifactKind::CropVideo,
            ScanTarget::ErrorTracked => ErrorCopyKind::Tracked.input_kind(),
            ScanTarget::ErrorPose => ErrorCopyKind::Pose.input_kind(),
        }
    }

    /// Folder label used in diagnostics ("Tracked", "Flag/Scored", ...)
    pub fn label(&self) -> &'static str {
        match self {
            ScanTarget::Tracked => "Tracked",
            ScanTarget::Sleap => "Sleap",
            ScanTarget::Scored => "Scored",
            ScanTarget::Pose => "Pose",
            ScanTarget::ArenaImage => "ArenaImage",
            ScanTarget::FlyVideo => "FlyVideo",
            ScanTarget::CropVideo => "CropVideo",
            ScanTarget::FlagScored => "Flag/Scored",
            ScanTarget::FlagPose => "Flag/Pose",
            ScanTarget::ErrorTracked => "Error/Tracked",
            ScanTarget::ErrorPose => "Error/Pose",
        }
    }
}

/// List entries of `dir` whose name ends with `suffix`, sorted by path.
///
/// Mirrors a `*{suffix}` glob: non-recursive and case-sensitive. Dotfiles and
/// names that are not valid UTF-8 are listed too; the match is on raw bytes.
/// A missing or unreadable folder yields nothing.
pub fn scan_sorted(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(folder = %dir.display(), "scan folder does not exist");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(folder = %dir.display(), error = %e, "scan folder is not readable");
            return Vec::new();
        }
    };

    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .as_encoded_bytes()
                .ends_with(suffix.as_bytes())
        })
        .map(|entry| entry.path())
        .collect();

    found.sort();
    found
}

/// Every canonical counterpart of one stem.
///
/// Error copies are not materialized: they must carry the original filename,
/// so they are computed on request from [`Siblings::original_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Siblings {
    pub base: String,
    pub original_name: String,
    pub tracked: PathBuf,
    pub sleap: PathBuf,
    pub scored: PathBuf,
    pub pose: PathBuf,
    pub arenaimg: PathBuf,
    pub flyvideo: PathBuf,
    pub cropvideo: PathBuf,
    pub flag_scored: PathBuf,
    pub flag_pose: PathBuf,
    #[serde(skip)]
    error_tracked_dir: PathBuf,
    #[serde(skip)]
    error_pose_dir: PathBuf,
}

impl Siblings {
    pub fn error_tracked_copy(&self) -> PathBuf {
        self.error_tracked_dir.join(&self.original_name)
    }

    pub fn error_pose_copy(&self) -> PathBuf {
        self.error_pose_dir.join(&self.original_name)
    }

    /// Good-output path for `kind`
    pub fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Tracked => &self.tracked,
            ArtifactKind::Sleap => &self.sleap,
            ArtifactKind::ArenaImage => &self.arenaimg,
            ArtifactKind::FlyVideo => &self.flyvideo,
            ArtifactKind::CropVideo => &self.cropvideo,
            ArtifactKind::Scored => &self.scored,
            ArtifactKind::Pose => &self.pose,
        }
    }
}

impl ExperimentLayout {
    /// Sorted files of one scan target
    pub fn discover(&self, target: ScanTarget) -> Vec<PathBuf> {
        scan_sorted(self.folder(target.folder()), target.kind().suffix())
    }

    pub fn discover_tracked(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::Tracked)
    }

    pub fn discover_sleap(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::Sleap)
    }

    pub fn discover_scored(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::Scored)
    }

    pub fn discover_pose(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::Pose)
    }

    pub fn discover_arenaimg(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::ArenaImage)
    }

    pub fn discover_flyvideo(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::FlyVideo)
    }

    pub fn discover_cropvideo(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::CropVideo)
    }

    pub fn discover_flag_scored(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::FlagScored)
    }

    pub fn discover_flag_pose(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::FlagPose)
    }

    pub fn discover_error_tracked_copies(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::ErrorTracked)
    }

    pub fn discover_error_pose_copies(&self) -> Vec<PathBuf> {
        self.discover(ScanTarget::ErrorPose)
    }

    /// Files of `source` whose `companion` output does not exist yet.
    ///
    /// One existence check per candidate; both sides are never indexed.
    pub fn missing_companion(&self, source: ScanTarget, companion: ArtifactKind) -> Vec<PathBuf> {
        self.discover(source)
            .into_iter()
            .filter(|path| {
                let stem = stem_without_suffix(&path.to_string_lossy());
                !self.artifact_path(companion, &stem).exists()
            })
            .collect()
    }

    /// Tracked files still waiting for pose estimation
    pub fn tracked_missing_sleap(&self) -> Vec<PathBuf> {
        self.missing_companion(ScanTarget::Tracked, ArtifactKind::Sleap)
    }

    /// Tracked files still waiting for scoring
    pub fn tracked_missing_scored(&self) -> Vec<PathBuf> {
        self.missing_companion(ScanTarget::Tracked, ArtifactKind::Scored)
    }

    /// All canonical counterparts of a policy filename, path, or bare stem
    pub fn siblings(&self, from: impl AsRef<Path>) -> Siblings {
        let original_name = file_name_of(&from.as_ref().to_string_lossy()).to_string();
        let base = stem_without_suffix(&original_name);

        Siblings {
            tracked: self.tracked_path(&base),
            sleap: self.sleap_path(&base),
            scored: self.scored_path(&base),
            pose: self.pose_path(&base),
            arenaimg: self.arenaimg_path(&base),
            flyvideo: self.flyvideo_path(&base),
            cropvideo: self.cropvideo_path(&base),
            flag_scored: self.flag_scored_path(&base),
            flag_pose: self.flag_pose_path(&base),
            error_tracked_dir: self.folder(ErrorCopyKind::Tracked.folder()).to_path_buf(),
            error_pose_dir: self.folder(ErrorCopyKind::Pose.folder()).to_path_buf(),
            original_name,
            base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::folders::FolderMap;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn test_layout() -> (TempDir, ExperimentLayout) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let layout = ExperimentLayout::new(FolderMap::new(dir.path()).unwrap());
        (dir, layout)
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let (_dir, layout) = test_layout();
        for target in ScanTarget::ALL {
            assert!(layout.discover(target).is_empty());
        }
        assert!(layout.tracked_missing_sleap().is_empty());
    }

    #[test]
    fn test_discovery_is_sorted_and_filtered() {
        let (_dir, layout) = test_layout();
        touch(&layout.tracked_path("C_fly1"));
        touch(&layout.tracked_path("A_fly2"));
        touch(&layout.tracked_path("B_fly1"));
        touch(&layout.folder(FolderKey::Tracked).join("README.txt"));
        touch(&layout.folder(FolderKey::Tracked).join("upper_TRACKED.csv"));
        touch(&layout.folder(FolderKey::Tracked).join("nested/D_fly1_tracked.csv"));

        let found = layout.discover_tracked();
        assert_eq!(
            names(&found),
            vec!["A_fly2_tracked.csv", "B_fly1_tracked.csv", "C_fly1_tracked.csv"]
        );
        assert!(found.iter().all(|p| p.parent() == Some(layout.folder(FolderKey::Tracked))));
    }

    #[test]
    fn test_dotfiles_are_listed() {
        let (_dir, layout) = test_layout();
        touch(&layout.tracked_path("a"));
        touch(&layout.tracked_path(".h"));
        touch(&layout.folder(FolderKey::Tracked).join(".DS_Store"));

        assert_eq!(
            names(&layout.discover_tracked()),
            vec![".h_tracked.csv", "a_tracked.csv"]
        );
        assert_eq!(layout.tracked_missing_sleap().len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_dir, layout) = test_layout();
        touch(&layout.tracked_path("a"));
        let odd = OsStr::from_bytes(b"b\xff_tracked.csv");
        touch(&layout.folder(FolderKey::Tracked).join(odd));

        let found = layout.discover_tracked();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].file_name(), Some(odd));
    }

    #[test]
    fn test_unreadable_folder_is_empty() {
        let (_dir, layout) = test_layout();
        // A regular file where the folder should be cannot be listed.
        touch(layout.folder(FolderKey::Tracked));

        assert!(layout.discover_tracked().is_empty());
        assert!(layout.tracked_missing_scored().is_empty());
    }

    #[test]
    fn test_each_basic_target_uses_its_suffix() {
        let (_dir, layout) = test_layout();
        for kind in ArtifactKind::ALL {
            touch(&layout.artifact_path(kind, "E_fly1"));
        }

        assert_eq!(names(&layout.discover_tracked()), vec!["E_fly1_tracked.csv"]);
        assert_eq!(names(&layout.discover_sleap()), vec!["E_fly1_sleap.csv"]);
        assert_eq!(names(&layout.discover_scored()), vec!["E_fly1_scored.csv"]);
        assert_eq!(names(&layout.discover_pose()), vec!["E_fly1_pose.csv"]);
        assert_eq!(names(&layout.discover_arenaimg()), vec!["E_fly1_arenaimg.png"]);
        assert_eq!(names(&layout.discover_flyvideo()), vec!["E_fly1_flyvideo.avi"]);
        assert_eq!(names(&layout.discover_cropvideo()), vec!["E_fly1_cropvideo.avi"]);
    }

    #[test]
    fn test_qc_targets() {
        let (_dir, layout) = test_layout();
        touch(&layout.flag_scored_path("F_fly1"));
        touch(&layout.flag_pose_path("F_fly2"));
        touch(&layout.error_tracked_copy_path("G_fly1_tracked.csv"));
        touch(&layout.error_pose_copy_path("G_fly2_sleap.csv"));
        // Wrong suffix for the error pose folder: copies there are sleap inputs.
        touch(&layout.error_pose_copy_path("G_fly3_pose.csv"));

        assert_eq!(names(&layout.discover_flag_scored()), vec!["F_fly1_scored.csv"]);
        assert_eq!(names(&layout.discover_flag_pose()), vec!["F_fly2_pose.csv"]);
        assert_eq!(
            names(&layout.discover_error_tracked_copies()),
            vec!["G_fly1_tracked.csv"]
        );
        assert_eq!(names(&layout.discover_error_pose_copies()), vec!["G_fly2_sleap.csv"]);
    }

    #[test]
    fn test_tracked_missing_sleap() {
        let (_dir, layout) = test_layout();
        touch(&layout.tracked_path("A"));
        touch(&layout.tracked_path("B"));
        touch(&layout.sleap_path("A"));

        assert_eq!(layout.tracked_missing_sleap(), vec![layout.tracked_path("B")]);
    }

    #[test]
    fn test_tracked_missing_scored() {
        let (_dir, layout) = test_layout();
        touch(&layout.tracked_path("A_fly1"));
        touch(&layout.tracked_path("A_fly2"));
        touch(&layout.tracked_path("A_fly3"));
        touch(&layout.scored_path("A_fly2"));
        // A flagged output does not count as scored.
        touch(&layout.flag_scored_path("A_fly3"));

        assert_eq!(
            layout.tracked_missing_scored(),
            vec![layout.tracked_path("A_fly1"), layout.tracked_path("A_fly3")]
        );
    }

    #[test]
    fn test_siblings_from_any_member() {
        let (_dir, layout) = test_layout();
        let from_sleap = layout.siblings("/somewhere/Exp1_fly3_sleap.csv");
        let from_stem = layout.siblings("Exp1_fly3");

        assert_eq!(from_sleap.base, "Exp1_fly3");
        assert_eq!(from_stem.base, "Exp1_fly3");
        assert_eq!(from_sleap.tracked, layout.tracked_path("Exp1_fly3"));
        assert_eq!(from_sleap.pose, layout.pose_path("Exp1_fly3"));
        assert_eq!(from_sleap.flag_scored, layout.flag_scored_path("Exp1_fly3"));
        assert_eq!(from_sleap.get(ArtifactKind::CropVideo), layout.cropvideo_path("Exp1_fly3"));
        assert_eq!(from_stem.tracked, from_sleap.tracked);
    }

    #[test]
    fn test_siblings_of_root_keep_error_copies_in_place() {
        let (_dir, layout) = test_layout();
        let siblings = layout.siblings("/");

        assert_eq!(siblings.original_name, "");
        assert_eq!(siblings.error_tracked_copy(), layout.folder(FolderKey::ErrorTracked));
        assert!(siblings.error_pose_copy().starts_with(layout.folder(FolderKey::ErrorPose)));
    }

    #[test]
    fn test_sibling_error_copies_use_original_name() {
        let (_dir, layout) = test_layout();
        let siblings = layout.siblings("Exp1_fly3_sleap.csv");

        assert_eq!(
            siblings.error_pose_copy(),
            layout.error_pose_copy_path("Exp1_fly3_sleap.csv")
        );
        assert_eq!(
            siblings.error_tracked_copy(),
            layout.folder(FolderKey::ErrorTracked).join("Exp1_fly3_sleap.csv")
        );
    }
}
