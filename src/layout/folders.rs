//! Canonical folder map
//!
//! The experiment tree is fully determined by its root:
//!
//! ```text
//! root/
//!   Codes/{Config, BehaviorClassifier}
//!   Bonfly/{Bonsai, FlyHigher-Protocol, FlyHigher-Tracker}
//!   RawData/
//!   PostProcessing/{Tracked, Sleap, ArenaImage, FlyVideo, CropVideo}
//!   BehaviorClassification/
//!     Scored/ Pose/
//!     Error/{Tracked, Pose}
//!     Flag/{Scored, Pose}
//! ```

use crate::error::ConfigError;
use crate::layout::roots::{absolutize, normalize_lexically};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key of one canonical folder. Serialized under its legacy export name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FolderKey {
    #[serde(rename = "pExperimentalFolder")]
    ExperimentRoot,

    // Codes/ (importable packages)
    #[serde(rename = "pCodes")]
    Codes,
    #[serde(rename = "pConfig")]
    Config,
    #[serde(rename = "pBehaviorClassifier")]
    BehaviorClassifier,

    // Bonfly/ (acquisition tooling)
    #[serde(rename = "pBonfly")]
    Bonfly,
    #[serde(rename = "pBonsai")]
    Bonsai,
    #[serde(rename = "pFlyHigherProtocol")]
    FlyHigherProtocol,
    #[serde(rename = "pFlyHigherTracker")]
    FlyHigherTracker,

    #[serde(rename = "pRawData")]
    RawData,

    // PostProcessing/ (tracker & pose outputs)
    #[serde(rename = "pPostProcessing")]
    PostProcessing,
    #[serde(rename = "pTracked")]
    Tracked,
    #[serde(rename = "pSleap")]
    Sleap,
    #[serde(rename = "pArenaImage")]
    ArenaImage,
    #[serde(rename = "pFlyVideo")]
    FlyVideo,
    #[serde(rename = "pCropVideo")]
    CropVideo,

    // BehaviorClassification/ (classifier outputs and QC)
    #[serde(rename = "pBehaviorClassification")]
    BehaviorClassification,
    #[serde(rename = "pScored")]
    Scored,
    #[serde(rename = "pPose")]
    Pose,
    #[serde(rename = "pError")]
    Error,
    #[serde(rename = "pErrorTracked")]
    ErrorTracked,
    #[serde(rename = "pErrorPose")]
    ErrorPose,
    #[serde(rename = "pFlag")]
    Flag,
    #[serde(rename = "pFlagScored")]
    FlagScored,
    #[serde(rename = "pFlagPose")]
    FlagPose,
}

/// Number of folder keys, root included
pub const FOLDER_COUNT: usize = 24;

impl FolderKey {
    pub const ALL: [FolderKey; FOLDER_COUNT] = [
        FolderKey::ExperimentRoot,
        FolderKey::Codes,
        FolderKey::Config,
        FolderKey::BehaviorClassifier,
        FolderKey::Bonfly,
        FolderKey::Bonsai,
        FolderKey::FlyHigherProtocol,
        FolderKey::FlyHigherTracker,
        FolderKey::RawData,
        FolderKey::PostProcessing,
        FolderKey::Tracked,
        FolderKey::Sleap,
        FolderKey::ArenaImage,
        FolderKey::FlyVideo,
        FolderKey::CropVideo,
        FolderKey::BehaviorClassification,
        FolderKey::Scored,
        FolderKey::Pose,
        FolderKey::Error,
        FolderKey::ErrorTracked,
        FolderKey::ErrorPose,
        FolderKey::Flag,
        FolderKey::FlagScored,
        FolderKey::FlagPose,
    ];

    /// Parent folder, `None` for the experiment root
    pub fn parent(&self) -> Option<FolderKey> {
        use FolderKey::*;
        match self {
            ExperimentRoot => None,
            Codes | Bonfly | RawData | PostProcessing | BehaviorClassification => {
                Some(ExperimentRoot)
            }
            Config | BehaviorClassifier => Some(Codes),
            Bonsai | FlyHigherProtocol | FlyHigherTracker => Some(Bonfly),
            Tracked | Sleap | ArenaImage | FlyVideo | CropVideo => Some(PostProcessing),
            Scored | Pose | Error | Flag => Some(BehaviorClassification),
            ErrorTracked | ErrorPose => Some(Error),
            FlagScored | FlagPose => Some(Flag),
        }
    }

    /// Directory name on disk, empty for the experiment root
    pub fn dir_name(&self) -> &'static str {
        use FolderKey::*;
        match self {
            ExperimentRoot => "",
            Codes => "Codes",
            Config => "Config",
            BehaviorClassifier => "BehaviorClassifier",
            Bonfly => "Bonfly",
            Bonsai => "Bonsai",
            FlyHigherProtocol => "FlyHigher-Protocol",
            FlyHigherTracker => "FlyHigher-Tracker",
            RawData => "RawData",
            PostProcessing => "PostProcessing",
            Tracked => "Tracked",
            Sleap => "Sleap",
            ArenaImage => "ArenaImage",
            FlyVideo => "FlyVideo",
            CropVideo => "CropVideo",
            BehaviorClassification => "BehaviorClassification",
            Scored => "Scored",
            Pose => "Pose",
            Error => "Error",
            ErrorTracked => "Tracked",
            ErrorPose => "Pose",
            Flag => "Flag",
            FlagScored => "Scored",
            FlagPose => "Pose",
        }
    }

    /// Legacy export name ("pTracked", "pFlagScored", ...)
    pub fn export_name(&self) -> &'static str {
        use FolderKey::*;
        match self {
            ExperimentRoot => "pExperimentalFolder",
            Codes => "pCodes",
            Config => "pConfig",
            BehaviorClassifier => "pBehaviorClassifier",
            Bonfly => "pBonfly",
            Bonsai => "pBonsai",
            FlyHigherProtocol => "pFlyHigherProtocol",
            FlyHigherTracker => "pFlyHigherTracker",
            RawData => "pRawData",
            PostProcessing => "pPostProcessing",
            Tracked => "pTracked",
            Sleap => "pSleap",
            ArenaImage => "pArenaImage",
            FlyVideo => "pFlyVideo",
            CropVideo => "pCropVideo",
            BehaviorClassification => "pBehaviorClassification",
            Scored => "pScored",
            Pose => "pPose",
            Error => "pError",
            ErrorTracked => "pErrorTracked",
            ErrorPose => "pErrorPose",
            Flag => "pFlag",
            FlagScored => "pFlagScored",
            FlagPose => "pFlagPose",
        }
    }

    /// Path relative to the experiment root
    pub fn relative_path(&self) -> PathBuf {
        let mut segments = Vec::new();
        let mut current = Some(*self);
        while let Some(key) = current {
            if key != FolderKey::ExperimentRoot {
                segments.push(key.dir_name());
            }
            current = key.parent();
        }
        segments.iter().rev().collect()
    }

    /// Subfolders only, i.e. every key except the root
    pub fn subfolders() -> impl Iterator<Item = FolderKey> {
        FolderKey::ALL
            .into_iter()
            .filter(|key| *key != FolderKey::ExperimentRoot)
    }
}

/// Resolved folder tree for one experiment root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderMap {
    #[serde(skip)]
    root: PathBuf,
    #[serde(flatten)]
    folders: BTreeMap<FolderKey, PathBuf>,
}

impl FolderMap {
    /// Build the folder map under `root`.
    ///
    /// Pure path construction; nothing on disk is touched. Fails if two keys
    /// resolve to the same location, which would mix package code with
    /// generated outputs.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let folders: BTreeMap<FolderKey, PathBuf> = FolderKey::ALL
            .iter()
            .map(|key| match key {
                FolderKey::ExperimentRoot => (*key, root.clone()),
                _ => (*key, root.join(key.relative_path())),
            })
            .collect();

        let map = Self { root, folders };
        map.check_collisions()?;
        Ok(map)
    }

    /// Same tree rebuilt under `new_root` (made absolute lexically).
    pub fn with_root(&self, new_root: impl AsRef<Path>) -> Result<FolderMap, ConfigError> {
        FolderMap::new(absolutize(new_root.as_ref())?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, key: FolderKey) -> &Path {
        // Every key is inserted in `new`.
        &self.folders[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FolderKey, &Path)> {
        self.folders.iter().map(|(key, path)| (*key, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Folder map keyed by legacy export names
    pub fn to_export_map(&self) -> BTreeMap<&'static str, PathBuf> {
        self.folders
            .iter()
            .map(|(key, path)| (key.export_name(), path.clone()))
            .collect()
    }

    fn check_collisions(&self) -> Result<(), ConfigError> {
        let mut seen: BTreeMap<PathBuf, FolderKey> = BTreeMap::new();
        for (key, path) in &self.folders {
            if let Some(previous) = seen.insert(normalize_lexically(path), *key) {
                return Err(ConfigError::FolderCollision {
                    first: previous.export_name(),
                    second: key.export_name(),
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }
}

const _: () = assert!(FolderKey::ALL.len() == FOLDER_COUNT);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_map() -> FolderMap {
        FolderMap::new("/data/Experiments").unwrap()
    }

    #[test]
    fn test_folder_count() {
        let map = sample_map();
        assert_eq!(map.len(), FOLDER_COUNT);
        assert_eq!(FolderKey::subfolders().count(), 23);
    }

    #[test]
    fn test_directory_layout_contract() {
        let map = sample_map();
        let expect = |key: FolderKey, rel: &str| {
            assert_eq!(map.get(key), Path::new("/data/Experiments").join(rel));
        };

        expect(FolderKey::Codes, "Codes");
        expect(FolderKey::Config, "Codes/Config");
        expect(FolderKey::BehaviorClassifier, "Codes/BehaviorClassifier");
        expect(FolderKey::Bonfly, "Bonfly");
        expect(FolderKey::FlyHigherProtocol, "Bonfly/FlyHigher-Protocol");
        expect(FolderKey::FlyHigherTracker, "Bonfly/FlyHigher-Tracker");
        expect(FolderKey::RawData, "RawData");
        expect(FolderKey::Tracked, "PostProcessing/Tracked");
        expect(FolderKey::Sleap, "PostProcessing/Sleap");
        expect(FolderKey::ArenaImage, "PostProcessing/ArenaImage");
        expect(FolderKey::FlyVideo, "PostProcessing/FlyVideo");
        expect(FolderKey::CropVideo, "PostProcessing/CropVideo");
        expect(FolderKey::Scored, "BehaviorClassification/Scored");
        expect(FolderKey::Pose, "BehaviorClassification/Pose");
        expect(FolderKey::ErrorTracked, "BehaviorClassification/Error/Tracked");
        expect(FolderKey::ErrorPose, "BehaviorClassification/Error/Pose");
        expect(FolderKey::FlagScored, "BehaviorClassification/Flag/Scored");
        expect(FolderKey::FlagPose, "BehaviorClassification/Flag/Pose");
        assert_eq!(map.get(FolderKey::ExperimentRoot), Path::new("/data/Experiments"));
    }

    #[test]
    fn test_package_and_output_folders_differ() {
        let map = sample_map();
        assert_ne!(
            map.get(FolderKey::BehaviorClassifier),
            map.get(FolderKey::BehaviorClassification)
        );
    }

    #[test]
    fn test_with_root_keeps_relative_segments() {
        let map = sample_map();
        let moved = map.with_root("/mnt/drive/ExperimentX").unwrap();

        assert_eq!(moved.root(), Path::new("/mnt/drive/ExperimentX"));
        for key in FolderKey::ALL {
            let old_rel = map.get(key).strip_prefix(map.root()).unwrap();
            let new_rel = moved.get(key).strip_prefix(moved.root()).unwrap();
            assert_eq!(old_rel, new_rel, "{}", key.export_name());
        }
    }

    #[test]
    fn test_serializes_under_export_names() {
        let map = sample_map();
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["pTracked"], "/data/Experiments/PostProcessing/Tracked");
        assert_eq!(value["pExperimentalFolder"], "/data/Experiments");
        assert_eq!(value.as_object().unwrap().len(), FOLDER_COUNT);
    }

    #[test]
    fn test_export_names_are_unique() {
        let names = sample_map().to_export_map();
        assert_eq!(names.len(), FOLDER_COUNT);
    }
}
