//! Filename suffix policy
//!
//! Every per-fly artifact is named `{stem}{suffix}` where the stem looks like
//! `{ExperimentName}_fly{N}`. The suffixes and the two report filenames below are
//! a fixed on-disk contract shared with the tracker and classifier tools.

use serde::{Deserialize, Serialize};

// PostProcessing artifacts (tracker & pose outputs)
pub const SUFFIX_TRACKED: &str = "_tracked.csv";
pub const SUFFIX_SLEAP: &str = "_sleap.csv";
pub const SUFFIX_ARENAIMG: &str = "_arenaimg.png";
pub const SUFFIX_FLYVIDEO: &str = "_flyvideo.avi";
pub const SUFFIX_CROPVIDEO: &str = "_cropvideo.avi";

// BehaviorClassification outputs
pub const SUFFIX_SCORED: &str = "_scored.csv";
pub const SUFFIX_POSE: &str = "_pose.csv";

pub const REPORT_ERROR_NAME: &str = "REPORT_ERROR.csv";
pub const REPORT_FLAG_NAME: &str = "REPORT_FLAG.csv";

/// Known artifact suffixes in priority order.
///
/// Stem extraction tries these front to back and strips the first match, so the
/// order is part of the naming contract and must not be rearranged.
pub const KNOWN_SUFFIXES: [&str; 7] = [
    SUFFIX_TRACKED,
    SUFFIX_SLEAP,
    SUFFIX_ARENAIMG,
    SUFFIX_FLYVIDEO,
    SUFFIX_CROPVIDEO,
    SUFFIX_SCORED,
    SUFFIX_POSE,
];

/// Category of per-fly pipeline output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Tracked,
    Sleap,
    ArenaImage,
    FlyVideo,
    CropVideo,
    Scored,
    Pose,
}

impl ArtifactKind {
    /// All kinds, in the same order as [`KNOWN_SUFFIXES`]
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Tracked,
        ArtifactKind::Sleap,
        ArtifactKind::ArenaImage,
        ArtifactKind::FlyVideo,
        ArtifactKind::CropVideo,
        ArtifactKind::Scored,
        ArtifactKind::Pose,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Tracked => SUFFIX_TRACKED,
            ArtifactKind::Sleap => SUFFIX_SLEAP,
            ArtifactKind::ArenaImage => SUFFIX_ARENAIMG,
            ArtifactKind::FlyVideo => SUFFIX_FLYVIDEO,
            ArtifactKind::CropVideo => SUFFIX_CROPVIDEO,
            ArtifactKind::Scored => SUFFIX_SCORED,
            ArtifactKind::Pose => SUFFIX_POSE,
        }
    }

    /// Policy name of the kind ("TRACKED", "ARENAIMG", ...)
    pub fn policy_name(&self) -> &'static str {
        match self {
            ArtifactKind::Tracked => "TRACKED",
            ArtifactKind::Sleap => "SLEAP",
            ArtifactKind::ArenaImage => "ARENAIMG",
            ArtifactKind::FlyVideo => "FLYVIDEO",
            ArtifactKind::CropVideo => "CROPVIDEO",
            ArtifactKind::Scored => "SCORED",
            ArtifactKind::Pose => "POSE",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Tracked => "tracked",
            ArtifactKind::Sleap => "sleap",
            ArtifactKind::ArenaImage => "arenaimg",
            ArtifactKind::FlyVideo => "flyvideo",
            ArtifactKind::CropVideo => "cropvideo",
            ArtifactKind::Scored => "scored",
            ArtifactKind::Pose => "pose",
        }
    }
}

/// Fixed-name QC report files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Error,
    Flag,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Error, ReportKind::Flag];

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::Error => REPORT_ERROR_NAME,
            ReportKind::Flag => REPORT_FLAG_NAME,
        }
    }
}

/// Read-only view of the whole suffix policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuffixPolicy;

impl SuffixPolicy {
    /// Policy entries keyed by their export names, artifacts first, then reports
    pub fn entries(&self) -> [(&'static str, &'static str); 9] {
        [
            ("SUFFIX_TRACKED", SUFFIX_TRACKED),
            ("SUFFIX_SLEAP", SUFFIX_SLEAP),
            ("SUFFIX_ARENAIMG", SUFFIX_ARENAIMG),
            ("SUFFIX_FLYVIDEO", SUFFIX_FLYVIDEO),
            ("SUFFIX_CROPVIDEO", SUFFIX_CROPVIDEO),
            ("SUFFIX_SCORED", SUFFIX_SCORED),
            ("SUFFIX_POSE", SUFFIX_POSE),
            ("REPORT_ERROR_NAME", REPORT_ERROR_NAME),
            ("REPORT_FLAG_NAME", REPORT_FLAG_NAME),
        ]
    }

    /// Suffix registered under a policy name such as "TRACKED"
    pub fn suffix_for(&self, policy_name: &str) -> Option<&'static str> {
        ArtifactKind::ALL
            .iter()
            .find(|kind| kind.policy_name() == policy_name)
            .map(ArtifactKind::suffix)
    }

    pub fn known_suffixes(&self) -> &'static [&'static str; 7] {
        &KNOWN_SUFFIXES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_known_suffixes() {
        let suffixes: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.suffix()).collect();
        assert_eq!(suffixes, KNOWN_SUFFIXES.to_vec());
    }

    #[test]
    fn test_suffix_contract() {
        assert_eq!(SUFFIX_TRACKED, "_tracked.csv");
        assert_eq!(SUFFIX_SLEAP, "_sleap.csv");
        assert_eq!(SUFFIX_ARENAIMG, "_arenaimg.png");
        assert_eq!(SUFFIX_FLYVIDEO, "_flyvideo.avi");
        assert_eq!(SUFFIX_CROPVIDEO, "_cropvideo.avi");
        assert_eq!(SUFFIX_SCORED, "_scored.csv");
        assert_eq!(SUFFIX_POSE, "_pose.csv");
        assert_eq!(ReportKind::Error.file_name(), "REPORT_ERROR.csv");
        assert_eq!(ReportKind::Flag.file_name(), "REPORT_FLAG.csv");
    }

    #[test]
    fn test_policy_lookup_by_name() {
        let policy = SuffixPolicy;
        assert_eq!(policy.suffix_for("ARENAIMG"), Some("_arenaimg.png"));
        assert_eq!(policy.suffix_for("CROPVIDEO"), Some("_cropvideo.avi"));
        assert_eq!(policy.suffix_for("tracked"), None);
        assert_eq!(policy.entries().len(), 9);
    }

    #[test]
    fn test_no_suffix_shadows_a_later_one() {
        // A later suffix that ends with an earlier one would never be stripped.
        for (i, early) in KNOWN_SUFFIXES.iter().enumerate() {
            for late in &KNOWN_SUFFIXES[i + 1..] {
                assert!(!late.ends_with(early), "{late} is shadowed by {early}");
            }
        }
    }
}
