//! Arena-calibrated positions (mm) and orientation from pose.csv

use crate::param::schema::{Domain, DomainValue, ParamRole, ParamSpec, ParamType, Tag};

pub const POSE_COUNT: usize = 14;

const fn millimetres(label: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        label,
        tags: &[Tag::Pose],
        param_type: ParamType::Float,
        unit: Some("mm"),
        role: ParamRole::Continuous,
        domain: Domain::Unbounded,
        description,
    }
}

pub(crate) const POSE: &[(&str, ParamSpec)] = &[
    (
        "View",
        ParamSpec {
            label: "View",
            tags: &[Tag::Pose],
            param_type: ParamType::String,
            unit: Some("category"),
            role: ParamRole::Categorical,
            domain: Domain::Values(&[
                DomainValue::Text("Left"),
                DomainValue::Text("Right"),
                DomainValue::Text("Top"),
                DomainValue::Text("Vertical"),
            ]),
            description: "Selected camera view label (Bottom→Top normalized).",
        },
    ),
    (
        "View_X",
        millimetres("View X", "X coordinate (mm) in the selected view, post-calibration."),
    ),
    (
        "View_Y",
        millimetres("View Y", "Y coordinate (mm) in the selected view, post-calibration."),
    ),
    (
        "Orientation",
        ParamSpec {
            label: "Orientation",
            tags: &[Tag::Pose],
            param_type: ParamType::Float,
            unit: Some("deg"),
            role: ParamRole::Continuous,
            domain: Domain::Range { min: 0.0, max: 360.0 },
            description: "Body orientation (deg) from Thorax→View axis; 0–360 wrap.",
        },
    ),
    // Per-part positions in the selected view
    ("Head_X", millimetres("Head X", "Head keypoint X (mm) in the selected view.")),
    ("Head_Y", millimetres("Head Y", "Head keypoint Y (mm) in the selected view.")),
    ("Thorax_X", millimetres("Thorax X", "Thorax keypoint X (mm) in the selected view.")),
    ("Thorax_Y", millimetres("Thorax Y", "Thorax keypoint Y (mm) in the selected view.")),
    ("Abdomen_X", millimetres("Abdomen X", "Abdomen keypoint X (mm) in the selected view.")),
    ("Abdomen_Y", millimetres("Abdomen Y", "Abdomen keypoint Y (mm) in the selected view.")),
    (
        "LeftWing_X",
        millimetres("Left Wing X", "Left wing keypoint X (mm) in the selected view."),
    ),
    (
        "LeftWing_Y",
        millimetres("Left Wing Y", "Left wing keypoint Y (mm) in the selected view."),
    ),
    (
        "RightWing_X",
        millimetres("Right Wing X", "Right wing keypoint X (mm) in the selected view."),
    ),
    (
        "RightWing_Y",
        millimetres("Right Wing Y", "Right wing keypoint Y (mm) in the selected view."),
    ),
];

const _: () = assert!(POSE.len() == POSE_COUNT);
