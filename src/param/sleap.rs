//! Normalized view and body-part positions from sleap.csv
//!
//! Views first (Left, Right, Top), then body parts (Head, Thorax, Abdomen,
//! LeftWing, RightWing); each has `Position.X`, `Position.Y` and `Confidence`.

use crate::param::schema::{ParamRole, ParamSpec, ParamType, Tag, UNIT_INTERVAL};

pub const SLEAP_COUNT: usize = 24;

const fn fraction(label: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        label,
        tags: &[Tag::Sleap],
        param_type: ParamType::Float,
        unit: Some("fraction"),
        role: ParamRole::Continuous,
        domain: UNIT_INTERVAL,
        description,
    }
}

pub(crate) const SLEAP: &[(&str, ParamSpec)] = &[
    // Left view
    (
        "Left.Position.X",
        fraction("Left View X", "Normalized X coordinate of the left camera view."),
    ),
    (
        "Left.Position.Y",
        fraction("Left View Y", "Normalized Y coordinate of the left camera view."),
    ),
    (
        "Left.Confidence",
        fraction("Left View Confidence", "Detection confidence score for the left view."),
    ),
    // Right view
    (
        "Right.Position.X",
        fraction("Right View X", "Normalized X coordinate of the right camera view."),
    ),
    (
        "Right.Position.Y",
        fraction("Right View Y", "Normalized Y coordinate of the right camera view."),
    ),
    (
        "Right.Confidence",
        fraction("Right View Confidence", "Detection confidence score for the right view."),
    ),
    // Top view
    (
        "Top.Position.X",
        fraction("Top View X", "Normalized X coordinate of the top view."),
    ),
    (
        "Top.Position.Y",
        fraction("Top View Y", "Normalized Y coordinate of the top view."),
    ),
    (
        "Top.Confidence",
        fraction("Top View Confidence", "Detection confidence score for the top view."),
    ),
    // Body parts
    (
        "Head.Position.X",
        fraction("Head X", "Normalized X coordinate of the head keypoint."),
    ),
    (
        "Head.Position.Y",
        fraction("Head Y", "Normalized Y coordinate of the head keypoint."),
    ),
    (
        "Head.Confidence",
        fraction("Head Confidence", "Detection confidence score for the head keypoint."),
    ),
    (
        "Thorax.Position.X",
        fraction("Thorax X", "Normalized X coordinate of the thorax keypoint."),
    ),
    (
        "Thorax.Position.Y",
        fraction("Thorax Y", "Normalized Y coordinate of the thorax keypoint."),
    ),
    (
        "Thorax.Confidence",
        fraction("Thorax Confidence", "Detection confidence score for the thorax keypoint."),
    ),
    (
        "Abdomen.Position.X",
        fraction("Abdomen X", "Normalized X coordinate of the abdomen keypoint."),
    ),
    (
        "Abdomen.Position.Y",
        fraction("Abdomen Y", "Normalized Y coordinate of the abdomen keypoint."),
    ),
    (
        "Abdomen.Confidence",
        fraction("Abdomen Confidence", "Detection confidence score for the abdomen keypoint."),
    ),
    (
        "LeftWing.Position.X",
        fraction("Left Wing X", "Normalized X coordinate of the left wing keypoint."),
    ),
    (
        "LeftWing.Position.Y",
        fraction("Left Wing Y", "Normalized Y coordinate of the left wing keypoint."),
    ),
    (
        "LeftWing.Confidence",
        fraction("Left Wing Confidence", "Detection confidence score for the left wing keypoint."),
    ),
    (
        "RightWing.Position.X",
        fraction("Right Wing X", "Normalized X coordinate of the right wing keypoint."),
    ),
    (
        "RightWing.Position.Y",
        fraction("Right Wing Y", "Normalized Y coordinate of the right wing keypoint."),
    ),
    (
        "RightWing.Confidence",
        fraction(
            "Right Wing Confidence",
            "Detection confidence score for the right wing keypoint.",
        ),
    ),
];

const _: () = assert!(SLEAP.len() == SLEAP_COUNT);
