//! Tracked geometry and motion proxy from tracked.csv

use crate::param::schema::{Domain, ParamRole, ParamSpec, ParamType, Tag, UNIT_INTERVAL};

pub const TRACKED_COUNT: usize = 3;

pub(crate) const TRACKED: &[(&str, ParamSpec)] = &[
    (
        "NormalizedCentroidX",
        ParamSpec {
            label: "Normalized Centroid X",
            tags: &[Tag::Tracked],
            param_type: ParamType::Float,
            unit: Some("fraction"),
            role: ParamRole::Continuous,
            domain: UNIT_INTERVAL,
            description: "Centroid X normalized to arena width (0–1).",
        },
    ),
    (
        "NormalizedCentroidY",
        ParamSpec {
            label: "Normalized Centroid Y",
            tags: &[Tag::Tracked],
            param_type: ParamType::Float,
            unit: Some("fraction"),
            role: ParamRole::Continuous,
            domain: UNIT_INTERVAL,
            description: "Centroid Y normalized to arena height (0–1).",
        },
    ),
    (
        "PixelChange",
        ParamSpec {
            label: "Pixel Change",
            tags: &[Tag::Tracked],
            param_type: ParamType::Int,
            unit: Some("px"),
            role: ParamRole::Continuous,
            domain: Domain::Unbounded,
            description: "Count of changed pixels between consecutive frames (motion proxy).",
        },
    ),
];

const _: () = assert!(TRACKED.len() == TRACKED_COUNT);
