//! Hardware counters and GPIO signals from BASE.csv

use crate::param::schema::{Domain, ParamRole, ParamSpec, ParamType, Tag};

pub const BASE_COUNT: usize = 3;

pub(crate) const BASE: &[(&str, ParamSpec)] = &[
    (
        "GPIO",
        ParamSpec {
            label: "GPIO State",
            tags: &[Tag::Base],
            param_type: ParamType::Int,
            unit: Some("state"),
            role: ParamRole::Categorical,
            domain: Domain::Unbounded,
            description: "Digital input state from GPIO pins aligned to frame clock (stimulus markers).",
        },
    ),
    (
        "FrameID",
        ParamSpec {
            label: "Frame ID",
            tags: &[Tag::Base],
            param_type: ParamType::Int,
            unit: Some("frames"),
            role: ParamRole::Continuous,
            domain: Domain::Unbounded,
            description: "Camera frame counter ticks aligned to frame clock (may not start at 0).",
        },
    ),
    (
        "Timestamp",
        ParamSpec {
            label: "Timestamp",
            tags: &[Tag::Base],
            param_type: ParamType::Int,
            unit: Some("ns"),
            role: ParamRole::Continuous,
            domain: Domain::Unbounded,
            description: "Acquisition clock time in nanoseconds (monotonic, not Unix time).",
        },
    ),
];

const _: () = assert!(BASE.len() == BASE_COUNT);
