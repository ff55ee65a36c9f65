//! Columns carried by more than one file
//!
//! `FrameIndex` is the per-frame reference aligned to `BASE.FrameID`; the three
//! stimulus channels keep the names the experiment protocol uses.

use crate::param::schema::{Domain, ParamRole, ParamSpec, ParamType, Tag, BINARY_STATE};

pub const SHARED_COUNT: usize = 4;

const STIMULUS_TAGS: &[Tag] = &[Tag::Tracked, Tag::Scored, Tag::Stimuli];

const fn stimulus(label: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        label,
        tags: STIMULUS_TAGS,
        param_type: ParamType::Int,
        unit: Some("state"),
        role: ParamRole::Binary,
        domain: BINARY_STATE,
        description,
    }
}

pub(crate) const SHARED: &[(&str, ParamSpec)] = &[
    (
        "FrameIndex",
        ParamSpec {
            label: "Frame Index",
            tags: &[Tag::Tracked, Tag::Sleap, Tag::Pose, Tag::Scored],
            param_type: ParamType::Int,
            unit: Some("frames"),
            role: ParamRole::Continuous,
            domain: Domain::Unbounded,
            description: "Reference aligned to BASE.FrameID; not a local 0..N counter.",
        },
    ),
    ("VisualStim", stimulus("VisualStim", "Visual stimulus on/off per frame.")),
    ("Stim0", stimulus("RedLED", "Red LED stimulus on/off per frame.")),
    ("Stim1", stimulus("GreenLED", "Green LED stimulus on/off per frame.")),
];

const _: () = assert!(SHARED.len() == SHARED_COUNT);
