//! Derived kinematics and layered classifier labels from scored.csv
//!
//! Categorical domains are listed in canonical order.

use crate::param::schema::{
    Domain, DomainValue, ParamRole, ParamSpec, ParamType, Tag, BINARY_STATE,
};

pub const SCORED_COUNT: usize = 12;

const LAYER1: &[DomainValue] = &[
    DomainValue::Text("Layer1_Jump"),
    DomainValue::Text("Layer1_Walk"),
    DomainValue::Text("Layer1_Stationary"),
    DomainValue::Text("Layer1_Freeze"),
];

const LAYER2: &[DomainValue] = &[
    DomainValue::Text("Layer2_Jump"),
    DomainValue::Text("Layer2_Walk"),
    DomainValue::Text("Layer2_Stationary"),
    DomainValue::Text("Layer2_Freeze"),
];

const RESISTANT: &[DomainValue] = &[
    DomainValue::Text("Resistant_Walk"),
    DomainValue::Text("Resistant_Stationary"),
    DomainValue::Text("Resistant_Freeze"),
];

const BEHAVIOR: &[DomainValue] = &[
    DomainValue::Text("Jump"),
    DomainValue::Text("Walk"),
    DomainValue::Text("Stationary"),
    DomainValue::Text("Freeze"),
    DomainValue::Text("Resistant_Freeze"),
];

const fn kinematic(label: &'static str, unit: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        label,
        tags: &[Tag::Scored],
        param_type: ParamType::Float,
        unit: Some(unit),
        role: ParamRole::Continuous,
        domain: Domain::Unbounded,
        description,
    }
}

const fn classification(
    label: &'static str,
    values: &'static [DomainValue],
    description: &'static str,
) -> ParamSpec {
    ParamSpec {
        label,
        tags: &[Tag::Scored],
        param_type: ParamType::String,
        unit: Some("classification"),
        role: ParamRole::Categorical,
        domain: Domain::Values(values),
        description,
    }
}

pub(crate) const SCORED: &[(&str, ParamSpec)] = &[
    (
        "Position_X",
        kinematic("Position X", "mm", "Centroid X position (mm) in arena coordinates."),
    ),
    (
        "Position_Y",
        kinematic("Position Y", "mm", "Centroid Y position (mm) in arena coordinates."),
    ),
    (
        "Speed",
        kinematic("Speed", "mm/s", "Instantaneous centroid speed (mm/s)."),
    ),
    (
        "Motion",
        ParamSpec {
            label: "Motion",
            tags: &[Tag::Scored],
            param_type: ParamType::Int,
            unit: Some("state"),
            role: ParamRole::Binary,
            domain: BINARY_STATE,
            description: "Binary motion flag from PixelChange (1 = motion).",
        },
    ),
    // Layered labels
    (
        "Layer1",
        classification("Layer 1", LAYER1, "First-pass classifier label per frame."),
    ),
    (
        "Layer1_Denoised",
        classification(
            "Layer 1 (Denoised)",
            LAYER1,
            "Layer1 with micro-bouts removed (jump preserved).",
        ),
    ),
    (
        "Layer2",
        classification("Layer 2", LAYER2, "Windowed consensus over Layer1 (jump override)."),
    ),
    (
        "Layer2_Denoised",
        classification(
            "Layer 2 (Denoised)",
            LAYER2,
            "Consensus over Layer1_Denoised with half-missing rule.",
        ),
    ),
    // Resistant tiers
    (
        "Resistant",
        classification(
            "Resistant",
            RESISTANT,
            "Summary when a full bout covers a startle window.",
        ),
    ),
    (
        "Resistant_Denoised",
        classification(
            "Resistant (Denoised)",
            RESISTANT,
            "Resistant summary using denoised paths.",
        ),
    ),
    (
        "Behavior",
        classification(
            "Behavior",
            BEHAVIOR,
            "Behavior mapped from Layer2; Freeze may promote to Resistant_Freeze.",
        ),
    ),
    (
        "Behavior_Denoised",
        classification(
            "Behavior (Denoised)",
            BEHAVIOR,
            "Behavior from Layer2_Denoised (NaN placeholder removed from domain).",
        ),
    ),
];

const _: () = assert!(SCORED.len() == SCORED_COUNT);
