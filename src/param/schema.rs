//! Parameter schema record
//!
//! One `ParamSpec` describes one CSV column produced somewhere in the pipeline.
//! Specs are `const` data; the registry only ever hands out shared references.

use serde::Serialize;

/// Provenance of a column: which file(s) carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    #[serde(rename = "BASE")]
    Base,
    #[serde(rename = "tracked")]
    Tracked,
    #[serde(rename = "sleap")]
    Sleap,
    #[serde(rename = "pose")]
    Pose,
    #[serde(rename = "scored")]
    Scored,
    /// Column is a stimulus channel
    #[serde(rename = "stimuli")]
    Stimuli,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Base => "BASE",
            Tag::Tracked => "tracked",
            Tag::Sleap => "sleap",
            Tag::Pose => "pose",
            Tag::Scored => "scored",
            Tag::Stimuli => "stimuli",
        }
    }
}

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Int,
    Float,
    String,
    Bool,
}

/// Semantic role of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamRole {
    Binary,
    Categorical,
    Continuous,
}

/// Member of a closed value set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainValue {
    Int(i64),
    Text(&'static str),
}

/// Legal values of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Unbounded,
    /// Inclusive range
    Range { min: f64, max: f64 },
    /// Closed set, in canonical order
    Values(&'static [DomainValue]),
}

/// `[0, 1]`, used by normalized coordinates and confidences
pub const UNIT_INTERVAL: Domain = Domain::Range { min: 0.0, max: 1.0 };

/// `0 | 1` state channel
pub const BINARY_STATE: Domain = Domain::Values(&[DomainValue::Int(0), DomainValue::Int(1)]);

/// Schema record for one CSV column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub label: &'static str,
    pub tags: &'static [Tag],
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub unit: Option<&'static str>,
    pub role: ParamRole,
    pub domain: Domain,
    pub description: &'static str,
}

/// Why a raw cell does not fit its column spec
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueViolation {
    #[error("Empty cell")]
    Empty,

    #[error("Cannot parse {raw:?} as {expected:?}")]
    WrongType { raw: String, expected: ParamType },

    #[error("Value {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("Value {raw:?} not in allowed set")]
    NotAllowed { raw: String },
}

impl ParamSpec {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Check one raw CSV cell against the declared type and domain.
    ///
    /// Empty cells are reported as [`ValueViolation::Empty`] so the caller
    /// decides whether missing data is acceptable for the column.
    pub fn check_value(&self, raw: &str) -> Result<(), ValueViolation> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValueViolation::Empty);
        }

        let wrong_type = || ValueViolation::WrongType {
            raw: raw.to_string(),
            expected: self.param_type,
        };

        match self.param_type {
            ParamType::Int => {
                let value = parse_int(raw).ok_or_else(wrong_type)?;
                self.check_number(value as f64, Some(value), raw)
            }
            ParamType::Float => {
                let value: f64 = raw.parse().map_err(|_| wrong_type())?;
                self.check_number(value, None, raw)
            }
            ParamType::Bool => {
                let value = parse_bool(raw).ok_or_else(wrong_type)?;
                self.check_number(if value { 1.0 } else { 0.0 }, Some(value as i64), raw)
            }
            ParamType::String => match self.domain {
                Domain::Values(allowed) => {
                    let hit = allowed
                        .iter()
                        .any(|v| matches!(v, DomainValue::Text(text) if *text == raw));
                    if hit {
                        Ok(())
                    } else {
                        Err(ValueViolation::NotAllowed {
                            raw: raw.to_string(),
                        })
                    }
                }
                _ => Ok(()),
            },
        }
    }

    fn check_number(&self, value: f64, as_int: Option<i64>, raw: &str) -> Result<(), ValueViolation> {
        match self.domain {
            Domain::Unbounded => Ok(()),
            Domain::Range { min, max } => {
                if value >= min && value <= max {
                    Ok(())
                } else {
                    Err(ValueViolation::OutOfRange { value, min, max })
                }
            }
            Domain::Values(allowed) => {
                let hit = as_int.is_some_and(|v| allowed.contains(&DomainValue::Int(v)));
                if hit {
                    Ok(())
                } else {
                    Err(ValueViolation::NotAllowed {
                        raw: raw.to_string(),
                    })
                }
            }
        }
    }
}

/// Integer cell; writers that go through a float column emit `3.0`
fn parse_int(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let f: f64 = raw.parse().ok()?;
    (f.fract() == 0.0 && f.is_finite()).then_some(f as i64)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" | "True" | "TRUE" => Some(true),
        "0" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINARY: ParamSpec = ParamSpec {
        label: "Motion",
        tags: &[Tag::Scored],
        param_type: ParamType::Int,
        unit: Some("state"),
        role: ParamRole::Binary,
        domain: BINARY_STATE,
        description: "test",
    };

    const FRACTION: ParamSpec = ParamSpec {
        label: "Fraction",
        tags: &[Tag::Sleap],
        param_type: ParamType::Float,
        unit: Some("fraction"),
        role: ParamRole::Continuous,
        domain: UNIT_INTERVAL,
        description: "test",
    };

    const LABEL: ParamSpec = ParamSpec {
        label: "View",
        tags: &[Tag::Pose],
        param_type: ParamType::String,
        unit: Some("category"),
        role: ParamRole::Categorical,
        domain: Domain::Values(&[DomainValue::Text("Left"), DomainValue::Text("Right")]),
        description: "test",
    };

    #[test]
    fn test_binary_values() {
        assert!(BINARY.check_value("0").is_ok());
        assert!(BINARY.check_value("1").is_ok());
        assert!(BINARY.check_value("1.0").is_ok());
        assert!(matches!(BINARY.check_value("2"), Err(ValueViolation::NotAllowed { .. })));
        assert!(matches!(BINARY.check_value("on"), Err(ValueViolation::WrongType { .. })));
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(FRACTION.check_value("0").is_ok());
        assert!(FRACTION.check_value("1.0").is_ok());
        assert!(FRACTION.check_value(" 0.25 ").is_ok());
        assert_eq!(
            FRACTION.check_value("1.5"),
            Err(ValueViolation::OutOfRange { value: 1.5, min: 0.0, max: 1.0 })
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(FRACTION.check_value("NaN"), Err(ValueViolation::OutOfRange { .. })));
    }

    #[test]
    fn test_categorical_strings() {
        assert!(LABEL.check_value("Left").is_ok());
        assert!(matches!(LABEL.check_value("left"), Err(ValueViolation::NotAllowed { .. })));
    }

    #[test]
    fn test_categorical_owned_cell() {
        // Cells read from a CSV are owned strings, not static text.
        let cell = String::from("Right");
        assert!(LABEL.check_value(&cell).is_ok());
        let cell = format!("{}{}", "To", "p");
        assert_eq!(
            LABEL.check_value(&cell),
            Err(ValueViolation::NotAllowed { raw: "Top".to_string() })
        );
    }

    #[test]
    fn test_empty_cell() {
        assert_eq!(LABEL.check_value(""), Err(ValueViolation::Empty));
        assert_eq!(FRACTION.check_value("   "), Err(ValueViolation::Empty));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(BINARY).unwrap();
        assert_eq!(json["type"], "int");
        assert_eq!(json["role"], "binary");
        assert_eq!(json["tags"][0], "scored");
        assert_eq!(json["domain"]["values"][1], 1);
        assert_eq!(serde_json::to_value(FRACTION).unwrap()["domain"]["range"]["max"], 1.0);
    }
}
