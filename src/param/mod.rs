//! CSV parameter registry
//!
//! Six static sub-tables, one per provenance group, merged once into a
//! [`ParamRegistry`]. The registry describes columns; it never reads CSV files.

pub mod base;
pub mod pose;
pub mod registry;
pub mod schema;
pub mod scored;
pub mod shared;
pub mod sleap;
pub mod tracked;

pub use registry::{
    ParamRegistry, ParamSection, ParamTable, RegistrySummary, SectionSummary, PARAM_COUNT,
};
pub use schema::{Domain, DomainValue, ParamRole, ParamSpec, ParamType, Tag, ValueViolation};
