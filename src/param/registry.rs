//! Parameter registry assembly and lookup

use crate::error::ConfigError;
use crate::param::base::{BASE, BASE_COUNT};
use crate::param::pose::{POSE, POSE_COUNT};
use crate::param::scored::{SCORED, SCORED_COUNT};
use crate::param::shared::{SHARED, SHARED_COUNT};
use crate::param::sleap::{SLEAP, SLEAP_COUNT};
use crate::param::schema::{ParamSpec, Tag};
use crate::param::tracked::{TRACKED, TRACKED_COUNT};
use serde::Serialize;
use std::collections::HashMap;

/// Total number of columns across all sections
pub const PARAM_COUNT: usize =
    BASE_COUNT + SHARED_COUNT + TRACKED_COUNT + SCORED_COUNT + SLEAP_COUNT + POSE_COUNT;

const _: () = assert!(PARAM_COUNT == 60);

/// A static sub-table of column specs
pub type ParamTable = &'static [(&'static str, ParamSpec)];

/// Provenance group a column is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamSection {
    Base,
    Shared,
    Tracked,
    Scored,
    Sleap,
    Pose,
}

impl ParamSection {
    /// Assembly order
    pub const ALL: [ParamSection; 6] = [
        ParamSection::Base,
        ParamSection::Shared,
        ParamSection::Tracked,
        ParamSection::Scored,
        ParamSection::Sleap,
        ParamSection::Pose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamSection::Base => "BASE",
            ParamSection::Shared => "SHARED",
            ParamSection::Tracked => "TRACKED",
            ParamSection::Scored => "SCORED",
            ParamSection::Sleap => "SLEAP",
            ParamSection::Pose => "POSE",
        }
    }

    pub fn table(&self) -> ParamTable {
        match self {
            ParamSection::Base => BASE,
            ParamSection::Shared => SHARED,
            ParamSection::Tracked => TRACKED,
            ParamSection::Scored => SCORED,
            ParamSection::Sleap => SLEAP,
            ParamSection::Pose => POSE,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: &'static str,
    section: ParamSection,
    spec: &'static ParamSpec,
}

/// Read-only mapping from CSV column name to its schema record.
///
/// Iteration follows declaration order, section by section.
#[derive(Debug, Clone)]
pub struct ParamRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

/// Column names of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: ParamSection,
    pub count: usize,
    pub names: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub total: usize,
    pub sections: Vec<SectionSummary>,
}

impl ParamRegistry {
    /// Merge the six built-in sections and check the result.
    pub fn assemble() -> Result<Self, ConfigError> {
        let tables: Vec<(ParamSection, ParamTable)> = ParamSection::ALL
            .iter()
            .map(|section| (*section, section.table()))
            .collect();
        Self::assemble_from(&tables, PARAM_COUNT)
    }

    /// Merge arbitrary tables; fails on a repeated name or a total other than `expected`.
    pub fn assemble_from(
        tables: &[(ParamSection, ParamTable)],
        expected: usize,
    ) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(expected);
        let mut index = HashMap::with_capacity(expected);

        for &(section, table) in tables {
            for (name, spec) in table {
                if index.insert(*name, entries.len()).is_some() {
                    return Err(ConfigError::DuplicateParam(name.to_string()));
                }
                entries.push(Entry {
                    name: *name,
                    section,
                    spec,
                });
            }
        }

        if entries.len() != expected {
            return Err(ConfigError::ParamCount {
                expected,
                actual: entries.len(),
            });
        }

        tracing::debug!(params = entries.len(), "parameter registry assembled");
        Ok(Self { entries, index })
    }

    pub fn get(&self, name: &str) -> Option<&'static ParamSpec> {
        self.index.get(name).map(|i| self.entries[*i].spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Section a column was declared in
    pub fn section_of(&self, name: &str) -> Option<ParamSection> {
        self.index.get(name).map(|i| self.entries[*i].section)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static ParamSpec)> + '_ {
        self.entries.iter().map(|e| (e.name, e.spec))
    }

    /// Names carrying `tag`, in declaration order
    pub fn names_tagged(&self, tag: Tag) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, spec)| spec.has_tag(tag))
            .map(|(name, _)| name)
            .collect()
    }

    /// Headers with no registry entry, in input order
    pub fn unknown_columns<'a, I>(&self, headers: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        headers
            .into_iter()
            .filter(|header| !self.contains(header))
            .collect()
    }

    pub fn summary(&self) -> RegistrySummary {
        let mut sections: Vec<SectionSummary> = Vec::new();
        for entry in &self.entries {
            match sections.last_mut() {
                Some(last) if last.section == entry.section => {
                    last.count += 1;
                    last.names.push(entry.name);
                }
                _ => sections.push(SectionSummary {
                    section: entry.section,
                    count: 1,
                    names: vec![entry.name],
                }),
            }
        }

        RegistrySummary {
            total: self.entries.len(),
            sections,
        }
    }
}
