//! Section markers and their location in the file.

use std::fmt;

use super::error::GmshError;

/// A `$Name` ... `$EndName` section of an MSH file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    MeshFormat,
    PhysicalNames,
    Entities,
    Nodes,
    Elements,
}

impl Section {
    /// Section name as it appears after `$`.
    pub fn name(&self) -> &'static str {
        match self {
            Section::MeshFormat => "MeshFormat",
            Section::PhysicalNames => "PhysicalNames",
            Section::Entities => "Entities",
            Section::Nodes => "Nodes",
            Section::Elements => "Elements",
        }
    }

    fn start_marker(&self) -> String {
        format!("${}", self.name())
    }

    fn end_marker(&self) -> String {
        format!("$End{}", self.name())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line indices of a section's start and end markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SectionSpan {
    pub section: Section,
    /// Index of the `$Name` line
    pub start: usize,
    /// Index of the `$EndName` line
    pub end: usize,
}

impl SectionSpan {
    /// Find a section by exact marker match.
    ///
    /// Returns `Ok(None)` when the start marker is absent. A start marker
    /// without a matching end marker is an error.
    pub fn find(lines: &[&str], section: Section) -> Result<Option<Self>, GmshError> {
        let start_marker = section.start_marker();
        let end_marker = section.end_marker();

        let Some(start) = lines.iter().position(|l| *l == start_marker) else {
            return Ok(None);
        };
        let end = lines[start + 1..]
            .iter()
            .position(|l| *l == end_marker)
            .map(|offset| start + 1 + offset)
            .ok_or(GmshError::MissingSection(section))?;

        Ok(Some(Self {
            section,
            start,
            end,
        }))
    }

    /// Find a section that must be present.
    pub fn require(lines: &[&str], section: Section) -> Result<Self, GmshError> {
        Self::find(lines, section)?.ok_or(GmshError::MissingSection(section))
    }
}

/// Spans of the four sections the reader decodes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SectionSpans {
    pub physical_names: SectionSpan,
    pub entities: SectionSpan,
    pub nodes: SectionSpan,
    pub elements: SectionSpan,
}

impl SectionSpans {
    /// Locate all required sections.
    ///
    /// The sections must appear in decoding order without overlapping:
    /// `$PhysicalNames`, `$Entities`, `$Nodes`, `$Elements`.
    pub fn locate(lines: &[&str]) -> Result<Self, GmshError> {
        let spans = Self {
            physical_names: SectionSpan::require(lines, Section::PhysicalNames)?,
            entities: SectionSpan::require(lines, Section::Entities)?,
            nodes: SectionSpan::require(lines, Section::Nodes)?,
            elements: SectionSpan::require(lines, Section::Elements)?,
        };

        let ordered = [spans.physical_names, spans.entities, spans.nodes, spans.elements];
        for pair in ordered.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if next.start < previous.end {
                return Err(GmshError::MalformedRecord {
                    section: next.section,
                    line: next.start,
                    message: format!("${} must follow $End{}", next.section, previous.section),
                });
            }
        }
        Ok(spans)
    }
}
