//! Section extraction for `jarvisctl list` output.
//!
//! ## State machine
//!
//! ```text
//! NONE | NAMESPACES | AGENTS  → "NAMESPACES:" → NAMESPACES
//! NONE | NAMESPACES | AGENTS  → "AGENTS:"     → AGENTS
//! any state                   → other line    → same state (entry if inside a section)
//! ```
//!
//! Lines before the first header are dropped. Blank lines and the `(none)`
//! placeholder never become entries.

/// Header line that opens the namespaces section.
pub const NAMESPACES_HEADER: &str = "NAMESPACES:";
/// Header line that opens the agents section.
pub const AGENTS_HEADER: &str = "AGENTS:";
/// Line meaning "this section has no entries", both upstream and in the tooltip.
pub const PLACEHOLDER: &str = "(none)";

/// The two sections of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Namespaces,
    Agents,
}

/// Which section the scanner is currently inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionState {
    #[default]
    None,
    In(SectionKind),
}

impl SectionState {
    /// Advance over one line.
    ///
    /// Returns the next state and, when the line is an entry of the active
    /// section, the section it belongs to.
    pub fn next(self, line: &str) -> (SectionState, Option<SectionKind>) {
        match line {
            NAMESPACES_HEADER => (SectionState::In(SectionKind::Namespaces), None),
            AGENTS_HEADER => (SectionState::In(SectionKind::Agents), None),
            _ => match self {
                SectionState::In(kind) if is_entry(line) => (self, Some(kind)),
                _ => (self, None),
            },
        }
    }
}

fn is_entry(line: &str) -> bool {
    !line.trim().is_empty() && line != PLACEHOLDER
}

/// Entry lines of both sections, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub namespaces: Vec<String>,
    pub agents: Vec<String>,
}

impl Sections {
    pub fn entries(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Namespaces => &self.namespaces,
            SectionKind::Agents => &self.agents,
        }
    }

    fn push(&mut self, kind: SectionKind, line: &str) {
        match kind {
            SectionKind::Namespaces => self.namespaces.push(line.to_string()),
            SectionKind::Agents => self.agents.push(line.to_string()),
        }
    }
}

/// Split a raw listing into its namespace and agent entries.
pub fn extract(listing: &str) -> Sections {
    let mut sections = Sections::default();
    let mut state = SectionState::default();

    for line in listing.lines() {
        let (next, entry) = state.next(line);
        if let Some(kind) = entry {
            sections.push(kind, line);
        }
        state = next;
    }

    sections
}
