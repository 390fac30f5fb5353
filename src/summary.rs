//! Counts and tooltip text for a parsed listing.

use crate::sections::{PLACEHOLDER, SectionKind, Sections};

/// Per-section entry counts plus the rendered tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub namespace_count: usize,
    pub agent_count: usize,
    pub tooltip: String,
}

impl Summary {
    /// Compact text shown in the bar. The two leading spaces are the slot
    /// the host fills with an icon glyph.
    pub fn text(&self) -> String {
        format!("  {}  {}", self.namespace_count, self.agent_count)
    }
}

fn title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Namespaces => "NAMESPACES",
        SectionKind::Agents => "AGENTS",
    }
}

fn push_section(output: &mut String, kind: SectionKind, entries: &[String]) {
    output.push(' ');
    output.push_str(title(kind));
    output.push_str(":\n");
    if entries.is_empty() {
        output.push_str(PLACEHOLDER);
        output.push('\n');
    } else {
        for entry in entries {
            output.push_str(entry);
            output.push('\n');
        }
    }
}

pub fn build(sections: &Sections) -> Summary {
    let mut tooltip = String::new();
    push_section(
        &mut tooltip,
        SectionKind::Namespaces,
        sections.entries(SectionKind::Namespaces),
    );
    tooltip.push('\n');
    push_section(
        &mut tooltip,
        SectionKind::Agents,
        sections.entries(SectionKind::Agents),
    );

    Summary {
        namespace_count: sections.namespaces.len(),
        agent_count: sections.agents.len(),
        tooltip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::extract;

    #[test]
    fn empty_sections_render_placeholders() {
        let summary = build(&Sections::default());
        assert_eq!(summary.namespace_count, 0);
        assert_eq!(summary.agent_count, 0);
        assert_eq!(summary.text(), "  0  0");
        assert_eq!(
            summary.tooltip,
            " NAMESPACES:\n(none)\n\n AGENTS:\n(none)\n"
        );
    }

    #[test]
    fn entries_render_in_listing_order() {
        let sections = Sections {
            namespaces: vec!["build".to_string(), "review".to_string()],
            agents: vec!["agent0".to_string()],
        };
        let summary = build(&sections);
        assert_eq!(summary.text(), "  2  1");
        assert_eq!(
            summary.tooltip,
            " NAMESPACES:\nbuild\nreview\n\n AGENTS:\nagent0\n"
        );
    }

    #[test]
    fn missing_agents_section_renders_placeholder() {
        let summary = build(&extract("NAMESPACES:\nns1\nns2\n"));
        assert_eq!(summary.namespace_count, 2);
        assert_eq!(summary.agent_count, 0);
        assert_eq!(summary.tooltip, " NAMESPACES:\nns1\nns2\n\n AGENTS:\n(none)\n");
    }

    #[test]
    fn placeholder_only_section_counts_zero() {
        let summary = build(&extract("NAMESPACES:\n(none)\nAGENTS:\na1\n"));
        assert_eq!(summary.namespace_count, 0);
        assert_eq!(summary.agent_count, 1);
        assert_eq!(summary.tooltip, " NAMESPACES:\n(none)\n\n AGENTS:\na1\n");
    }

    #[test]
    fn large_counts_have_no_separators() {
        let sections = Sections {
            namespaces: (0..1234).map(|i| format!("ns{i}")).collect(),
            agents: Vec::new(),
        };
        assert_eq!(build(&sections).text(), "  1234  0");
    }
}
