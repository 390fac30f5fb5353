//! Status-bar summary of `jarvisctl` namespaces and agents.
//!
//! listing → [`sections::extract`] → [`summary::build`] → [`emit::StatusRecord`]

pub mod cli;
pub mod config;
pub mod emit;
pub mod sections;
pub mod source;
pub mod summary;

use emit::StatusRecord;

/// Turn one raw listing into the record the status bar displays.
pub fn summarize(listing: &str) -> StatusRecord {
    summary::build(&sections::extract(listing)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_empty_listing() {
        let record = summarize("");
        assert_eq!(record.text, "  0  0");
        assert_eq!(record.tooltip, " NAMESPACES:\n(none)\n\n AGENTS:\n(none)\n");
    }

    #[test]
    fn summarizes_jarvisctl_empty_report() {
        assert_eq!(summarize("NAMESPACES:\n(none)\nAGENTS:\n(none)\n"), summarize(""));
    }

    #[test]
    fn summarizes_agents_before_namespaces() {
        let record = summarize("AGENTS:\na1\na2\nNAMESPACES:\nns1\n");
        assert_eq!(record.text, "  1  2");
        assert_eq!(record.tooltip, " NAMESPACES:\nns1\n\n AGENTS:\na1\na2\n");
    }
}
