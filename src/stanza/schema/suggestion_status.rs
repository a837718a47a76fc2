//! Suggestion status tags
//!
//! The review state of a suggested edit. Like
//! [CitationIntent](super::citation_intent::CitationIntent) this is a flat,
//! closed tag set: values encode as bare tag strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The status of a suggested change to document content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionStatus {
    Proposed,
    Accepted,
    Rejected,
}

impl SuggestionStatus {
    /// Every tag in the closed set, in schema order
    pub const ALL: &'static [SuggestionStatus] = &[
        SuggestionStatus::Proposed,
        SuggestionStatus::Accepted,
        SuggestionStatus::Rejected,
    ];

    /// The tag string this value encodes as
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionStatus::Proposed => "Proposed",
            SuggestionStatus::Accepted => "Accepted",
            SuggestionStatus::Rejected => "Rejected",
        }
    }

    /// Resolve a tag string against the closed set
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Proposed" => Some(SuggestionStatus::Proposed),
            "Accepted" => Some(SuggestionStatus::Accepted),
            "Rejected" => Some(SuggestionStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_resolves_back_to_itself() {
        for status in SuggestionStatus::ALL {
            assert_eq!(SuggestionStatus::from_tag(status.as_str()), Some(*status));
        }
    }

    #[test]
    fn test_unknown_tags_do_not_resolve() {
        assert_eq!(SuggestionStatus::from_tag("Pending"), None);
        assert_eq!(SuggestionStatus::from_tag("proposed"), None);
    }
}
