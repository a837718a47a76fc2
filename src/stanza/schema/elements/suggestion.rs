//! Suggestion elements
//!
//! Suggested edits to inline content: insert, delete, replace, modify.
//! Every member wraps the `content` the suggestion applies to and an
//! optional review `suggestion_status`, both inherited from the
//! `SuggestionInline` family; `ReplaceInline` and `ModifyInline` add the
//! payload describing the proposed change.
//!
//! A suggestion never applies itself. It records intent so an editing
//! application can present the change and resolve it to plain content.

use super::super::suggestion_status::SuggestionStatus;
use super::super::traits::SchemaNode;
use super::inline::Inline;
use super::modify_operation::ModifyOperation;

/// A suggestion to insert some inline content
#[derive(Debug, Clone, PartialEq)]
pub struct InsertInline {
    /// The content that is suggested to be inserted
    pub content: Vec<Inline>,
    /// The review status of the suggestion
    pub suggestion_status: Option<SuggestionStatus>,
    pub id: Option<String>,
}

impl InsertInline {
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content,
            suggestion_status: None,
            id: None,
        }
    }

    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.suggestion_status = Some(status);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for InsertInline {
    fn node_type(&self) -> &'static str {
        "InsertInline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A suggestion to delete some inline content
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteInline {
    /// The content that is suggested to be deleted
    pub content: Vec<Inline>,
    /// The review status of the suggestion
    pub suggestion_status: Option<SuggestionStatus>,
    pub id: Option<String>,
}

impl DeleteInline {
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content,
            suggestion_status: None,
            id: None,
        }
    }

    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.suggestion_status = Some(status);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for DeleteInline {
    fn node_type(&self) -> &'static str {
        "DeleteInline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A suggestion to replace some inline content with new inline content
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceInline {
    /// The content that is suggested to be replaced
    pub content: Vec<Inline>,
    /// The new replacement inline content
    pub replacement: Vec<Inline>,
    /// The review status of the suggestion
    pub suggestion_status: Option<SuggestionStatus>,
    pub id: Option<String>,
}

impl ReplaceInline {
    pub fn new(content: Vec<Inline>, replacement: Vec<Inline>) -> Self {
        Self {
            content,
            replacement,
            suggestion_status: None,
            id: None,
        }
    }

    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.suggestion_status = Some(status);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for ReplaceInline {
    fn node_type(&self) -> &'static str {
        "ReplaceInline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A suggestion to modify some inline content in place
#[derive(Debug, Clone, PartialEq)]
pub struct ModifyInline {
    /// The content that is suggested to be modified
    pub content: Vec<Inline>,
    /// The operations to be applied to the content
    pub operations: Vec<ModifyOperation>,
    /// The review status of the suggestion
    pub suggestion_status: Option<SuggestionStatus>,
    pub id: Option<String>,
}

impl ModifyInline {
    pub fn new(content: Vec<Inline>, operations: Vec<ModifyOperation>) -> Self {
        Self {
            content,
            operations,
            suggestion_status: None,
            id: None,
        }
    }

    pub fn with_status(mut self, status: SuggestionStatus) -> Self {
        self.suggestion_status = Some(status);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for ModifyInline {
    fn node_type(&self) -> &'static str {
        "ModifyInline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Any member of the suggestion family
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionInline {
    Insert(InsertInline),
    Delete(DeleteInline),
    Replace(ReplaceInline),
    Modify(ModifyInline),
}

impl SuggestionInline {
    /// The content the suggestion applies to, shared by every member
    pub fn content(&self) -> &[Inline] {
        match self {
            SuggestionInline::Insert(s) => &s.content,
            SuggestionInline::Delete(s) => &s.content,
            SuggestionInline::Replace(s) => &s.content,
            SuggestionInline::Modify(s) => &s.content,
        }
    }

    /// The review status, shared by every member
    pub fn suggestion_status(&self) -> Option<SuggestionStatus> {
        match self {
            SuggestionInline::Insert(s) => s.suggestion_status,
            SuggestionInline::Delete(s) => s.suggestion_status,
            SuggestionInline::Replace(s) => s.suggestion_status,
            SuggestionInline::Modify(s) => s.suggestion_status,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(
            self.suggestion_status(),
            Some(SuggestionStatus::Accepted) | Some(SuggestionStatus::Rejected)
        )
    }
}

impl SchemaNode for SuggestionInline {
    fn node_type(&self) -> &'static str {
        match self {
            SuggestionInline::Insert(s) => s.node_type(),
            SuggestionInline::Delete(s) => s.node_type(),
            SuggestionInline::Replace(s) => s.node_type(),
            SuggestionInline::Modify(s) => s.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            SuggestionInline::Insert(s) => s.node_id(),
            SuggestionInline::Delete(s) => s.node_id(),
            SuggestionInline::Replace(s) => s.node_id(),
            SuggestionInline::Modify(s) => s.node_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stanza::schema::elements::Text;

    #[test]
    fn test_family_accessors_cover_every_member() {
        let content = vec![Inline::Text(Text::new("old".into()))];
        let replacement = vec![Inline::Text(Text::new("new".into()))];

        let replace = SuggestionInline::Replace(
            ReplaceInline::new(content.clone(), replacement).with_status(SuggestionStatus::Proposed),
        );
        assert_eq!(replace.content(), &content[..]);
        assert_eq!(replace.suggestion_status(), Some(SuggestionStatus::Proposed));
        assert!(!replace.is_resolved());

        let delete = SuggestionInline::Delete(
            DeleteInline::new(content).with_status(SuggestionStatus::Accepted),
        );
        assert!(delete.is_resolved());
        assert_eq!(delete.node_type(), "DeleteInline");
    }
}
