//! Modify operation element
//!
//! One step of a [ModifyInline](super::suggestion::ModifyInline)
//! suggestion: which part of the content is addressed and, optionally,
//! the value it should take.

use super::super::traits::SchemaNode;

/// An operation to apply as part of a modify suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct ModifyOperation {
    /// The address of the part to modify
    pub target: String,
    /// The new value for the target, absent for removals
    pub value: Option<String>,
    pub id: Option<String>,
}

impl ModifyOperation {
    pub fn new(target: String) -> Self {
        Self {
            target,
            value: None,
            id: None,
        }
    }

    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for ModifyOperation {
    fn node_type(&self) -> &'static str {
        "ModifyOperation"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
