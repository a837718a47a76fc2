//! Node union
//!
//! `Node` is the union of everything the codec can decode at the top
//! level: any creative work, any block, any inline, or a standalone
//! modify operation. Decoders route an incoming discriminant to the right
//! arm through the family chain recorded in the
//! [registry](crate::stanza::registry).

use super::super::traits::SchemaNode;
use super::block::Block;
use super::creative_work::CreativeWork;
use super::inline::Inline;
use super::modify_operation::ModifyOperation;
use std::fmt;

/// Any node of the schema
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    CreativeWork(CreativeWork),
    Block(Block),
    Inline(Inline),
    ModifyOperation(ModifyOperation),
}

impl SchemaNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::CreativeWork(w) => w.node_type(),
            Node::Block(b) => b.node_type(),
            Node::Inline(i) => i.node_type(),
            Node::ModifyOperation(op) => op.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            Node::CreativeWork(w) => w.node_id(),
            Node::Block(b) => b.node_id(),
            Node::Inline(i) => i.node_id(),
            Node::ModifyOperation(op) => op.node_id(),
        }
    }
}

impl Node {
    pub fn is_creative_work(&self) -> bool {
        matches!(self, Node::CreativeWork(_))
    }
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block(_))
    }
    pub fn is_inline(&self) -> bool {
        matches!(self, Node::Inline(_))
    }
    pub fn is_modify_operation(&self) -> bool {
        matches!(self, Node::ModifyOperation(_))
    }

    pub fn as_creative_work(&self) -> Option<&CreativeWork> {
        if let Node::CreativeWork(w) = self {
            Some(w)
        } else {
            None
        }
    }
    pub fn as_block(&self) -> Option<&Block> {
        if let Node::Block(b) = self {
            Some(b)
        } else {
            None
        }
    }
    pub fn as_inline(&self) -> Option<&Inline> {
        if let Node::Inline(i) = self {
            Some(i)
        } else {
            None
        }
    }
    pub fn as_modify_operation(&self) -> Option<&ModifyOperation> {
        if let Node::ModifyOperation(op) = self {
            Some(op)
        } else {
            None
        }
    }
}

impl From<CreativeWork> for Node {
    fn from(work: CreativeWork) -> Self {
        Node::CreativeWork(work)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Inline> for Node {
    fn from(inline: Inline) -> Self {
        Node::Inline(inline)
    }
}

impl From<ModifyOperation> for Node {
    fn from(op: ModifyOperation) -> Self {
        Node::ModifyOperation(op)
    }
}

impl From<super::article::Article> for Node {
    fn from(article: super::article::Article) -> Self {
        Node::CreativeWork(CreativeWork::Article(article))
    }
}

impl From<super::comment::Comment> for Node {
    fn from(comment: super::comment::Comment) -> Self {
        Node::CreativeWork(CreativeWork::Comment(comment))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::CreativeWork(w) => write!(f, "{w}"),
            Node::Block(b) => write!(f, "{b}"),
            Node::Inline(i) => write!(f, "{i}"),
            Node::ModifyOperation(op) => write!(f, "ModifyOperation('{}')", op.target),
        }
    }
}
