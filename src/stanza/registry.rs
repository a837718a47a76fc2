//! Node variant registry
//!
//! The closed catalog of schema variants. For every discriminant string
//! the registry exposes the variant's attribute list (name, semantic kind,
//! presence policy, default), its family chain and its frozen flag.
//!
//! The descriptors are data produced by the external schema compiler, the
//! same source the element declarations in
//! [schema::elements](crate::stanza::schema::elements) come from; this
//! module only consumes them. The catalog is built once, on first use, and
//! is read-only afterwards, so concurrent lookups need no locking.
//!
//! The [formats](crate::stanza::formats) decoders resolve every incoming
//! `type` field here: a discriminant missing from the catalog is an
//! `UnknownVariant` error, never a best-guess.

use crate::stanza::schema::elements::Heading;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// The semantic kind of an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// A scalar string
    String,
    /// A scalar integer
    Integer,
    /// An ordered sequence of strings
    StringSeq,
    /// An ordered sequence of inline nodes
    InlineSeq,
    /// An ordered sequence of block nodes
    BlockSeq,
    /// An ordered sequence of citation intent tags
    CitationIntentSeq,
    /// An ordered sequence of modify operations
    OperationSeq,
    /// A suggestion status tag
    SuggestionStatus,
    /// A reference to a single comment node, held by value
    CommentRef,
}

/// The presence policy of an attribute
///
/// Consulted uniformly by construction conventions and the codec: how an
/// attribute may be omitted, and what omission means.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    /// Must be supplied at construction and present at decode
    Required,
    /// May be omitted; absence decodes to the default and the attribute is
    /// always present in memory and in encoded form
    OptionalDefaultable(Value),
    /// May be omitted; absence is a distinct state, encoded by omitting
    /// the field entirely (never as null)
    OptionalNoDefault,
    /// May be absent; absence is encoded as an explicit null rather than
    /// an omitted field. Distinct from `OptionalNoDefault` so the schema
    /// can declare either policy; no variant in the current schema
    /// release uses it.
    OptionalNullable,
}

/// Descriptor for one declared attribute
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    /// The schema-declared (wire) attribute name
    pub name: &'static str,
    pub kind: AttrKind,
    pub presence: Presence,
}

impl AttributeSpec {
    fn new(name: &'static str, kind: AttrKind, presence: Presence) -> Self {
        Self {
            name,
            kind,
            presence,
        }
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// Descriptor for one concrete variant
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSpec {
    /// The discriminant string, verbatim as it appears on the wire
    pub name: &'static str,
    /// The family chain, from the variant's immediate family to the root
    pub families: &'static [&'static str],
    /// Whether the schema declares the variant immutable after construction
    pub frozen: bool,
    /// The flat attribute list, accumulated over the family chain
    pub attributes: Vec<AttributeSpec>,
}

impl VariantSpec {
    fn new(
        name: &'static str,
        families: &'static [&'static str],
        frozen: bool,
        attributes: Vec<AttributeSpec>,
    ) -> Self {
        Self {
            name,
            families,
            frozen,
            attributes,
        }
    }

    /// Look up a declared attribute by its wire name
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Whether the variant belongs to the named family, at any level
    pub fn in_family(&self, family: &str) -> bool {
        self.families.iter().any(|f| *f == family)
    }
}

/// Registry of variant descriptors
///
/// Closed: the catalog is fixed at build time and cannot be extended at
/// runtime. Use [registry] to reach the shared instance.
pub struct Registry {
    variants: HashMap<&'static str, VariantSpec>,
}

// Family chains, immediate family first.
const ENTITY: &[&str] = &["Entity"];
const INLINE: &[&str] = &["Inline", "Entity"];
const MARK: &[&str] = &["Mark", "Inline", "Entity"];
const SUGGESTION: &[&str] = &["SuggestionInline", "Inline", "Entity"];
const BLOCK: &[&str] = &["Block", "Entity"];
const CREATIVE_WORK: &[&str] = &["CreativeWork", "Entity"];

// Attribute shorthands shared across descriptors.
fn id() -> AttributeSpec {
    AttributeSpec::new("id", AttrKind::String, Presence::OptionalNoDefault)
}

fn required(name: &'static str, kind: AttrKind) -> AttributeSpec {
    AttributeSpec::new(name, kind, Presence::Required)
}

fn optional(name: &'static str, kind: AttrKind) -> AttributeSpec {
    AttributeSpec::new(name, kind, Presence::OptionalNoDefault)
}

fn seq(name: &'static str, kind: AttrKind) -> AttributeSpec {
    // Required-but-possibly-empty sequences decode absence as empty.
    AttributeSpec::new(
        name,
        kind,
        Presence::OptionalDefaultable(Value::Array(Vec::new())),
    )
}

impl Registry {
    /// Build the catalog from the schema's descriptors
    fn with_schema() -> Self {
        let mut registry = Registry {
            variants: HashMap::new(),
        };

        // Inline
        registry.register(VariantSpec::new(
            "Text",
            INLINE,
            false,
            vec![required("value", AttrKind::String), id()],
        ));
        registry.register(VariantSpec::new(
            "Link",
            INLINE,
            false,
            vec![
                seq("content", AttrKind::InlineSeq),
                required("target", AttrKind::String),
                optional("title", AttrKind::String),
                optional("rel", AttrKind::String),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "CodeInline",
            INLINE,
            false,
            vec![
                required("code", AttrKind::String),
                optional("programmingLanguage", AttrKind::String),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "Citation",
            INLINE,
            false,
            vec![
                required("target", AttrKind::String),
                optional("citationIntent", AttrKind::CitationIntentSeq),
                optional("content", AttrKind::InlineSeq),
                id(),
            ],
        ));

        // Mark
        registry.register(VariantSpec::new(
            "Emphasis",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Strong",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Strikeout",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Subscript",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Superscript",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Underline",
            MARK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));

        // SuggestionInline
        registry.register(VariantSpec::new(
            "InsertInline",
            SUGGESTION,
            false,
            vec![
                seq("content", AttrKind::InlineSeq),
                optional("suggestionStatus", AttrKind::SuggestionStatus),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "DeleteInline",
            SUGGESTION,
            false,
            vec![
                seq("content", AttrKind::InlineSeq),
                optional("suggestionStatus", AttrKind::SuggestionStatus),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "ReplaceInline",
            SUGGESTION,
            false,
            vec![
                seq("content", AttrKind::InlineSeq),
                required("replacement", AttrKind::InlineSeq),
                optional("suggestionStatus", AttrKind::SuggestionStatus),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "ModifyInline",
            SUGGESTION,
            false,
            vec![
                seq("content", AttrKind::InlineSeq),
                required("operations", AttrKind::OperationSeq),
                optional("suggestionStatus", AttrKind::SuggestionStatus),
                id(),
            ],
        ));

        // Block
        registry.register(VariantSpec::new(
            "Paragraph",
            BLOCK,
            false,
            vec![seq("content", AttrKind::InlineSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "Heading",
            BLOCK,
            false,
            vec![
                AttributeSpec::new(
                    "level",
                    AttrKind::Integer,
                    Presence::OptionalDefaultable(Value::from(Heading::DEFAULT_LEVEL)),
                ),
                seq("content", AttrKind::InlineSeq),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "CodeBlock",
            BLOCK,
            false,
            vec![
                required("code", AttrKind::String),
                optional("programmingLanguage", AttrKind::String),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "QuoteBlock",
            BLOCK,
            false,
            vec![seq("content", AttrKind::BlockSeq), id()],
        ));
        registry.register(VariantSpec::new(
            "ThematicBreak",
            BLOCK,
            false,
            vec![id()],
        ));

        // CreativeWork
        registry.register(VariantSpec::new(
            "Article",
            CREATIVE_WORK,
            true,
            vec![
                optional("title", AttrKind::InlineSeq),
                optional("description", AttrKind::String),
                seq("content", AttrKind::BlockSeq),
                optional("keywords", AttrKind::StringSeq),
                id(),
            ],
        ));
        registry.register(VariantSpec::new(
            "Comment",
            CREATIVE_WORK,
            true,
            vec![
                optional("title", AttrKind::InlineSeq),
                optional("description", AttrKind::String),
                seq("content", AttrKind::BlockSeq),
                optional("parentItem", AttrKind::CommentRef),
                optional("commentAspect", AttrKind::String),
                id(),
            ],
        ));

        // Entity-level
        registry.register(VariantSpec::new(
            "ModifyOperation",
            ENTITY,
            false,
            vec![
                required("target", AttrKind::String),
                optional("value", AttrKind::String),
                id(),
            ],
        ));

        registry
    }

    fn register(&mut self, spec: VariantSpec) {
        self.variants.insert(spec.name, spec);
    }

    /// Resolve a discriminant string to its descriptor
    pub fn lookup(&self, tag: &str) -> Option<&VariantSpec> {
        self.variants.get(tag)
    }

    /// Whether the discriminant is in the closed catalog
    pub fn contains(&self, tag: &str) -> bool {
        self.variants.contains_key(tag)
    }

    /// Whether the schema declares the variant frozen
    pub fn is_frozen(&self, tag: &str) -> Option<bool> {
        self.lookup(tag).map(|spec| spec.frozen)
    }

    /// All discriminants in the catalog (sorted)
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.variants.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_schema);

/// The shared, read-only registry instance
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed_and_complete() {
        let expected = [
            "Article",
            "Citation",
            "CodeBlock",
            "CodeInline",
            "Comment",
            "DeleteInline",
            "Emphasis",
            "Heading",
            "InsertInline",
            "Link",
            "ModifyInline",
            "ModifyOperation",
            "Paragraph",
            "QuoteBlock",
            "ReplaceInline",
            "Strikeout",
            "Strong",
            "Subscript",
            "Superscript",
            "Text",
            "ThematicBreak",
            "Underline",
        ];
        assert_eq!(registry().names(), expected);
        assert!(!registry().contains("NotARealTag"));
        assert!(!registry().contains("text"));
    }

    #[test]
    fn test_family_chains_are_layered() {
        let delete = registry().lookup("DeleteInline").unwrap();
        assert_eq!(delete.families, &["SuggestionInline", "Inline", "Entity"]);
        assert!(delete.in_family("Inline"));
        assert!(!delete.in_family("Block"));

        let comment = registry().lookup("Comment").unwrap();
        assert!(comment.in_family("CreativeWork"));
    }

    #[test]
    fn test_inherited_attributes_are_accumulated_flat() {
        // ReplaceInline = its own `replacement` plus everything inherited
        // from SuggestionInline (content, suggestionStatus) and Entity (id).
        let replace = registry().lookup("ReplaceInline").unwrap();
        let names: Vec<_> = replace.attributes.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            ["content", "replacement", "suggestionStatus", "id"]
        );
        assert!(replace.attribute("replacement").unwrap().is_required());
        assert!(!replace.attribute("content").unwrap().is_required());
    }

    #[test]
    fn test_presence_policies() {
        let heading = registry().lookup("Heading").unwrap();
        assert_eq!(
            heading.attribute("level").unwrap().presence,
            Presence::OptionalDefaultable(Value::from(1)),
        );

        let text = registry().lookup("Text").unwrap();
        assert_eq!(text.attribute("value").unwrap().presence, Presence::Required);
        assert_eq!(
            text.attribute("id").unwrap().presence,
            Presence::OptionalNoDefault
        );
    }

    #[test]
    fn test_nullable_is_representable_but_unused() {
        // The descriptor model distinguishes omitted-when-absent from
        // null-when-absent; the current schema release declares every
        // optional attribute as the former.
        for name in registry().names() {
            let spec = registry().lookup(name).unwrap();
            for attr in &spec.attributes {
                assert_ne!(
                    attr.presence,
                    Presence::OptionalNullable,
                    "{name}.{} unexpectedly nullable",
                    attr.name
                );
            }
        }
    }

    #[test]
    fn test_frozen_is_a_per_variant_schema_flag() {
        assert_eq!(registry().is_frozen("Comment"), Some(true));
        assert_eq!(registry().is_frozen("Article"), Some(true));
        assert_eq!(registry().is_frozen("DeleteInline"), Some(false));
        assert_eq!(registry().is_frozen("NotARealTag"), None);
    }
}
