//! Document tree for parsed doc comments.
//!
//! This module provides the types that a parsed comment decomposes into. A
//! [`Block`] is the root of the tree and owns an ordered list of
//! [`BlockNode`]s. Each block node is either a [`Paragraph`] of prose or a
//! [`Directive`] introduced by an `@tag` line. Paragraphs in turn hold
//! [`InlineNode`]s: plain [`Text`] runs intermixed with `{@tag ...}`
//! directives embedded in the prose.
//!
//! ## Core Types
//!
//! - [`Block`]: A whole doc comment (paragraphs and block-level directives)
//! - [`BlockNode`]: One block-level child (paragraph or directive)
//! - [`Paragraph`]: A run of prose, possibly with inline directives
//! - [`InlineNode`]: One paragraph child (text or inline directive)
//! - [`Text`]: A plain text run, newlines preserved
//! - [`Directive`]: A parsed `@tag` with its structured fields
//! - [`DirectiveInfo`]: The field bag a directive's arguments parse into
//!
//! ## Walking the Tree
//!
//! ```rust
//! use docblock::Block;
//!
//! let block = Block::parse("/** Adds numbers.\n * @param int $left\n * @return int */")?;
//!
//! assert_eq!(block.len(), 3);
//! assert_eq!(block.directives().count(), 2);
//! assert_eq!(block.paragraphs().count(), 1);
//! # Ok::<(), docblock::ParseError>(())
//! ```
//!
//! ## Looking Up Directives by Tag
//!
//! ```rust
//! use docblock::Block;
//!
//! let block = Block::parse("/** @param int $a\n * @param int $b */")?;
//! let by_tag = block.by_tag();
//!
//! assert_eq!(by_tag["param"].len(), 2);
//! assert_eq!(by_tag["param"][0].info().var.as_deref(), Some("a"));
//! # Ok::<(), docblock::ParseError>(())
//! ```
//!
//! ## Serialization
//!
//! Every node type implements [`serde::Serialize`], so a parsed tree can be
//! exported to any serde format. Node enums tag their variants in
//! `snake_case`, and empty directive fields are omitted:
//!
//! ```rust
//! use docblock::Block;
//!
//! let block = Block::parse("/** @return bool true on success */")?;
//! let json = serde_json::to_string(&block)?;
//!
//! assert!(json.contains("\"directive\""));
//! assert!(json.contains("\"types\":[\"bool\"]"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::options::DocOptions;
use crate::tag::TagFamily;
use indexmap::IndexMap;
use serde::Serialize;

/// A parsed doc comment.
///
/// Holds the block-level nodes in source order together with the
/// [`DocOptions`] the comment was parsed with, so that rendering can mirror
/// the parse (a comment parsed without decoration renders without it).
///
/// Construct one with [`Block::parse`] or [`Block::parse_with_options`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub(crate) nodes: Vec<BlockNode>,
    #[serde(skip)]
    pub(crate) options: DocOptions,
}

impl Block {
    /// Returns the block-level nodes in source order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[BlockNode] {
        &self.nodes
    }

    /// Returns the options this block was parsed with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &DocOptions {
        &self.options
    }

    /// Returns the number of block-level nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the comment parsed to no nodes at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the block-level directives, skipping paragraphs.
    ///
    /// Inline directives inside paragraphs are not visited; walk
    /// [`Paragraph::nodes`] for those.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.nodes.iter().filter_map(BlockNode::as_directive)
    }

    /// Iterates over the paragraphs, skipping directives.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.nodes.iter().filter_map(BlockNode::as_paragraph)
    }

    /// Groups the block-level directives by tag name.
    ///
    /// Keys appear in first-occurrence order, and each group keeps source
    /// order, so `by_tag()["param"]` lists the parameters as written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::Block;
    ///
    /// let block = Block::parse("/** @param int $a\n * @return int\n * @param int $b */")?;
    /// let by_tag = block.by_tag();
    ///
    /// assert_eq!(by_tag.keys().copied().collect::<Vec<_>>(), ["param", "return"]);
    /// assert_eq!(by_tag["param"].len(), 2);
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    #[must_use]
    pub fn by_tag(&self) -> IndexMap<&str, Vec<&Directive>> {
        let mut groups: IndexMap<&str, Vec<&Directive>> = IndexMap::new();
        for directive in self.directives() {
            groups.entry(directive.tag()).or_default().push(directive);
        }
        groups
    }
}

/// One block-level child of a [`Block`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockNode {
    /// A run of prose, possibly containing inline directives.
    Paragraph(Paragraph),
    /// A directive that started its own line.
    Directive(Directive),
}

impl BlockNode {
    /// Returns `true` if this node is a paragraph.
    #[inline]
    #[must_use]
    pub const fn is_paragraph(&self) -> bool {
        matches!(self, BlockNode::Paragraph(_))
    }

    /// Returns `true` if this node is a directive.
    #[inline]
    #[must_use]
    pub const fn is_directive(&self) -> bool {
        matches!(self, BlockNode::Directive(_))
    }

    /// Returns the paragraph if this node is one.
    #[inline]
    #[must_use]
    pub const fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            BlockNode::Paragraph(paragraph) => Some(paragraph),
            BlockNode::Directive(_) => None,
        }
    }

    /// Returns the directive if this node is one.
    #[inline]
    #[must_use]
    pub const fn as_directive(&self) -> Option<&Directive> {
        match self {
            BlockNode::Directive(directive) => Some(directive),
            BlockNode::Paragraph(_) => None,
        }
    }
}

impl From<Paragraph> for BlockNode {
    fn from(paragraph: Paragraph) -> Self {
        BlockNode::Paragraph(paragraph)
    }
}

impl From<Directive> for BlockNode {
    fn from(directive: Directive) -> Self {
        BlockNode::Directive(directive)
    }
}

/// A run of prose inside a [`Block`].
///
/// Serializes transparently as its node list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Paragraph {
    pub(crate) nodes: Vec<InlineNode>,
}

impl Paragraph {
    /// Returns the inline nodes in source order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[InlineNode] {
        &self.nodes
    }

    /// Returns the number of inline nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the paragraph holds no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the inline directives, skipping text runs.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.nodes.iter().filter_map(InlineNode::as_directive)
    }
}

/// One child of a [`Paragraph`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineNode {
    /// A plain text run.
    Text(Text),
    /// A `{@tag ...}` directive embedded in prose.
    Directive(Directive),
}

impl InlineNode {
    /// Returns `true` if this node is a text run.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, InlineNode::Text(_))
    }

    /// Returns `true` if this node is an inline directive.
    #[inline]
    #[must_use]
    pub const fn is_directive(&self) -> bool {
        matches!(self, InlineNode::Directive(_))
    }

    /// Returns the text run if this node is one.
    #[inline]
    #[must_use]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            InlineNode::Text(text) => Some(text),
            InlineNode::Directive(_) => None,
        }
    }

    /// Returns the directive if this node is one.
    #[inline]
    #[must_use]
    pub const fn as_directive(&self) -> Option<&Directive> {
        match self {
            InlineNode::Directive(directive) => Some(directive),
            InlineNode::Text(_) => None,
        }
    }
}

impl From<Text> for InlineNode {
    fn from(text: Text) -> Self {
        InlineNode::Text(text)
    }
}

impl From<Directive> for InlineNode {
    fn from(directive: Directive) -> Self {
        InlineNode::Directive(directive)
    }
}

/// A plain text run.
///
/// Interior newlines are preserved; rendering wraps each line in its own
/// span. Serializes transparently as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Text(pub(crate) String);

impl Text {
    /// Creates a text run from anything string-like.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Text(content.into())
    }

    /// Returns the text content.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the node and returns the owned content.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the content is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text(content)
    }
}

/// A parsed `@tag` directive.
///
/// The tag name is stored lowercased; the arguments after the tag parse into
/// a [`DirectiveInfo`] according to the tag's [`TagFamily`]. Serializes flat,
/// with the tag name alongside the populated fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive {
    pub(crate) tag: String,
    #[serde(flatten)]
    pub(crate) info: DirectiveInfo,
}

impl Directive {
    /// Returns the lowercased tag name, without the `@`.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the parsed argument fields.
    #[inline]
    #[must_use]
    pub fn info(&self) -> &DirectiveInfo {
        &self.info
    }

    /// Returns the family the tag belongs to.
    ///
    /// ```rust
    /// use docblock::{Directive, TagFamily};
    ///
    /// let directive = Directive::parse("@param int $count")?;
    /// assert_eq!(directive.family(), TagFamily::Variable);
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    #[must_use]
    pub fn family(&self) -> TagFamily {
        TagFamily::of(&self.tag)
    }
}

/// The structured fields a directive's arguments parse into.
///
/// Which fields a given tag populates depends on its [`TagFamily`]; the rest
/// stay at their defaults and are skipped during serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DirectiveInfo {
    /// Visibility keyword, for `@access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Author name, for `@author`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Validated author email, for `@author`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Validated and normalized URIs, for `@link` and `@license`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
    /// Declared types, pipe-separated in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// Variable name without the `$` sigil, dimensions included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub var: Option<String>,
    /// Free-form trailing text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
}

impl DirectiveInfo {
    /// Returns `true` if no field was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.uris.is_empty()
            && self.types.is_empty()
            && self.var.is_none()
            && self.text.is_none()
    }
}
