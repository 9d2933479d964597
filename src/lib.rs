//! # docblock
//!
//! A parser and renderer for PHPDoc-style doc comments.
//!
//! ## What is a doc comment?
//!
//! A `/** ... */` block attached to a declaration, mixing prose paragraphs
//! with `@tag` directives that carry structured metadata: parameter types,
//! authorship, links, visibility. This library parses such comments into a
//! typed tree and renders the tree back as markup in which every node is
//! wrapped in a class-annotated `<span>`, ready for styling.
//!
//! ## Key Features
//!
//! - **Typed Tree**: Comments parse into [`Block`], [`Paragraph`],
//!   [`Directive`] and [`Text`] nodes instead of a tangle of strings
//! - **Tag Families**: Directive arguments parse by family, so `@param`
//!   yields types and a variable while `@author` yields a name and email
//! - **Inline Directives**: `{@link ...}` spans embedded in prose are
//!   extracted and parsed like their block-level counterparts
//! - **URI Validation**: Link, license, and email arguments pass through a
//!   small validator that also normalizes schemeless URIs
//! - **Serde Compatible**: Every node implements `Serialize` for export to
//!   JSON or any other serde format
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe
//!   blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! docblock = "0.1"
//! ```
//!
//! ### Parsing and Rendering
//!
//! ```rust
//! use docblock::{parse, render};
//!
//! let comment = "/**\n * Counts widgets in stock.\n *\n * @param  string $bin which bin to count\n * @return int\n */";
//!
//! let block = parse(comment)?;
//! assert_eq!(block.paragraphs().count(), 1);
//! assert_eq!(block.directives().count(), 2);
//!
//! let markup = render(comment)?;
//! assert!(markup.contains("<span class=\"variable\">$bin</span>"));
//! # Ok::<(), docblock::ParseError>(())
//! ```
//!
//! ### Inspecting Directives
//!
//! ```rust
//! use docblock::parse;
//!
//! let block = parse("/** @param int|null $count how many */")?;
//! let param = block.directives().next().unwrap();
//!
//! assert_eq!(param.tag(), "param");
//! assert_eq!(param.info().types, ["int", "null"]);
//! assert_eq!(param.info().var.as_deref(), Some("count"));
//! # Ok::<(), docblock::ParseError>(())
//! ```
//!
//! ### Exporting to JSON
//!
//! ```rust
//! use docblock::parse;
//!
//! let block = parse("/** @return bool */")?;
//! let json = serde_json::to_string_pretty(&block)?;
//! assert!(json.contains("\"tag\": \"return\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) over the comment, line-oriented with no backtracking
//! - **Rendering**: O(n) over the tree
//! - **URI validation**: single pass over each candidate
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All slicing happens on verified character boundaries
//! - Proper error propagation with `Result` types
//! - No panics in the public API
//!
//! ## Grammar
//!
//! For the full comment dialect this library implements, including the tag
//! family table and the URI grammar, see the [`grammar`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`parse_and_render.rs`** - Your first parse (comment in, markup out)
//! - **`inspect_tags.rs`** - Walking the tree and grouping directives by tag
//! - **`json_export.rs`** - Serializing a parsed comment to JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod grammar;
pub mod node;
pub mod options;
pub mod tag;
pub mod uri;

mod parse;
mod render;

pub use error::{ParseError, Result};
pub use node::{Block, BlockNode, Directive, DirectiveInfo, InlineNode, Paragraph, Text};
pub use options::DocOptions;
pub use render::RenderMode;
pub use tag::{is_primitive, normalize_type, TagFamily, PRIMITIVE_TYPES};

/// Parse a doc comment into a [`Block`] tree.
///
/// The input is expected to be decorated: wrapped in `/** ... */` with
/// optional `*` margins. Use [`parse_with_options`] for bare content.
///
/// # Examples
///
/// ```rust
/// use docblock::parse;
///
/// let block = parse("/** @since 2.1.0 */")?;
/// assert_eq!(block.directives().next().unwrap().tag(), "since");
/// # Ok::<(), docblock::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns an error if a directive section fails to parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Block> {
    Block::parse(input)
}

/// Parse a doc comment with custom [`DocOptions`].
///
/// # Examples
///
/// ```rust
/// use docblock::{parse_with_options, DocOptions};
///
/// let block = parse_with_options("@var string", DocOptions::bare())?;
/// assert_eq!(block.directives().next().unwrap().tag(), "var");
/// # Ok::<(), docblock::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns an error if a directive section fails to parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: DocOptions) -> Result<Block> {
    Block::parse_with_options(input, options)
}

/// Parse a doc comment and render it as annotated markup in one step.
///
/// # Examples
///
/// ```rust
/// use docblock::render;
///
/// let markup = render("/** @ignore */")?;
/// assert!(markup.contains("<span class=\"directive-name\">@ignore</span>"));
/// # Ok::<(), docblock::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns an error if parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render(input: &str) -> Result<String> {
    Ok(Block::parse(input)?.render())
}

/// Parse a doc comment with custom [`DocOptions`] and render it as
/// annotated markup in one step.
///
/// # Examples
///
/// ```rust
/// use docblock::{render_with_options, DocOptions};
///
/// let markup = render_with_options("@ignore", DocOptions::bare())?;
/// assert!(!markup.contains("/**"));
/// # Ok::<(), docblock::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns an error if parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_with_options(input: &str, options: DocOptions) -> Result<String> {
    Ok(Block::parse_with_options(input, options)?.render())
}
