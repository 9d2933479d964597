//! Annotated markup rendering.
//!
//! This module implements the render half of the crate: it turns a [`Block`]
//! tree back into a marked-up string in which every node is wrapped in a
//! class-annotated `<span>`.
//!
//! ## Overview
//!
//! - Blocks re-emit the comment decoration (`/**`, per-line ` * ` margins,
//!   `*/`) unless they were parsed with decoration disabled
//! - Paragraph neighbors are separated by a blank line, directive neighbors
//!   by a single newline
//! - Text renders line by line, each line in its own span
//! - Directives render their fields in parse order, skipping absent ones
//!
//! ## Usage
//!
//! ```rust
//! use docblock::Directive;
//! use docblock::RenderMode;
//!
//! let directive = Directive::parse("@return int")?;
//! assert_eq!(
//!     directive.render(RenderMode::Block),
//!     "<span class=\"doc-comment-directive doc-comment-return\">\
//!      <span class=\"directive-name\">@return</span> \
//!      <span class=\"types\"><span class=\"type\">int</span></span></span>"
//! );
//! # Ok::<(), docblock::ParseError>(())
//! ```
//!
//! The markup never escapes node content; the only entities emitted are the
//! `&lt;` and `&gt;` around author emails.

use crate::node::{Block, BlockNode, Directive, DirectiveInfo, InlineNode, Paragraph, Text};
use crate::tag::TagFamily;
use std::fmt;

/// Whether a directive renders as a block line or an inline `{...}` span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// A directive that owns its own line.
    #[default]
    Block,
    /// A directive embedded in paragraph prose; braces are re-emitted and
    /// the wrapper span carries an extra `inline` class.
    Inline,
}

impl Block {
    /// Renders the whole comment as annotated markup.
    ///
    /// The comment decoration is re-emitted around the content when the
    /// block was parsed with decoration enabled, so rendering mirrors the
    /// parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::Block;
    ///
    /// let markup = Block::parse("/** @ignore */")?.render();
    /// assert!(markup.starts_with("<span class=\"doc-comment-block\">/**"));
    /// assert!(markup.ends_with("*/</span>"));
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut body = String::new();
        let mut previous: Option<&BlockNode> = None;
        for node in self.nodes() {
            if let Some(previous) = previous {
                body.push('\n');
                if previous.is_paragraph() || node.is_paragraph() {
                    body.push('\n');
                }
            }
            body.push_str(&node.render());
            previous = Some(node);
        }
        if self.options().decorated {
            format!(
                "<span class=\"doc-comment-block\">/**\n * {}\n */</span>",
                body.replace('\n', "\n * ")
            )
        } else {
            format!("<span class=\"doc-comment-block\">{body}</span>")
        }
    }
}

impl BlockNode {
    /// Renders this node as annotated markup.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            BlockNode::Paragraph(paragraph) => paragraph.render(),
            BlockNode::Directive(directive) => directive.render(RenderMode::Block),
        }
    }
}

impl Paragraph {
    /// Renders the paragraph and its inline nodes as annotated markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<span class=\"doc-comment-paragraph\">");
        for node in self.nodes() {
            out.push_str(&node.render());
        }
        out.push_str("</span>");
        out
    }
}

impl InlineNode {
    /// Renders this node as annotated markup.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            InlineNode::Text(text) => text.render(),
            InlineNode::Directive(directive) => directive.render(RenderMode::Inline),
        }
    }
}

impl Text {
    /// Renders the text with each line in its own span.
    #[must_use]
    pub fn render(&self) -> String {
        self.as_str()
            .split('\n')
            .map(|line| format!("<span class=\"text-line\">{line}</span>"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Directive {
    /// Renders the directive and its populated fields.
    ///
    /// Fields appear in parse order for the tag's family; absent fields
    /// leave no trace in the output. [`RenderMode::Inline`] re-emits the
    /// surrounding braces and adds an `inline` class to the wrapper.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        let inline = mode == RenderMode::Inline;
        let mut out = format!(
            "<span class=\"doc-comment-directive doc-comment-{}{}\">",
            self.tag(),
            if inline { " inline" } else { "" }
        );
        if inline {
            out.push('{');
        }
        out.push_str("<span class=\"directive-name\">@");
        out.push_str(self.tag());
        out.push_str("</span>");
        match self.family() {
            TagFamily::Marker => {}
            TagFamily::Access => render_access(&mut out, self.info()),
            TagFamily::Author => render_author(&mut out, self.info()),
            TagFamily::Variable | TagFamily::Typed | TagFamily::Name => {
                render_typed(&mut out, self.info());
            }
            TagFamily::License | TagFamily::Link => render_links(&mut out, self.info()),
            TagFamily::Other => render_text(&mut out, self.info()),
        }
        if inline {
            out.push('}');
        }
        out.push_str("</span>");
        out
    }
}

fn render_access(out: &mut String, info: &DirectiveInfo) {
    if let Some(access) = &info.access {
        out.push_str(&format!(" <span class=\"{access}\">{access}</span>"));
    }
}

fn render_author(out: &mut String, info: &DirectiveInfo) {
    let mut parts = Vec::new();
    if let Some(name) = &info.name {
        parts.push(format!("<span class=\"name\">{name}</span>"));
    }
    if let Some(email) = &info.email {
        parts.push(format!(
            "<a class=\"link email nodec\" href=\"mailto:{email}\">&lt;{email}&gt;</a>"
        ));
    }
    if !parts.is_empty() {
        out.push(' ');
        out.push_str(&parts.join(" "));
    }
}

fn render_typed(out: &mut String, info: &DirectiveInfo) {
    if !info.types.is_empty() {
        let entries = info
            .types
            .iter()
            .map(|entry| format!("<span class=\"type\">{entry}</span>"))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!(" <span class=\"types\">{entries}</span>"));
    }
    if let Some(var) = &info.var {
        out.push_str(&format!(" <span class=\"variable\">${var}</span>"));
    }
    render_text(out, info);
}

fn render_links(out: &mut String, info: &DirectiveInfo) {
    if !info.uris.is_empty() {
        let links = info
            .uris
            .iter()
            .map(|uri| format!("<a class=\"link nodec\" href=\"{uri}\">{uri}</a>"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(' ');
        out.push_str(&links);
    }
    render_text(out, info);
}

fn render_text(out: &mut String, info: &DirectiveInfo) {
    if let Some(text) = &info.text {
        out.push(' ');
        out.push_str(&text.render());
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DocOptions;

    fn render_directive(section: &str) -> String {
        Directive::parse(section).unwrap().render(RenderMode::Block)
    }

    #[test]
    fn test_text_wraps_each_line() {
        let text = Text::new("one\ntwo");
        assert_eq!(
            text.render(),
            "<span class=\"text-line\">one</span>\n<span class=\"text-line\">two</span>"
        );
    }

    #[test]
    fn test_marker_renders_name_only() {
        assert_eq!(
            render_directive("@ignore"),
            "<span class=\"doc-comment-directive doc-comment-ignore\">\
             <span class=\"directive-name\">@ignore</span></span>"
        );
    }

    #[test]
    fn test_access_keyword_becomes_class() {
        assert_eq!(
            render_directive("@access protected"),
            "<span class=\"doc-comment-directive doc-comment-access\">\
             <span class=\"directive-name\">@access</span> \
             <span class=\"protected\">protected</span></span>"
        );
    }

    #[test]
    fn test_author_email_uses_entities() {
        let markup = render_directive("@author Jane Doe <jane@example.com>");
        assert!(markup.contains("<span class=\"name\">Jane Doe</span>"));
        assert!(markup.contains(
            "<a class=\"link email nodec\" href=\"mailto:jane@example.com\">\
             &lt;jane@example.com&gt;</a>"
        ));
    }

    #[test]
    fn test_author_with_nothing_renders_name_span_only() {
        assert_eq!(
            render_directive("@author"),
            "<span class=\"doc-comment-directive doc-comment-author\">\
             <span class=\"directive-name\">@author</span></span>"
        );
    }

    #[test]
    fn test_param_field_order() {
        assert_eq!(
            render_directive("@param int|null $n count"),
            "<span class=\"doc-comment-directive doc-comment-param\">\
             <span class=\"directive-name\">@param</span> \
             <span class=\"types\"><span class=\"type\">int</span>|\
             <span class=\"type\">null</span></span> \
             <span class=\"variable\">$n</span> \
             <span class=\"text-line\">count</span></span>"
        );
    }

    #[test]
    fn test_link_anchors_join_with_commas() {
        assert_eq!(
            render_directive("@link example.com, example.org"),
            "<span class=\"doc-comment-directive doc-comment-link\">\
             <span class=\"directive-name\">@link</span> \
             <a class=\"link nodec\" href=\"http://example.com\">http://example.com</a>, \
             <a class=\"link nodec\" href=\"http://example.org\">http://example.org</a></span>"
        );
    }

    #[test]
    fn test_unknown_tag_renders_text() {
        assert_eq!(
            render_directive("@deprecated use other()"),
            "<span class=\"doc-comment-directive doc-comment-deprecated\">\
             <span class=\"directive-name\">@deprecated</span> \
             <span class=\"text-line\">use other()</span></span>"
        );
    }

    #[test]
    fn test_inline_mode_re_emits_braces() {
        let directive = Directive::parse("@internal secret").unwrap();
        assert_eq!(
            directive.render(RenderMode::Inline),
            "<span class=\"doc-comment-directive doc-comment-internal inline\">\
             {<span class=\"directive-name\">@internal</span> \
             <span class=\"text-line\">secret</span>}</span>"
        );
    }

    #[test]
    fn test_paragraph_wraps_children() {
        let paragraph = Paragraph::parse("before {@internal x} after").unwrap();
        let markup = paragraph.render();
        assert!(markup.starts_with("<span class=\"doc-comment-paragraph\">"));
        assert!(markup.ends_with("</span>"));
        assert!(markup.contains("{<span class=\"directive-name\">@internal</span>"));
    }

    #[test]
    fn test_block_decoration_and_margins() {
        let block = Block::parse("/** Summary. */").unwrap();
        assert_eq!(
            block.render(),
            "<span class=\"doc-comment-block\">/**\n * \
             <span class=\"doc-comment-paragraph\">\
             <span class=\"text-line\">Summary.</span></span>\n */</span>"
        );
    }

    #[test]
    fn test_block_margin_prefixes_every_body_line() {
        let block = Block::parse("/** First.\n *\n * Second. */").unwrap();
        let markup = block.render();
        for line in markup.lines().skip(1) {
            assert!(line.starts_with(" *"), "unprefixed line: {line:?}");
        }
    }

    #[test]
    fn test_bare_block_skips_decoration() {
        let block = Block::parse_with_options("@ignore", DocOptions::bare()).unwrap();
        assert_eq!(
            block.render(),
            "<span class=\"doc-comment-block\">\
             <span class=\"doc-comment-directive doc-comment-ignore\">\
             <span class=\"directive-name\">@ignore</span></span></span>"
        );
    }

    #[test]
    fn test_paragraph_neighbors_get_blank_line() {
        let block =
            Block::parse_with_options("First.\n\nSecond.", DocOptions::bare()).unwrap();
        let markup = block.render();
        assert!(markup.contains("</span>\n\n<span class=\"doc-comment-paragraph\">"));
    }

    #[test]
    fn test_directive_neighbors_get_single_newline() {
        let block = Block::parse_with_options(
            "@param int $a\n@param int $b",
            DocOptions::bare(),
        )
        .unwrap();
        let markup = block.render();
        assert!(markup.contains("</span>\n<span class=\"doc-comment-directive"));
        assert!(!markup.contains("\n\n"));
    }

    #[test]
    fn test_mixed_neighbors_get_blank_line() {
        let block = Block::parse_with_options(
            "@return int\n\nTrailing prose.",
            DocOptions::bare(),
        )
        .unwrap();
        assert!(block.nodes()[0].is_directive());
        assert!(block.nodes()[1].is_paragraph());
        assert!(block
            .render()
            .contains("</span>\n\n<span class=\"doc-comment-paragraph\">"));
    }

    #[test]
    fn test_display_delegates_to_render() {
        let directive = Directive::parse("@since 1.2.0").unwrap();
        assert_eq!(directive.to_string(), directive.render(RenderMode::Block));
    }
}
