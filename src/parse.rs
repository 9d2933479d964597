//! Doc comment parsing.
//!
//! This module implements the parse half of the crate: it turns a raw
//! comment into the [`Block`] tree defined in [`crate::node`].
//!
//! ## Overview
//!
//! Parsing runs in three stages:
//!
//! - **Normalization**: comment markers (`/**`, `*/`) and per-line `*`
//!   margins are stripped, leaving the bare content lines
//! - **Segmentation**: blank lines separate sections, and a line whose first
//!   character is `@` followed by a letter starts a directive section
//! - **Section parsing**: each section becomes a [`Paragraph`] (scanning for
//!   `{@tag ...}` spans) or a [`Directive`] (splitting the arguments into
//!   the fields its tag family defines)
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use docblock::parse;
//!
//! let block = parse("/**\n * Counts widgets.\n *\n * @return int\n */")?;
//! assert_eq!(block.len(), 2);
//! # Ok::<(), docblock::ParseError>(())
//! ```

use crate::error::{ParseError, Result};
use crate::node::{Block, BlockNode, Directive, DirectiveInfo, InlineNode, Paragraph, Text};
use crate::options::DocOptions;
use crate::tag::{parse_type_list, TagFamily};
use crate::uri;

impl Block {
    /// Parses a decorated doc comment into a block tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a directive section fails to parse. With
    /// the default segmentation this does not happen for any input, since
    /// only lines that look like directives are dispatched as directives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::Block;
    ///
    /// let block = Block::parse("/** @since 2.1.0 */")?;
    /// assert_eq!(block.directives().count(), 1);
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Block> {
        Self::parse_with_options(raw, DocOptions::default())
    }

    /// Parses a doc comment with explicit [`DocOptions`].
    ///
    /// With `decorated` disabled the input is taken as bare content, with no
    /// comment markers or `*` margins to strip.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a directive section fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::{Block, DocOptions};
    ///
    /// let block = Block::parse_with_options("@var string", DocOptions::bare())?;
    /// assert_eq!(block.directives().count(), 1);
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    pub fn parse_with_options(raw: &str, options: DocOptions) -> Result<Block> {
        let content = if options.decorated {
            strip_decoration(raw)
        } else {
            normalize_bare(raw)
        };
        let lines: Vec<&str> = content.lines().collect();
        let mut nodes = Vec::new();
        let mut cursor = 0;
        while cursor < lines.len() {
            if lines[cursor].is_empty() {
                cursor += 1;
                continue;
            }
            let start = cursor;
            let is_directive = is_directive_start(lines[cursor]);
            cursor += 1;
            while cursor < lines.len()
                && !lines[cursor].is_empty()
                && !is_directive_start(lines[cursor])
            {
                cursor += 1;
            }
            let section = lines[start..cursor].join("\n");
            let node = if is_directive {
                BlockNode::Directive(Directive::parse(&section)?)
            } else {
                BlockNode::Paragraph(Paragraph::parse(&section)?)
            };
            nodes.push(node);
        }
        Ok(Block { nodes, options })
    }
}

impl Paragraph {
    /// Parses a prose section, extracting embedded `{@tag ...}` directives.
    ///
    /// An opening brace only starts a directive when `@` and a letter follow
    /// it and a closing brace exists later in the section; any other brace
    /// is plain text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if an embedded directive fails to parse. The
    /// brace scan only accepts spans that start like directives, so this
    /// does not happen for spans it extracts.
    pub fn parse(raw: &str) -> Result<Paragraph> {
        let mut nodes = Vec::new();
        let mut rest = raw;
        while let Some((before, inner, after)) = next_inline_directive(rest) {
            if !before.is_empty() {
                nodes.push(InlineNode::Text(Text::new(before)));
            }
            nodes.push(InlineNode::Directive(Directive::parse(inner)?));
            rest = after;
        }
        if !rest.is_empty() {
            nodes.push(InlineNode::Text(Text::new(rest)));
        }
        Ok(Paragraph { nodes })
    }
}

impl Directive {
    /// Parses a single directive section.
    ///
    /// The input must start with `@` followed by an ASCII letter; the tag
    /// name runs to the first whitespace character and is lowercased. The
    /// remaining arguments parse according to the tag's [`TagFamily`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotDirective`] if the input does not start
    /// with `@` and a letter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::Directive;
    ///
    /// let directive = Directive::parse("@param int|null $count how many")?;
    /// assert_eq!(directive.tag(), "param");
    /// assert_eq!(directive.info().types, ["int", "null"]);
    /// assert_eq!(directive.info().var.as_deref(), Some("count"));
    /// # Ok::<(), docblock::ParseError>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Directive> {
        let trimmed = raw.trim();
        if !is_directive_start(trimmed) {
            return Err(ParseError::not_directive(raw));
        }
        let (token, rest) = split_once_whitespace(trimmed);
        let tag = token[1..].to_ascii_lowercase();
        let mut info = DirectiveInfo::default();
        match TagFamily::of(&tag) {
            TagFamily::Marker => {}
            TagFamily::Access => parse_access(&mut info, rest),
            TagFamily::Author => parse_author(&mut info, rest),
            TagFamily::Variable => parse_typed(&mut info, rest, true, VarRule::WithDims),
            TagFamily::Typed => parse_typed(&mut info, rest, true, VarRule::None),
            TagFamily::Name => parse_typed(&mut info, rest, false, VarRule::Bare),
            TagFamily::License => parse_links(&mut info, rest, false),
            TagFamily::Link => parse_links(&mut info, rest, true),
            TagFamily::Other => set_text(&mut info, rest),
        }
        Ok(Directive { tag, info })
    }
}

/// How [`parse_typed`] treats a `$variable` argument.
enum VarRule {
    /// No variable is expected.
    None,
    /// A bare `$name` without dimensions.
    Bare,
    /// A `$name` that may carry `['key']` dimensions.
    WithDims,
}

/// Strips `/**`, `*/` and per-line `*` margins from a decorated comment.
fn strip_decoration(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("*/").unwrap_or(trimmed);
    let lines: Vec<&str> = trimmed.lines().map(strip_margin).collect();
    lines.join("\n").trim().to_string()
}

/// Strips one line's leading whitespace, `*` margin, and at most one
/// whitespace character after it. Lines without a margin keep their
/// indentation. Trailing whitespace is always dropped.
fn strip_margin(line: &str) -> &str {
    let unmargined = match line.trim_start().strip_prefix('*') {
        Some(rest) => strip_one_leading_whitespace(rest),
        None => line,
    };
    unmargined.trim_end()
}

/// Normalizes a bare (undecorated) comment: trailing whitespace per line,
/// surrounding blank space overall.
fn normalize_bare(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    lines.join("\n").trim().to_string()
}

/// Returns `true` if the line opens a directive: `@` then an ASCII letter.
/// Indented `@` lines are prose.
fn is_directive_start(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('@') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Splits at the first whitespace character, consuming it.
fn split_once_whitespace(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail),
        None => (input, ""),
    }
}

/// Strips at most one leading whitespace character.
fn strip_one_leading_whitespace(input: &str) -> &str {
    match input.chars().next() {
        Some(c) if c.is_whitespace() => &input[c.len_utf8()..],
        _ => input,
    }
}

/// Finds the next `{@tag ...}` span in prose.
///
/// Returns the text before the span, the span content without its braces,
/// and the text after it. A `{` that is not followed by `@` and a letter,
/// or that never closes, is treated as prose and the scan moves past it.
fn next_inline_directive(text: &str) -> Option<(&str, &str, &str)> {
    let mut search = 0;
    while let Some(offset) = text[search..].find('{') {
        let open = search + offset;
        let candidate = &text[open + 1..];
        if is_directive_start(candidate) {
            if let Some(close) = candidate.find('}') {
                return Some((&text[..open], &candidate[..close], &candidate[close + 1..]));
            }
        }
        search = open + 1;
    }
    None
}

/// Stores the trimmed remainder as free text, if any survives the trim.
fn set_text(info: &mut DirectiveInfo, rest: &str) {
    let text = rest.trim();
    if !text.is_empty() {
        info.text = Some(Text::new(text));
    }
}

/// Takes the first whitespace-separated word as the access keyword.
fn parse_access(info: &mut DirectiveInfo, rest: &str) {
    if let Some(keyword) = rest.split_whitespace().next() {
        info.access = Some(keyword.to_string());
    }
}

/// Parses `Name Tokens <email@host>` author arguments.
///
/// The name is a run of word-or-dot tokens separated by single spaces. The
/// email candidate sits between `<` and the last `>`, and is kept only when
/// it contains `@` and passes URI validation.
fn parse_author(info: &mut DirectiveInfo, rest: &str) {
    let rest = rest.trim();
    let name_end = scan_author_name(rest);
    if name_end > 0 {
        info.name = Some(rest[..name_end].to_string());
    }
    let after_name = strip_one_leading_whitespace(&rest[name_end..]);
    let candidate = after_name
        .strip_prefix('<')
        .and_then(|inner| inner.rfind('>').map(|close| inner[..close].trim()));
    if let Some(candidate) = candidate {
        if candidate.contains('@') && uri::validate(candidate).is_some() {
            info.email = Some(candidate.to_string());
        }
    }
}

/// Length of the leading author name: ASCII word-or-dot tokens separated by
/// single spaces.
fn scan_author_name(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut end = 0;
    loop {
        let mut cursor = end;
        if end > 0 {
            if bytes.get(cursor) != Some(&b' ') {
                break;
            }
            cursor += 1;
        }
        let token_start = cursor;
        while bytes
            .get(cursor)
            .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
        {
            cursor += 1;
        }
        if cursor == token_start {
            break;
        }
        end = cursor;
    }
    end
}

/// Parses `[types] [$var[dims]] [text]` arguments.
///
/// Each piece is optional; whatever fails to match at its position falls
/// through into the trailing text.
fn parse_typed(info: &mut DirectiveInfo, rest: &str, with_types: bool, var: VarRule) {
    let mut remainder = rest;
    if with_types {
        let candidate = remainder.trim_start();
        let end = candidate
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '|'))
            .unwrap_or(candidate.len());
        if end > 0 {
            info.types = parse_type_list(&candidate[..end]);
            remainder = &candidate[end..];
        }
    }
    if !matches!(var, VarRule::None) {
        let candidate = remainder.trim_start();
        if let Some(after_sigil) = candidate.strip_prefix('$') {
            let name_len = after_sigil
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after_sigil.len());
            if name_len > 0 {
                let mut end = name_len;
                if matches!(var, VarRule::WithDims) {
                    end += scan_dimensions(&after_sigil[name_len..]);
                }
                info.var = Some(after_sigil[..end].to_string());
                remainder = &after_sigil[end..];
            }
        }
    }
    set_text(info, remainder);
}

/// Length of the leading `['key']` dimension run.
///
/// Each dimension is a bracket, a quote, one or more non-quote characters, a
/// quote, and a closing bracket. Either quote character works on either
/// side. A malformed dimension stops the scan cleanly, leaving it to the
/// trailing text.
fn scan_dimensions(input: &str) -> usize {
    let bytes = input.as_bytes();
    let is_quote = |b: u8| b == b'\'' || b == b'"';
    let mut end = 0;
    while bytes.get(end) == Some(&b'[') {
        let mut cursor = end + 1;
        if !bytes.get(cursor).copied().is_some_and(is_quote) {
            break;
        }
        cursor += 1;
        let content_start = cursor;
        while bytes.get(cursor).copied().is_some_and(|b| !is_quote(b)) {
            cursor += 1;
        }
        if cursor == content_start || !bytes.get(cursor).copied().is_some_and(is_quote) {
            break;
        }
        cursor += 1;
        if bytes.get(cursor) != Some(&b']') {
            break;
        }
        end = cursor + 1;
    }
    end
}

/// Parses `@link` and `@license` arguments into URIs plus trailing text.
///
/// With `multiple` enabled the arguments split on commas first. Every
/// candidate must validate as a URI; the last one may instead split at its
/// first whitespace run into a URI and trailing text. When a candidate
/// fails, it and everything after it become the trailing text.
fn parse_links(info: &mut DirectiveInfo, rest: &str, multiple: bool) {
    let candidates: Vec<&str> = if multiple {
        split_link_candidates(rest)
    } else {
        vec![rest]
    };
    let mut uris = Vec::new();
    let mut text: Option<String> = None;
    for (index, &candidate) in candidates.iter().enumerate() {
        let is_last = index + 1 == candidates.len();
        if !is_last {
            match uri::validate(candidate) {
                Some(accepted) => uris.push(accepted),
                None => {
                    text = Some(candidates[index..].join(", "));
                    break;
                }
            }
            continue;
        }
        let (head, tail) = split_head_and_tail(candidate);
        match uri::validate(head) {
            Some(accepted) => {
                uris.push(accepted);
                text = tail.map(str::to_string);
            }
            // The head alone failed; the whole candidate may still be one
            // URI whose path happens to follow whitespace-free rules.
            None => match tail.and_then(|_| uri::validate(candidate)) {
                Some(accepted) => uris.push(accepted),
                None => text = Some(candidate.to_string()),
            },
        }
    }
    info.uris = uris;
    if let Some(text) = text {
        set_text(info, &text);
    }
}

/// Splits comma-separated link candidates, stripping at most one whitespace
/// character after each comma.
fn split_link_candidates(rest: &str) -> Vec<&str> {
    rest.split(',')
        .enumerate()
        .map(|(index, piece)| {
            if index == 0 {
                piece
            } else {
                strip_one_leading_whitespace(piece)
            }
        })
        .collect()
}

/// Splits a candidate at its first whitespace run.
fn split_head_and_tail(candidate: &str) -> (&str, Option<&str>) {
    match candidate.find(char::is_whitespace) {
        Some(position) => (&candidate[..position], Some(candidate[position..].trim_start())),
        None => (candidate, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_of(section: &str) -> DirectiveInfo {
        Directive::parse(section).unwrap().info().clone()
    }

    #[test]
    fn test_strip_decoration_basic() {
        let raw = "/**\n * Summary line.\n *\n * @return int\n */";
        assert_eq!(strip_decoration(raw), "Summary line.\n\n@return int");
    }

    #[test]
    fn test_strip_decoration_single_line() {
        assert_eq!(strip_decoration("/** Inline summary. */"), "Inline summary.");
    }

    #[test]
    fn test_strip_margin_consumes_at_most_one_space() {
        assert_eq!(strip_margin(" *  indented"), " indented");
        assert_eq!(strip_margin(" *\tkept tab gone"), "kept tab gone");
        assert_eq!(strip_margin(" *word"), "word");
    }

    #[test]
    fn test_strip_margin_keeps_unmargined_indentation() {
        assert_eq!(strip_margin("    plain code line"), "    plain code line");
    }

    #[test]
    fn test_sections_split_on_blank_lines() {
        let block = Block::parse("/**\n * First.\n *\n * Second.\n */").unwrap();
        assert_eq!(block.paragraphs().count(), 2);
    }

    #[test]
    fn test_directive_line_starts_new_section() {
        let block = Block::parse("/**\n * Prose line.\n * @return int\n */").unwrap();
        assert_eq!(block.len(), 2);
        assert!(block.nodes()[0].is_paragraph());
        assert!(block.nodes()[1].is_directive());
    }

    #[test]
    fn test_directive_continuation_lines_join() {
        let block = Block::parse("/**\n * @param int $n first\n * second\n */").unwrap();
        let directive = block.directives().next().unwrap();
        assert_eq!(
            directive.info().text.as_ref().map(Text::as_str),
            Some("first\nsecond")
        );
    }

    #[test]
    fn test_indented_at_sign_is_prose() {
        let block = Block::parse("/**\n * see below\n *  @not a directive\n */").unwrap();
        assert_eq!(block.len(), 1);
        assert!(block.nodes()[0].is_paragraph());
    }

    #[test]
    fn test_at_digit_is_prose() {
        let block = Block::parse("/**\n * @123 numeric handle\n */").unwrap();
        assert!(block.nodes()[0].is_paragraph());
    }

    #[test]
    fn test_bare_mode_takes_content_as_is() {
        let block =
            Block::parse_with_options("Summary.\n\n@return int", DocOptions::bare()).unwrap();
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn test_empty_comment_parses_to_empty_block() {
        let block = Block::parse("/** */").unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn test_paragraph_with_inline_directive() {
        let paragraph = Paragraph::parse("See {@link http://example.com/docs} for more.").unwrap();
        assert_eq!(paragraph.len(), 3);
        assert_eq!(
            paragraph.nodes()[0].as_text().map(Text::as_str),
            Some("See ")
        );
        let inline = paragraph.nodes()[1].as_directive().unwrap();
        assert_eq!(inline.tag(), "link");
        assert_eq!(inline.info().uris, ["http://example.com/docs"]);
        assert_eq!(
            paragraph.nodes()[2].as_text().map(Text::as_str),
            Some(" for more.")
        );
    }

    #[test]
    fn test_unclosed_brace_is_prose() {
        let paragraph = Paragraph::parse("a {@link example.com never closes").unwrap();
        assert_eq!(paragraph.len(), 1);
        assert!(paragraph.nodes()[0].is_text());
    }

    #[test]
    fn test_brace_without_tag_is_prose() {
        let paragraph = Paragraph::parse("array{int} is {@ not} a directive").unwrap();
        assert_eq!(paragraph.len(), 1);
    }

    #[test]
    fn test_brace_scan_resumes_after_false_start() {
        let paragraph = Paragraph::parse("{x} then {@internal note}").unwrap();
        assert_eq!(paragraph.len(), 2);
        assert_eq!(paragraph.directives().next().unwrap().tag(), "internal");
    }

    #[test]
    fn test_directive_requires_letter_after_at() {
        let err = Directive::parse("plain words").unwrap_err();
        assert!(matches!(err, ParseError::NotDirective { .. }));
        assert!(Directive::parse("@1x").is_err());
    }

    #[test]
    fn test_tag_is_lowercased() {
        let directive = Directive::parse("@RETURN INT").unwrap();
        assert_eq!(directive.tag(), "return");
        assert_eq!(directive.info().types, ["int"]);
    }

    #[test]
    fn test_marker_ignores_arguments() {
        let info = info_of("@ignore everything after is dropped");
        assert!(info.is_empty());
    }

    #[test]
    fn test_access_takes_first_word() {
        let info = info_of("@access private stray words");
        assert_eq!(info.access.as_deref(), Some("private"));
        assert!(info.text.is_none());
    }

    #[test]
    fn test_access_with_no_argument() {
        assert!(info_of("@access").is_empty());
    }

    #[test]
    fn test_author_name_and_email() {
        let info = info_of("@author Jane Doe <jane@example.com>");
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_author_name_only() {
        let info = info_of("@author Jane Doe");
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert!(info.email.is_none());
    }

    #[test]
    fn test_author_email_only() {
        let info = info_of("@author <jane@example.com>");
        assert!(info.name.is_none());
        assert_eq!(info.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_author_invalid_email_dropped() {
        let info = info_of("@author Jane Doe <not an email>");
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert!(info.email.is_none());
    }

    #[test]
    fn test_author_email_requires_at_sign() {
        let info = info_of("@author Jane <example.com>");
        assert!(info.email.is_none());
    }

    #[test]
    fn test_author_double_space_stops_name() {
        let info = info_of("@author Jane  Doe");
        assert_eq!(info.name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_author_dotted_initials() {
        let info = info_of("@author J. R. Hacker");
        assert_eq!(info.name.as_deref(), Some("J. R. Hacker"));
    }

    #[test]
    fn test_param_full_form() {
        let info = info_of("@param int|string $count how many to take");
        assert_eq!(info.types, ["int", "string"]);
        assert_eq!(info.var.as_deref(), Some("count"));
        assert_eq!(
            info.text.as_ref().map(Text::as_str),
            Some("how many to take")
        );
    }

    #[test]
    fn test_param_types_only() {
        let info = info_of("@param bool");
        assert_eq!(info.types, ["bool"]);
        assert!(info.var.is_none());
        assert!(info.text.is_none());
    }

    #[test]
    fn test_param_registry_types_lowercase_custom_kept() {
        let info = info_of("@param INT|MyClass $x");
        assert_eq!(info.types, ["int", "MyClass"]);
    }

    #[test]
    fn test_param_empty_type_segments_kept() {
        let info = info_of("@param int||string $x");
        assert_eq!(info.types, ["int", "", "string"]);
    }

    #[test]
    fn test_param_dimensions() {
        let info = info_of("@param array $matrix['x']['y'] cell values");
        assert_eq!(info.var.as_deref(), Some("matrix['x']['y']"));
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("cell values"));
    }

    #[test]
    fn test_param_malformed_dimension_falls_to_text() {
        let info = info_of("@param array $m['x' oops");
        assert_eq!(info.var.as_deref(), Some("m"));
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("['x' oops"));
    }

    #[test]
    fn test_param_empty_dimension_falls_to_text() {
        let info = info_of("@param array $m['']");
        assert_eq!(info.var.as_deref(), Some("m"));
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("['']"));
    }

    #[test]
    fn test_param_bare_dollar_is_text() {
        let info = info_of("@param int $ loose sigil");
        assert_eq!(info.types, ["int"]);
        assert!(info.var.is_none());
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("$ loose sigil"));
    }

    #[test]
    fn test_return_takes_no_variable() {
        let info = info_of("@return int $looks_like_var");
        assert_eq!(info.types, ["int"]);
        assert!(info.var.is_none());
        assert_eq!(
            info.text.as_ref().map(Text::as_str),
            Some("$looks_like_var")
        );
    }

    #[test]
    fn test_name_takes_variable_without_types() {
        let info = info_of("@name $handler registered hook");
        assert!(info.types.is_empty());
        assert_eq!(info.var.as_deref(), Some("handler"));
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("registered hook"));
    }

    #[test]
    fn test_name_word_argument_is_text() {
        let info = info_of("@name plain_name");
        assert!(info.var.is_none());
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("plain_name"));
    }

    #[test]
    fn test_link_single_uri() {
        let info = info_of("@link http://example.com/docs");
        assert_eq!(info.uris, ["http://example.com/docs"]);
        assert!(info.text.is_none());
    }

    #[test]
    fn test_link_normalizes_schemeless_uri() {
        let info = info_of("@link example.com/docs");
        assert_eq!(info.uris, ["http://example.com/docs"]);
    }

    #[test]
    fn test_link_multiple_uris_with_text() {
        let info = info_of("@link example.com, https://x.org/a see also");
        assert_eq!(info.uris, ["http://example.com", "https://x.org/a"]);
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("see also"));
    }

    #[test]
    fn test_link_failure_joins_remaining_text() {
        let info = info_of("@link bad host, example.com more");
        assert!(info.uris.is_empty());
        assert_eq!(
            info.text.as_ref().map(Text::as_str),
            Some("bad host, example.com more")
        );
    }

    #[test]
    fn test_link_plain_words_become_text() {
        let info = info_of("@link not a uri at all");
        assert!(info.uris.is_empty());
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("not a uri at all"));
    }

    #[test]
    fn test_license_takes_single_uri_and_text() {
        let info = info_of("@license http://opensource.org/licenses/MIT MIT License");
        assert_eq!(info.uris, ["http://opensource.org/licenses/MIT"]);
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("MIT License"));
    }

    #[test]
    fn test_license_does_not_split_on_commas() {
        let info = info_of("@license example.com/a, example.com/b");
        assert_eq!(info.uris, ["http://example.com/a,"]);
        assert_eq!(info.text.as_ref().map(Text::as_str), Some("example.com/b"));
    }

    #[test]
    fn test_unknown_tag_keeps_text() {
        let info = info_of("@deprecated use replace() instead");
        assert_eq!(
            info.text.as_ref().map(Text::as_str),
            Some("use replace() instead")
        );
    }

    #[test]
    fn test_scan_dimensions_accepts_mixed_quotes() {
        assert_eq!(scan_dimensions("['x\"]"), 5);
        assert_eq!(scan_dimensions("[\"key\"] rest"), 7);
        assert_eq!(scan_dimensions("[x]"), 0);
    }

    #[test]
    fn test_split_head_and_tail() {
        assert_eq!(split_head_and_tail("one"), ("one", None));
        assert_eq!(split_head_and_tail("one  two three"), ("one", Some("two three")));
    }
}
