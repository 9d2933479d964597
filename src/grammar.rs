//! Doc Comment Grammar
//!
//! This module documents the doc comment dialect parsed and rendered by this
//! library.
//!
//! # Overview
//!
//! A doc comment is a `/** ... */` block attached to a declaration. Inside
//! it, prose paragraphs mix with `@tag` directives that carry structured
//! metadata: parameter types, authorship, links, visibility. The library
//! parses a comment into a tree and renders the tree back as markup in which
//! every node is wrapped in a class-annotated `<span>`.
//!
//! # Comment Shape
//!
//! ```text
//! /**
//!  * Short summary paragraph.
//!  *
//!  * Longer description, possibly referring to {@link http://example.com}
//!  * inline.
//!  *
//!  * @param  int|string $count how many widgets to take
//!  * @return bool true on success
//!  */
//! ```
//!
//! **Normalization rules**:
//! - The `/**` (or `/*`) opener and `*/` closer are stripped
//! - On each line, leading whitespace followed by `*` is stripped, along
//!   with at most one whitespace character after the `*`; further leading
//!   whitespace is content
//! - Lines without a `*` margin keep their indentation
//! - Trailing whitespace is dropped from every line, and blank lines at the
//!   start and end of the comment are dropped
//!
//! # Sections
//!
//! After normalization, content splits into sections:
//!
//! - A blank line ends the current section
//! - A line whose first character is `@` followed by an ASCII letter starts
//!   a directive section; following non-blank, non-directive lines belong to
//!   it as continuation text
//! - Anything else starts or continues a paragraph
//!
//! An indented `@` is prose. `@123` is prose. Sections keep source order.
//!
//! # Directives
//!
//! A directive is `@tag` plus arguments. The tag runs to the first
//! whitespace character and is stored lowercased. How the arguments parse
//! depends on the tag's family:
//!
//! | Family | Tags | Arguments |
//! |--------|------|-----------|
//! | Marker | `abstract`, `final`, `static`, `filesource`, `ignore` | none; anything after the tag is dropped |
//! | Access | `access` | one visibility keyword |
//! | Author | `author` | `Name Tokens <email@host>` |
//! | Variable | `global`, `param`, `property`, `property-read`, `property-write` | types, `$var` with optional dimensions, text |
//! | Typed | `method`, `return`, `staticvar`, `var` | types, text |
//! | Name | `name` | `$var` without dimensions, text |
//! | License | `license` | one URI, text |
//! | Link | `link` | comma-separated URIs, text |
//! | Other | anything else | free text |
//!
//! **Types** are a pipe-separated list: `int|string|null`. Names matching
//! the primitive registry are lowercased; anything else keeps its spelling.
//! The registry: `array`, `bool`, `boolean`, `callable`, `callback`,
//! `double`, `float`, `int`, `integer`, `mixed`, `null`, `number`,
//! `resource`, `string`, `void`.
//!
//! **Variables** are `$` followed by word characters. Tags in the Variable
//! family also accept dimension suffixes, quoted keys in brackets:
//!
//! ```text
//! @param array $matrix['x']['y'] cell values
//! ```
//!
//! A malformed dimension ends the variable cleanly and the rest falls into
//! the trailing text.
//!
//! **Author** arguments take a name of word-or-dot tokens separated by
//! single spaces, then an optional `<...>` email. The email is kept only
//! when it contains `@` and passes URI validation:
//!
//! ```text
//! @author Jane Doe <jane@example.com>
//! ```
//!
//! # Inline Directives
//!
//! Inside a paragraph, `{@tag ...}` embeds a directive in prose:
//!
//! ```text
//! See {@link http://example.com/docs} for details.
//! ```
//!
//! The opening brace only counts when `@` and a letter follow it and a `}`
//! closes it later in the section; any other brace is plain text. The span
//! content parses exactly like a block-level directive.
//!
//! # URIs
//!
//! Link and license arguments, and author emails, pass through a URI
//! validator. A candidate is, in order:
//!
//! - an optional scheme: a letter, then letters, digits, `.`, `*` or `-`,
//!   then `://`
//! - optional userinfo ending in `@`, with no empty `:`-separated chunk
//! - a host: either a bracketed IPv6 literal with hex groups of at most
//!   four digits, or a domain of letters, digits, dots, hyphens and
//!   percent-escapes
//! - an optional `:` port of digits
//! - an optional path starting with `/` or `?`
//!
//! The whole candidate must match; trailing garbage rejects it. A candidate
//! with no scheme and no `@` must have a dotted host (`example.com` passes,
//! `localhost` does not) and is normalized by prepending `http://`.
//!
//! For `@link`, arguments split on commas, each piece losing at most one
//! whitespace character after the comma. Every piece must validate; the
//! last piece may instead split at its first whitespace run into a URI and
//! trailing text. When a piece fails, it and everything after it become the
//! trailing text unchanged:
//!
//! ```text
//! @link example.com, https://x.org/a see also
//! ```
//!
//! parses to two URIs (`http://example.com`, `https://x.org/a`) and the
//! text `see also`.
//!
//! # Rendered Markup
//!
//! Every node renders as a `<span>` with a class naming its role:
//!
//! | Node | Wrapper |
//! |------|---------|
//! | Block | `<span class="doc-comment-block">...</span>` |
//! | Paragraph | `<span class="doc-comment-paragraph">...</span>` |
//! | Text line | `<span class="text-line">...</span>` |
//! | Directive | `<span class="doc-comment-directive doc-comment-TAG">...</span>` |
//! | Tag name | `<span class="directive-name">@TAG</span>` |
//! | Type entry | `<span class="type">...</span>` inside `<span class="types">` |
//! | Variable | `<span class="variable">$NAME</span>` |
//! | URI | `<a class="link nodec" href="URI">URI</a>` |
//! | Email | `<a class="link email nodec" href="mailto:EMAIL">&lt;EMAIL&gt;</a>` |
//! | Access keyword | `<span class="KEYWORD">KEYWORD</span>` |
//! | Author name | `<span class="name">NAME</span>` |
//!
//! Decorated blocks re-emit `/**`, a ` * ` margin on every body line, and
//! `*/`. Between block nodes, a blank line separates any pair involving a
//! paragraph; adjacent directives sit on consecutive lines. Inline
//! directives re-emit their braces and add an `inline` class to the
//! wrapper.
//!
//! Node content is emitted verbatim; the only entities produced are the
//! `&lt;` and `&gt;` around author emails.
//!
//! # Edge Cases
//!
//! - An empty comment parses to an empty block and renders as an empty
//!   decorated frame
//! - `@access` with no argument, `@author` with no match, and `@link` with
//!   nothing validating all produce a directive with only its tag
//! - Empty segments in a type list are kept: `int||string` has three
//!   entries, the middle one empty
//! - A `{` that never closes, or is not followed by `@` and a letter, is
//!   prose
//!
//! # Limitations
//!
//! - Tags are matched case-insensitively but always stored and rendered
//!   lowercased
//! - The validator's URI dialect is deliberately narrow; it exists to
//!   classify doc comment arguments, not to replace a general URI parser
//! - Rendering does not escape HTML in node content

// This module contains only documentation; no implementation code
