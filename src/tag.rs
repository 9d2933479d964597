//! Tag dispatch table and the primitive-type registry.
//!
//! Every directive tag belongs to exactly one [`TagFamily`], which decides
//! both which fields its argument text is parsed into and which fields its
//! renderer emits. Unrecognized tags fall into [`TagFamily::Other`] and keep
//! their whole argument as trailing text.
//!
//! ## Tag families
//!
//! | Family | Tags | Parsed fields |
//! |---|---|---|
//! | `Marker` | `abstract`, `final`, `static`, `filesource`, `ignore` | none |
//! | `Access` | `access` | bare access keyword |
//! | `Author` | `author` | name, validated email |
//! | `Variable` | `global`, `param`, `property`, `property-read`, `property-write` | types, `$var` (with dimensions), text |
//! | `Typed` | `method`, `return`, `staticvar`, `var` | types, text |
//! | `Name` | `name` | `$var` only, text |
//! | `License` | `license` | one URI, text |
//! | `Link` | `link` | comma-separated URIs, text |
//! | `Other` | anything else | text |
//!
//! ## Examples
//!
//! ```rust
//! use docblock::TagFamily;
//!
//! assert_eq!(TagFamily::of("param"), TagFamily::Variable);
//! assert_eq!(TagFamily::of("return"), TagFamily::Typed);
//! assert_eq!(TagFamily::of("deprecated"), TagFamily::Other);
//! ```

/// Primitive and pseudo-type names that normalize to lowercase in type lists.
///
/// Any other identifier (class names, interfaces) keeps its original casing.
pub const PRIMITIVE_TYPES: [&str; 15] = [
    "void", "null", "bool", "boolean", "string", "array", "int", "integer", "float", "double",
    "number", "callable", "callback", "resource", "mixed",
];

/// Returns `true` if `name` case-insensitively matches a registered
/// primitive or pseudo-type.
///
/// # Examples
///
/// ```rust
/// use docblock::tag::is_primitive;
///
/// assert!(is_primitive("STRING"));
/// assert!(is_primitive("Mixed"));
/// assert!(!is_primitive("MyClass"));
/// ```
#[must_use]
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(name))
}

/// Normalizes one type-list entry: registered primitives become lowercase,
/// everything else is kept as given (trimmed).
///
/// # Examples
///
/// ```rust
/// use docblock::tag::normalize_type;
///
/// assert_eq!(normalize_type("STRING"), "string");
/// assert_eq!(normalize_type("Boolean"), "boolean");
/// assert_eq!(normalize_type("MyClass"), "MyClass");
/// ```
#[must_use]
pub fn normalize_type(raw: &str) -> String {
    let name = raw.trim();
    if is_primitive(name) {
        name.to_ascii_lowercase()
    } else {
        name.to_string()
    }
}

/// Splits a type-list token on `|` and normalizes each entry.
///
/// Segments are preserved verbatim apart from trimming and primitive
/// lowercasing, so a doubled or trailing `|` keeps its empty segment and the
/// rendered list reproduces the source text.
pub(crate) fn parse_type_list(token: &str) -> Vec<String> {
    token.trim().split('|').map(normalize_type).collect()
}

/// The dispatch family of a directive tag.
///
/// Determines which sub-parser consumes the directive's argument text and
/// which fields its renderer emits. See the [module docs](self) for the full
/// table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagFamily {
    /// Tags that take no argument at all.
    Marker,
    /// `access`: a bare visibility keyword.
    Access,
    /// `author`: optional name plus optional validated email.
    Author,
    /// Tags documenting a variable: type list, `$var` with dimension
    /// suffixes, trailing text.
    Variable,
    /// Tags documenting a type only: type list plus trailing text.
    Typed,
    /// `name`: a `$var` (no types, no dimensions) plus trailing text.
    Name,
    /// `license`: a single URI plus trailing text.
    License,
    /// `link`: one or more comma-separated URIs plus trailing text.
    Link,
    /// Any unrecognized tag: the whole argument is trailing text.
    Other,
}

impl TagFamily {
    /// Looks up the family of a (lowercased) tag name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::TagFamily;
    ///
    /// assert_eq!(TagFamily::of("ignore"), TagFamily::Marker);
    /// assert_eq!(TagFamily::of("property-read"), TagFamily::Variable);
    /// assert_eq!(TagFamily::of("link"), TagFamily::Link);
    /// ```
    #[must_use]
    pub fn of(tag: &str) -> Self {
        match tag {
            "abstract" | "final" | "static" | "filesource" | "ignore" => TagFamily::Marker,
            "access" => TagFamily::Access,
            "author" => TagFamily::Author,
            "global" | "param" | "property" | "property-read" | "property-write" => {
                TagFamily::Variable
            }
            "method" | "return" | "staticvar" | "var" => TagFamily::Typed,
            "name" => TagFamily::Name,
            "license" => TagFamily::License,
            "link" => TagFamily::Link,
            _ => TagFamily::Other,
        }
    }
}
