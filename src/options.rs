//! Configuration options for doc-comment parsing and rendering.
//!
//! [`DocOptions`] controls how much of the comment envelope the engine
//! handles itself. By default the input is a complete doc comment including
//! its `/** ... */` delimiters and per-line ` * ` margins, and rendering
//! re-applies the same decoration. Hosts that strip decoration themselves
//! can switch to bare mode.
//!
//! ## Examples
//!
//! ```rust
//! use docblock::{parse_with_options, DocOptions};
//!
//! // Default: input carries decoration, output re-applies it.
//! let block = parse_with_options("/** Hello. */", DocOptions::new()).unwrap();
//! assert!(block.render().contains("/**"));
//!
//! // Bare: the body has already been stripped by the caller.
//! let block = parse_with_options("Hello.", DocOptions::bare()).unwrap();
//! assert!(!block.render().contains("/**"));
//! ```

/// Configuration options for parsing and rendering a doc comment.
///
/// A [`Block`](crate::Block) remembers the options it was parsed with, so a
/// comment parsed as decorated renders back decorated and a bare body stays
/// bare.
///
/// # Examples
///
/// ```rust
/// use docblock::DocOptions;
///
/// let options = DocOptions::new();
/// assert!(options.decorated);
///
/// let options = DocOptions::bare();
/// assert!(!options.decorated);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocOptions {
    /// Whether the input carries `/** ... */` decoration that `parse`
    /// strips and `render` re-applies.
    pub decorated: bool,
}

impl Default for DocOptions {
    fn default() -> Self {
        DocOptions { decorated: true }
    }
}

impl DocOptions {
    /// Creates default options (decorated comment in, decorated markup out).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pre-stripped comment bodies: no decoration is
    /// removed on parse and none is re-applied on render.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::DocOptions;
    ///
    /// let options = DocOptions::bare();
    /// assert!(!options.decorated);
    /// ```
    #[must_use]
    pub fn bare() -> Self {
        DocOptions { decorated: false }
    }

    /// Sets whether the comment carries decoration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docblock::DocOptions;
    ///
    /// let options = DocOptions::new().with_decorated(false);
    /// assert_eq!(options, DocOptions::bare());
    /// ```
    #[must_use]
    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }
}
