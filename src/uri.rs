//! Syntactic URI validation and normalization.
//!
//! Link-family directives (`@link`, `@license`) and author email candidates
//! pass through [`validate`], a purely syntactic check with no network
//! access and no registry lookups. The accepted shape is
//!
//! ```text
//! [scheme://] [userinfo@] host [:port] [/path | ?path]
//! ```
//!
//! where `host` is either a dotted domain (percent-escapes allowed) or a
//! bracketed IPv6-like form such as `[::1]`. A schemeless domain must
//! contain at least one `.`, so a bare word like `not` is never mistaken
//! for a host while `example.com` still passes.
//!
//! Accepted candidates without a scheme and without an `@` are normalized
//! by prepending `http://`; email-shaped candidates are returned untouched.
//!
//! ## Examples
//!
//! ```rust
//! use docblock::uri::validate;
//!
//! assert_eq!(validate("example.com"), Some("http://example.com".to_string()));
//! assert_eq!(validate("https://x.org/a"), Some("https://x.org/a".to_string()));
//! assert_eq!(validate("jane@example.com"), Some("jane@example.com".to_string()));
//! assert_eq!(validate("not"), None);
//! ```

/// Host forms the scanner distinguishes.
enum Host {
    Domain { dotted: bool },
    Bracketed,
}

/// Byte cursor over one candidate string.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// True if the two bytes after the current one are hex digits.
    fn hex_pair_follows(&self) -> bool {
        matches!(
            (self.bytes.get(self.pos + 1), self.bytes.get(self.pos + 2)),
            (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
        )
    }

    /// Consumes `scheme://` if present. The scheme is a letter followed by
    /// letters, digits, `-`, `.` or `*`, and must be terminated by `://`
    /// exactly where the scheme characters stop.
    fn scan_scheme(&mut self) -> bool {
        if !self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return false;
        }
        let mut end = self.pos;
        while self
            .bytes
            .get(end)
            .is_some_and(|&b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'*'))
        {
            end += 1;
        }
        if self.bytes[end..].starts_with(b"://") {
            self.pos = end + 3;
            true
        } else {
            false
        }
    }

    /// Consumes `userinfo@` if present: `:`-separated chunks of userinfo
    /// characters, every chunk non-empty, terminated by `@`. Anything else
    /// leaves the cursor untouched.
    fn scan_userinfo(&mut self) {
        let start = self.pos;
        let mut end = self.pos;
        while self
            .bytes
            .get(end)
            .is_some_and(|&b| is_userinfo_byte(b) || b == b':')
        {
            end += 1;
        }
        if end > start && self.bytes.get(end) == Some(&b'@') {
            let span = &self.bytes[start..end];
            if span.split(|&b| b == b':').all(|chunk| !chunk.is_empty()) {
                self.pos = end + 1;
            }
        }
    }

    fn scan_host(&mut self) -> Option<Host> {
        if self.eat(b'[') {
            let mut group_digits = 0;
            loop {
                match self.peek() {
                    Some(b) if b.is_ascii_hexdigit() => {
                        group_digits += 1;
                        if group_digits > 4 {
                            return None;
                        }
                        self.bump();
                    }
                    Some(b':') => {
                        group_digits = 0;
                        self.bump();
                    }
                    _ => break,
                }
            }
            if self.eat(b']') {
                Some(Host::Bracketed)
            } else {
                None
            }
        } else {
            let start = self.pos;
            let mut dotted = false;
            loop {
                match self.peek() {
                    Some(b) if b.is_ascii_alphanumeric() || b == b'-' => self.bump(),
                    Some(b'.') => {
                        dotted = true;
                        self.bump();
                    }
                    Some(b'%') if self.hex_pair_follows() => self.pos += 3,
                    _ => break,
                }
            }
            if self.pos == start {
                None
            } else {
                Some(Host::Domain { dotted })
            }
        }
    }

    /// Consumes `:port` if present; a colon without digits is a dead end.
    fn scan_port(&mut self) -> bool {
        if !self.eat(b':') {
            return true;
        }
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        self.pos > start
    }

    /// Consumes a path introduced by `/` or `?`.
    fn scan_path(&mut self) {
        if !matches!(self.peek(), Some(b'/') | Some(b'?')) {
            return;
        }
        self.bump();
        loop {
            match self.peek() {
                Some(b) if is_path_byte(b) => self.bump(),
                Some(b'%') if self.hex_pair_follows() => self.pos += 3,
                _ => break,
            }
        }
    }
}

fn is_userinfo_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'.' | b'-' | b'+' | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b','
                | b';' | b'=' | b'%'
        )
}

fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'#' | b'!' | b':' | b'.' | b'?' | b'+' | b'=' | b'&' | b'@' | b'$' | b'\''
                | b'~' | b'*' | b',' | b';' | b'/' | b'(' | b')' | b'[' | b']' | b'-'
        )
}

/// Validates one URI candidate, returning the normalized form on acceptance.
///
/// The candidate is trimmed before matching; an empty candidate is rejected.
/// On acceptance a schemeless, non-email-shaped candidate comes back with
/// `http://` prepended; everything else is returned as trimmed.
///
/// # Examples
///
/// ```rust
/// use docblock::uri::validate;
///
/// assert_eq!(validate(" www.gnu.org "), Some("http://www.gnu.org".to_string()));
/// assert_eq!(validate("ftp://mirror.example.org/pub"), Some("ftp://mirror.example.org/pub".to_string()));
/// assert_eq!(validate("not a uri at all"), None);
/// ```
#[must_use]
pub fn validate(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut scanner = Scanner::new(trimmed);
    let has_scheme = scanner.scan_scheme();
    scanner.scan_userinfo();
    let host = scanner.scan_host()?;
    if !scanner.scan_port() {
        return None;
    }
    scanner.scan_path();
    if !scanner.at_end() {
        return None;
    }
    // A bare word is prose, not a host: schemeless domains need a dot.
    if !has_scheme && matches!(host, Host::Domain { dotted: false }) {
        return None;
    }

    if !has_scheme && !trimmed.contains('@') {
        Some(format!("http://{trimmed}"))
    } else {
        Some(trimmed.to_string())
    }
}
