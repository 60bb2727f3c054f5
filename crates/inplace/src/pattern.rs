//! Token pattern matching.
//!
//! A [`Pattern`] is a regular expression with two capture groups:
//!
//! 1. the token name (required),
//! 2. the raw argument string (optional).

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PatternError;

/// Default token syntax: `{{ name }}` and `{{ name, args }}`.
///
/// Names are ASCII word characters only.
pub const EXPRESSION_PATTERN: &str = r"\{\{\s*([A-Za-z0-9_]+)\s*(?:,\s*([^}]+))?\}\}";

/// Nano block syntax: `@@name` and `@@name(args)`.
pub const NANO_BLOCK_PATTERN: &str = r"@@([A-Za-z0-9_]+)(?:\(([^)]*)\))?";

static EXPRESSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXPRESSION_PATTERN).expect("invalid expression pattern"));

static NANO_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NANO_BLOCK_PATTERN).expect("invalid nano block pattern"));

/// A token found in a text string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'t> {
    /// Token name exactly as captured (original case).
    pub name: &'t str,
    /// Raw argument string, verbatim. `None` when group 2 did not participate.
    pub raw_args: Option<&'t str>,
    /// Byte range of the whole token in the source text.
    pub span: Range<usize>,
}

impl TokenMatch<'_> {
    #[must_use]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// Compiled token pattern.
///
/// # Example
///
/// ```
/// use inplace::Pattern;
///
/// let pattern = Pattern::new(r"@@(\w+)(?:\(([^)]*)\))?").unwrap();
/// let tokens = pattern.find_tokens("a @@x(1,2) b");
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].name, "x");
/// assert_eq!(tokens[0].raw_args, Some("1,2"));
/// assert_eq!(tokens[0].span, 2..10);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from a regular expression string.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is invalid or has no capture
    /// group for the token name.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::from_regex(Regex::new(pattern)?)
    }

    /// Wrap an already compiled expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression has no capture group for the
    /// token name.
    pub fn from_regex(regex: Regex) -> Result<Self, PatternError> {
        // Group 0 is the whole match
        if regex.captures_len() < 2 {
            return Err(PatternError::MissingNameGroup {
                pattern: regex.as_str().to_owned(),
            });
        }
        Ok(Self { regex })
    }

    /// The `{{ name, args }}` syntax.
    #[must_use]
    pub fn expressions() -> Self {
        Self {
            regex: EXPRESSION_REGEX.clone(),
        }
    }

    /// The `@@name(args)` syntax.
    #[must_use]
    pub fn nano_blocks() -> Self {
        Self {
            regex: NANO_BLOCK_REGEX.clone(),
        }
    }

    /// Source of the underlying expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find all tokens in `text`, left to right, non-overlapping.
    ///
    /// Matches where the name group did not participate are not tokens and
    /// are skipped. Returns an empty vector when nothing matches.
    #[must_use]
    pub fn find_tokens<'t>(&self, text: &'t str) -> Vec<TokenMatch<'t>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(TokenMatch {
                    name: name.as_str(),
                    raw_args: caps.get(2).map(|args| args.as_str()),
                    span: whole.range(),
                })
            })
            .collect()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::expressions()
    }
}
