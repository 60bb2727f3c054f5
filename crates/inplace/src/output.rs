//! Handler output types.

/// Content a handler produces for one token.
///
/// - [`Fragment`](Self::Fragment): an element subtree, tagged with classes and
///   inserted where the token was
/// - [`Text`](Self::Text): literal text, inserted as a new text node
/// - [`Empty`](Self::Empty): nothing is inserted
///
/// # Example
///
/// ```
/// use inplace::{Node, Rendered};
///
/// let output: Rendered<Node> = Rendered::text("hi");
/// assert!(matches!(output, Rendered::Text(_)));
///
/// let output: Rendered<Node> = Rendered::fragment(Node::new_element("span"));
/// assert!(matches!(output, Rendered::Fragment(_)));
///
/// let output: Rendered<Node> = None::<String>.into();
/// assert!(output.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<N> {
    /// Element subtree. Should be freshly built; an attached node is moved.
    Fragment(N),
    /// Literal text.
    Text(String),
    /// Render nothing.
    Empty,
}

impl<N> Rendered<N> {
    #[must_use]
    pub fn fragment(node: N) -> Self {
        Self::Fragment(node)
    }

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<N> From<String> for Rendered<N> {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<N> From<&str> for Rendered<N> {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl<N> From<Option<String>> for Rendered<N> {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Empty, Self::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let output: Rendered<()> = Rendered::text("hi");
        assert_eq!(output, Rendered::Text("hi".to_owned()));
    }

    #[test]
    fn test_from_str() {
        let output: Rendered<()> = "hi".into();
        assert_eq!(output, Rendered::Text("hi".to_owned()));
    }

    #[test]
    fn test_from_option() {
        let some: Rendered<()> = Some("x".to_owned()).into();
        let none: Rendered<()> = None.into();

        assert_eq!(some, Rendered::Text("x".to_owned()));
        assert!(none.is_empty());
    }

    #[test]
    fn test_fragment() {
        let output = Rendered::fragment(7);
        assert_eq!(output, Rendered::Fragment(7));
        assert!(!output.is_empty());
    }
}
