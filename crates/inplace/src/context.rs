//! Per-token render context.

/// Context passed to a handler for one token.
///
/// Built by the [`Engine`](crate::Engine) for every match. `parent` and
/// `root` are live handles into the tree being rendered, so handlers may
/// inspect or mutate them (set attributes, add classes).
///
/// # Example
///
/// ```
/// use inplace::{Node, RenderContext};
///
/// let root = Node::parse_fragment("<div><p>x</p></div>").unwrap();
/// let parent = root.first_child().unwrap();
///
/// let ctx: RenderContext<'_, Node> = RenderContext {
///     name: "Greet",
///     parent: &parent,
///     root: &root,
///     context: None,
///     args: Some("world"),
/// };
///
/// assert_eq!(ctx.args_or_default(), "world");
/// ```
#[derive(Debug)]
pub struct RenderContext<'a, N, C = ()> {
    /// Token name as written in the text (original case).
    pub name: &'a str,
    /// Element that contained the token's text node.
    pub parent: &'a N,
    /// Root passed to the render call.
    pub root: &'a N,
    /// Caller-supplied context, if any.
    pub context: Option<&'a C>,
    /// Argument string (trimmed unless disabled), or `None` when the token
    /// had no argument clause at all.
    pub args: Option<&'a str>,
}

impl<N, C> RenderContext<'_, N, C> {
    /// The argument string, or `""` when absent.
    #[must_use]
    pub fn args_or_default(&self) -> &str {
        self.args.unwrap_or_default()
    }
}
