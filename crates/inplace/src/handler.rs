//! Token handler trait.

use crate::{HandlerError, RenderContext, Rendered};

/// Produces replacement content for a token.
///
/// Closures of the form `FnMut(&RenderContext) -> Result<Rendered, HandlerError>`
/// implement this trait, so most handlers never name it. Implement it
/// directly for handlers that carry configuration.
///
/// Handlers run synchronously, once per matching token, in document order.
/// Returning an error aborts the render pass.
///
/// # Example
///
/// ```
/// use inplace::{Handler, HandlerError, Node, RenderContext, Rendered};
///
/// struct Badge {
///     tag: &'static str,
/// }
///
/// impl Handler<Node> for Badge {
///     fn render(&mut self, ctx: &RenderContext<'_, Node>) -> Result<Rendered<Node>, HandlerError> {
///         let badge = Node::new_element(self.tag).with_child(Node::new_text(ctx.args_or_default()));
///         Ok(Rendered::fragment(badge))
///     }
/// }
/// ```
pub trait Handler<N, C = ()> {
    /// Render one token.
    fn render(&mut self, ctx: &RenderContext<'_, N, C>) -> Result<Rendered<N>, HandlerError>;
}

impl<N, C, F> Handler<N, C> for F
where
    F: FnMut(&RenderContext<'_, N, C>) -> Result<Rendered<N>, HandlerError>,
{
    fn render(&mut self, ctx: &RenderContext<'_, N, C>) -> Result<Rendered<N>, HandlerError> {
        self(ctx)
    }
}
