//! Token substitution engine.

use std::fmt;

use inplace_tree::TreeNode;

use crate::collector::collect_text_nodes;
use crate::config::{EngineConfig, Preset};
use crate::error::{ConfigError, HandlerError, RenderError, Warning};
use crate::pattern::{Pattern, TokenMatch};
use crate::registry::HandlerRegistry;
use crate::{Handler, RenderContext, Rendered};

/// Expands tokens in the text nodes of a tree, in place.
///
/// Each engine owns its pattern, handler registry and settings, so separate
/// engines never affect each other. `C` is the type of the optional
/// caller context handed to handlers.
///
/// # Example
///
/// ```
/// use inplace::{Engine, Node, Rendered};
///
/// let root = Node::parse_fragment("<p>say {{greet}} now</p>").unwrap();
///
/// let mut engine: Engine<Node> = Engine::new();
/// engine.register("greet", |_ctx| Ok(Rendered::text("hi")));
/// engine.render(&root).unwrap();
///
/// assert_eq!(root.inner_html(), "say hi now");
/// ```
pub struct Engine<N, C = ()> {
    pattern: Pattern,
    registry: HandlerRegistry<N, C>,
    marker: Option<String>,
    trim_args: bool,
    warnings: Vec<Warning>,
}

impl<N: TreeNode, C> Default for Engine<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TreeNode, C> Engine<N, C> {
    /// Create an engine with the [`Preset::Expressions`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_preset(Preset::Expressions)
    }

    /// Create an engine with a preset's pattern, marker and trimming.
    #[must_use]
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            pattern: preset.pattern(),
            registry: HandlerRegistry::new(),
            marker: preset.marker().map(str::to_owned),
            trim_args: preset.trim_args(),
            warnings: Vec::new(),
        }
    }

    /// Create an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured pattern override is invalid.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: config.resolve_pattern()?,
            registry: HandlerRegistry::new(),
            marker: config.resolve_marker(),
            trim_args: config.resolve_trim_args(),
            warnings: Vec::new(),
        })
    }

    /// Register a closure handler under `name` (case-insensitive), replacing
    /// any previous handler for that name.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&RenderContext<'_, N, C>) -> Result<Rendered<N>, HandlerError> + 'static,
    {
        self.registry.register(name, handler);
    }

    /// Register a [`Handler`] implementation under `name` (case-insensitive).
    pub fn register_handler<H>(&mut self, name: &str, handler: H)
    where
        H: Handler<N, C> + 'static,
    {
        self.registry.register(name, handler);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_handler<F>(mut self, name: &str, handler: F) -> Self
    where
        F: FnMut(&RenderContext<'_, N, C>) -> Result<Rendered<N>, HandlerError> + 'static,
    {
        self.register(name, handler);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry<N, C> {
        &self.registry
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Replace the pattern used by subsequent render calls.
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Set the class added to element fragments before the token name.
    /// A blank marker disables tagging.
    pub fn set_marker(&mut self, marker: Option<String>) {
        self.marker = marker
            .map(|marker| marker.trim().to_owned())
            .filter(|marker| !marker.is_empty());
    }

    #[must_use]
    pub fn trim_args(&self) -> bool {
        self.trim_args
    }

    /// Whether argument strings are trimmed before reaching handlers.
    pub fn set_trim_args(&mut self, trim_args: bool) {
        self.trim_args = trim_args;
    }

    /// Warnings recorded by the most recent render pass.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Take the recorded warnings, leaving the list empty.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Expand all tokens under `root` without a caller context.
    ///
    /// # Errors
    ///
    /// Returns the first handler error. Text nodes processed before the
    /// failure stay expanded.
    pub fn render(&mut self, root: &N) -> Result<(), RenderError> {
        self.render_pass(root, None)
    }

    /// Expand all tokens under `root`, handing `context` to every handler.
    ///
    /// # Errors
    ///
    /// Returns the first handler error. Text nodes processed before the
    /// failure stay expanded.
    pub fn render_with(&mut self, root: &N, context: &C) -> Result<(), RenderError> {
        self.render_pass(root, Some(context))
    }

    fn render_pass(&mut self, root: &N, context: Option<&C>) -> Result<(), RenderError> {
        self.warnings.clear();
        let text_nodes = collect_text_nodes(root);
        let mut replaced = 0;

        for node in &text_nodes {
            if self.substitute(node, root, context)? {
                replaced += 1;
            }
        }

        tracing::debug!(scanned = text_nodes.len(), replaced, "Render pass completed");
        Ok(())
    }

    /// Expand the tokens of one text node. Returns whether it was replaced.
    fn substitute(&mut self, node: &N, root: &N, context: Option<&C>) -> Result<bool, RenderError> {
        let Some(text) = node.text_content() else {
            return Ok(false);
        };
        let tokens = self.pattern.find_tokens(&text);
        if tokens.is_empty() {
            return Ok(false);
        }
        let Some(parent) = node.parent_node() else {
            tracing::debug!("Skipping detached text node");
            return Ok(false);
        };

        let mut fragments = Vec::with_capacity(tokens.len() * 2 + 1);
        let mut cursor = 0;
        for token in &tokens {
            let literal = &text[cursor..token.start()];
            if !literal.is_empty() {
                fragments.push(parent.create_text(literal));
            }
            if let Some(fragment) = self.expand(token, &parent, root, context)? {
                fragments.push(fragment);
            }
            cursor = token.end();
        }
        if cursor < text.len() {
            fragments.push(parent.create_text(&text[cursor..]));
        }

        tracing::trace!(tokens = tokens.len(), fragments = fragments.len(), "Splicing text node");
        if !parent.splice_child(node, fragments) {
            tracing::debug!("Text node moved during rendering, left unchanged");
            return Ok(false);
        }
        Ok(true)
    }

    /// Run the handler for one token and turn its output into a node.
    fn expand(
        &mut self,
        token: &TokenMatch<'_>,
        parent: &N,
        root: &N,
        context: Option<&C>,
    ) -> Result<Option<N>, RenderError> {
        let Some(handler) = self.registry.resolve(token.name) else {
            tracing::warn!(name = token.name, "Token not found");
            self.warnings.push(Warning::UnresolvedToken {
                name: token.name.to_owned(),
            });
            return Ok(None);
        };

        let args = token
            .raw_args
            .map(|raw| if self.trim_args { raw.trim() } else { raw });
        let ctx = RenderContext {
            name: token.name,
            parent,
            root,
            context,
            args,
        };
        let rendered = handler
            .render(&ctx)
            .map_err(|source| RenderError::Handler {
                name: token.name.to_owned(),
                source,
            })?;

        Ok(match rendered {
            Rendered::Fragment(fragment) => {
                if let Some(marker) = &self.marker {
                    fragment.add_class(marker);
                }
                fragment.add_class(token.name);
                Some(fragment)
            }
            Rendered::Text(text) => Some(parent.create_text(&text)),
            Rendered::Empty => None,
        })
    }
}

impl<N, C> fmt::Debug for Engine<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("pattern", &self.pattern.as_str())
            .field("handlers", &self.registry.names())
            .field("marker", &self.marker)
            .field("trim_args", &self.trim_args)
            .field("warnings", &self.warnings)
            .finish()
    }
}
