//! In-place inline token expansion over element/text node trees.
//!
//! The [`Engine`] scans every text node under a root for tokens such as
//! `{{ name }}` or `{{ name, args }}`, looks each name up in its handler
//! registry (case-insensitively), and replaces the token with whatever the
//! handler returns: an element subtree, literal text, or nothing. Literal
//! text around tokens is kept, in order.
//!
//! # Architecture
//!
//! - [`collect_text_nodes`]: pre-order walk collecting text nodes
//! - [`Pattern`]: regular expression with a name group and an optional
//!   argument group
//! - [`HandlerRegistry`]: lowercased name to [`Handler`]
//! - [`Engine`]: builds the ordered replacement list for each text node and
//!   splices it into the parent in one step
//!
//! The host tree is reached only through [`TreeNode`]; [`Node`] is the
//! reference implementation.
//!
//! # Example
//!
//! ```
//! use inplace::{Engine, Node, Rendered};
//!
//! let root = Node::parse_fragment("<div>text1 {{p1, arg1, arg2}} text2</div>").unwrap();
//!
//! let mut engine: Engine<Node> = Engine::new();
//! engine.register("p1", |ctx| {
//!     let span = Node::new_element("span").with_child(Node::new_text(ctx.args_or_default()));
//!     Ok(Rendered::fragment(span))
//! });
//! engine.render(&root).unwrap();
//!
//! assert_eq!(
//!     root.inner_html(),
//!     r#"text1 <span class="p1">arg1, arg2</span> text2"#
//! );
//! ```
//!
//! Unknown names are not errors: the token is dropped, a `tracing` warning
//! is emitted, and the engine records a [`Warning`].

mod collector;
mod config;
mod context;
mod engine;
mod error;
mod handler;
mod output;
mod pattern;
mod registry;

pub use collector::collect_text_nodes;
pub use config::{EngineConfig, Preset};
pub use context::RenderContext;
pub use engine::Engine;
pub use error::{ConfigError, HandlerError, PatternError, RenderError, Warning};
pub use handler::Handler;
pub use inplace_tree::{Node, TreeNode};
pub use output::Rendered;
pub use pattern::{EXPRESSION_PATTERN, NANO_BLOCK_PATTERN, Pattern, TokenMatch};
pub use registry::HandlerRegistry;
