//! Element/text node tree for in-place token expansion.
//!
//! This crate provides the [`TreeNode`] trait, which is the only surface the
//! `inplace` engine needs from a host document, and [`Node`], a small
//! reference implementation built on shared `Rc` handles.
//!
//! # Example
//!
//! ```
//! use inplace_tree::Node;
//!
//! let root = Node::parse_fragment("<div>Hello <b>world</b></div>").unwrap();
//! assert_eq!(root.tag().as_deref(), Some("div"));
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.inner_html(), "Hello <b>world</b>");
//! ```

mod error;
mod host;
mod node;
mod parser;
mod serializer;

pub use error::ParseError;
pub use host::TreeNode;
pub use node::Node;
