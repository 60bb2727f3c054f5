//! Host tree abstraction.

/// Operations the expansion engine needs from a host document tree.
///
/// Implementors are cheap, cloneable handles: cloning a handle must not
/// clone the underlying node, and two clones must refer to the same node.
///
/// The engine only ever:
///
/// - walks children depth-first ([`child_nodes`](Self::child_nodes)),
/// - reads text node content ([`text_content`](Self::text_content)),
/// - replaces one child with an ordered list of nodes
///   ([`splice_child`](Self::splice_child)),
/// - tags element nodes with classes ([`add_class`](Self::add_class)).
pub trait TreeNode: Clone {
    /// Child nodes in document order. Empty for text nodes.
    fn child_nodes(&self) -> Vec<Self>;

    /// Text content when this is a text node, `None` for elements.
    fn text_content(&self) -> Option<String>;

    /// Parent node, or `None` when detached or at the top of the tree.
    fn parent_node(&self) -> Option<Self>;

    /// Create a new, detached text node belonging to the same document.
    fn create_text(&self, text: &str) -> Self;

    /// Replace the child `old` of this node with `replacements`, in order,
    /// at `old`'s position.
    ///
    /// Replacement nodes already attached elsewhere are moved, and a node
    /// listed twice ends up at its last position. Returns `false` (and
    /// changes nothing) when `old` is not a child of `self`.
    fn splice_child(&self, old: &Self, replacements: Vec<Self>) -> bool;

    /// Add a class to an element node. No-op for text nodes and for
    /// classes the element already carries.
    fn add_class(&self, class: &str);
}
