//! Reference tree built on shared node handles.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::host::TreeNode;
use crate::{ParseError, parser, serializer};

/// Node payload.
#[derive(Debug)]
pub(crate) enum NodeKind {
    Element {
        tag: String,
        /// Attributes in insertion order.
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    parent: Weak<RefCell<NodeData>>,
    pub(crate) children: Vec<Node>,
}

/// Handle to an element or text node.
///
/// Cloning a `Node` clones the handle, not the node: all clones observe the
/// same node and its mutations. Parents are held weakly, so a subtree stays
/// alive only while some handle to its top is alive.
///
/// # Example
///
/// ```
/// use inplace_tree::Node;
///
/// let list = Node::new_element("ul")
///     .with_attr("id", "menu")
///     .with_child(Node::new_element("li").with_child(Node::new_text("one")));
///
/// assert_eq!(list.outer_html(), r#"<ul id="menu"><li>one</li></ul>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    /// Create a detached element node.
    #[must_use]
    pub fn new_element(tag: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Element {
            tag: tag.into(),
            attrs: Vec::new(),
        })
    }

    /// Create a detached text node.
    #[must_use]
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Text(text.into()))
    }

    fn from_kind(kind: NodeKind) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            kind,
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    /// Parse an XHTML fragment and return its first top-level node.
    ///
    /// Entity references (`&amp;`, `&#233;`, ...) are decoded and adjacent
    /// text is merged into a single text node.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment is not well-formed or contains no
    /// nodes at all.
    pub fn parse_fragment(input: &str) -> Result<Self, ParseError> {
        parser::parse_nodes(input)?
            .into_iter()
            .next()
            .ok_or(ParseError::Empty)
    }

    pub(crate) fn data(&self) -> Ref<'_, NodeData> {
        self.0.borrow()
    }

    /// Whether both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Element { .. })
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Text(_))
    }

    /// Tag name for elements, `None` for text nodes.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    /// Content of a text node, `None` for elements.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Element { .. } => None,
        }
    }

    /// Replace the content of a text node. No-op for elements.
    pub fn set_text(&self, value: impl Into<String>) {
        if let NodeKind::Text(text) = &mut self.0.borrow_mut().kind {
            *text = value.into();
        }
    }

    /// Concatenated content of all descendant text nodes, in document order.
    #[must_use]
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Attribute value of an element.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            NodeKind::Text(_) => None,
        }
    }

    /// Set an attribute on an element, keeping its original position when
    /// it already exists. No-op for text nodes.
    pub fn set_attr(&self, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attrs, .. } = &mut self.0.borrow_mut().kind {
            let value = value.into();
            if let Some(slot) = attrs.iter_mut().find(|(key, _)| key == name) {
                slot.1 = value;
            } else {
                attrs.push((name.to_owned(), value));
            }
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    #[must_use]
    pub fn with_attr(self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Classes from the `class` attribute, in order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|class| class.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Append `class` to the element's class list unless already present.
    pub fn add_class(&self, class: &str) {
        let class = class.trim();
        if class.is_empty() || !self.is_element() {
            return;
        }
        let mut classes = self.classes();
        if classes.iter().any(|existing| existing == class) {
            return;
        }
        classes.push(class.to_owned());
        self.set_attr("class", classes.join(" "));
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    #[must_use]
    pub fn first_child(&self) -> Option<Node> {
        self.0.borrow().children.first().cloned()
    }

    #[must_use]
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Append `child` as the last child of this element, moving it out of
    /// its current parent first. No-op for text nodes.
    ///
    /// Appending an ancestor of `self` creates a cycle and is not detected.
    pub fn append_child(&self, child: &Node) {
        if !self.is_element() || self.ptr_eq(child) {
            return;
        }
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Builder form of [`append_child`](Self::append_child).
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn with_child(self, child: Node) -> Self {
        self.append_child(&child);
        self
    }

    /// Remove this node from its parent. No-op when already detached.
    pub fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(&child.0, &self.0));
            self.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Replace this node with `replacements` in its parent.
    ///
    /// Returns `false` when the node has no parent.
    pub fn replace_with(&self, replacements: Vec<Node>) -> bool {
        match self.parent() {
            Some(parent) => parent.replace_child(self, replacements),
            None => false,
        }
    }

    /// Replace child `old` with `replacements`, in order, at `old`'s position.
    ///
    /// Replacements attached elsewhere are moved here first. A node listed
    /// more than once lands at its last position. Returns `false` when `old`
    /// is not a child of this node.
    pub fn replace_child(&self, old: &Node, replacements: Vec<Node>) -> bool {
        if self.child_index(old).is_none() {
            return false;
        }

        let mut unique: Vec<Node> = Vec::with_capacity(replacements.len());
        for node in replacements.into_iter().rev() {
            let seen = unique.iter().any(|kept| kept.ptr_eq(&node));
            if seen || node.ptr_eq(self) || node.ptr_eq(old) {
                continue;
            }
            unique.push(node);
        }
        unique.reverse();
        let replacements = unique;
        for node in &replacements {
            node.detach();
        }

        // Moving a sibling may have shifted `old`
        let Some(index) = self.child_index(old) else {
            return false;
        };
        for node in &replacements {
            node.0.borrow_mut().parent = Rc::downgrade(&self.0);
        }

        let removed: Vec<Node> = self
            .0
            .borrow_mut()
            .children
            .splice(index..=index, replacements)
            .collect();
        for node in removed {
            node.0.borrow_mut().parent = Weak::new();
        }
        true
    }

    fn child_index(&self, child: &Node) -> Option<usize> {
        self.0
            .borrow()
            .children
            .iter()
            .position(|candidate| candidate.ptr_eq(child))
    }

    /// Serialized children, like the DOM `innerHTML` property.
    #[must_use]
    pub fn inner_html(&self) -> String {
        serializer::inner_html(self)
    }

    /// Serialized node including its own tag, like the DOM `outerHTML` property.
    #[must_use]
    pub fn outer_html(&self) -> String {
        serializer::outer_html(self)
    }
}

fn collect_text(node: &Node, out: &mut String) {
    let data = node.data();
    if let NodeKind::Text(text) = &data.kind {
        out.push_str(text);
    }
    for child in &data.children {
        collect_text(child, out);
    }
}

impl TreeNode for Node {
    fn child_nodes(&self) -> Vec<Self> {
        self.children()
    }

    fn text_content(&self) -> Option<String> {
        self.text()
    }

    fn parent_node(&self) -> Option<Self> {
        self.parent()
    }

    fn create_text(&self, text: &str) -> Self {
        Node::new_text(text)
    }

    fn splice_child(&self, old: &Self, replacements: Vec<Self>) -> bool {
        self.replace_child(old, replacements)
    }

    fn add_class(&self, class: &str) {
        Node::add_class(self, class);
    }
}
