//! Text node collection.

use inplace_tree::TreeNode;

/// Collect every text node under `root` in document order.
///
/// Pre-order depth-first: a node's children are visited before its next
/// sibling. `root` itself is included only when it is a text node.
pub fn collect_text_nodes<N: TreeNode>(root: &N) -> Vec<N> {
    if root.text_content().is_some() {
        return vec![root.clone()];
    }

    let mut found = Vec::new();
    let mut pending: Vec<N> = root.child_nodes().into_iter().rev().collect();
    while let Some(node) = pending.pop() {
        if node.text_content().is_some() {
            found.push(node);
        } else {
            pending.extend(node.child_nodes().into_iter().rev());
        }
    }
    found
}
