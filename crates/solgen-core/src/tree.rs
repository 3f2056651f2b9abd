//! Generic path tree
//!
//! Nodes are keyed by `/`-separated paths. Adding `src/gfx/draw.c` creates the
//! branches `src` and `src/gfx` on the way down, reusing any that already
//! exist, and returns the `draw.c` leaf.

/// A rooted tree of named nodes with an optional payload each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: TreeNode<T>,
}

/// One node of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    name: String,
    path: String,
    children: Vec<TreeNode<T>>,
    value: Option<T>,
}

/// Callbacks for [`Tree::traverse`].
///
/// Depth starts at zero for the children of the root.
pub trait TreeVisitor<T> {
    /// Called for a node with children, before any of them are visited.
    fn on_branch(&mut self, _node: &TreeNode<T>, _depth: usize) {}

    /// Called for a node without children.
    fn on_leaf(&mut self, _node: &TreeNode<T>, _depth: usize) {}
}

impl<T> Tree<T> {
    /// Create an empty tree whose root carries `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: TreeNode::new(root_name.into(), String::new()),
        }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// Get or create the node at `key`, creating missing ancestors.
    ///
    /// Empty and `.` segments are skipped, so an empty key addresses the
    /// root itself.
    pub fn add(&mut self, key: &str) -> &mut TreeNode<T> {
        let mut node = &mut self.root;
        for segment in segments(key) {
            let index = match node.children.iter().position(|c| c.name == segment) {
                Some(index) => index,
                None => {
                    let path = if node.path.is_empty() {
                        segment.to_string()
                    } else {
                        format!("{}/{segment}", node.path)
                    };
                    node.children.push(TreeNode::new(segment.to_string(), path));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        node
    }

    /// Look up the node at `key` without creating anything.
    pub fn get(&self, key: &str) -> Option<&TreeNode<T>> {
        segments(key).try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// Sort every sibling list by name.
    ///
    /// The sort is stable and compares bytes, so `B` comes before `a`.
    pub fn sort(&mut self) {
        self.root.sort_recursive();
    }

    /// Walk the tree depth-first in child order, skipping the root.
    pub fn traverse<V: TreeVisitor<T>>(&self, visitor: &mut V) {
        for child in &self.root.children {
            child.visit(visitor, 0);
        }
    }

    /// All leaves in depth-first order.
    pub fn leaves(&self) -> Vec<&TreeNode<T>> {
        let mut leaves = Vec::new();
        for child in &self.root.children {
            child.collect_leaves(&mut leaves);
        }
        leaves
    }
}

impl<T> TreeNode<T> {
    fn new(name: String, path: String) -> Self {
        Self {
            name,
            path,
            children: Vec::new(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full key from the root; empty for the root itself.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Attach a payload, returning the one it replaces.
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode<T>> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn sort_recursive(&mut self) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.sort_recursive();
        }
    }

    fn collect_leaves<'t>(&'t self, leaves: &mut Vec<&'t TreeNode<T>>) {
        if self.is_leaf() {
            leaves.push(self);
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }

    fn visit<V: TreeVisitor<T>>(&self, visitor: &mut V, depth: usize) {
        if self.is_leaf() {
            visitor.on_leaf(self, depth);
            return;
        }
        visitor.on_branch(self, depth);
        for child in &self.children {
            child.visit(visitor, depth + 1);
        }
    }
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('/').filter(|s| !s.is_empty() && *s != ".")
}
