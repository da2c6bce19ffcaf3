use crate::constants::DISPLAY_INDENT;
use crate::errors::TriageError;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A binary diagnosis tree stored as an arena of nodes addressed by index.
///
/// The arena always satisfies two rules: a child has a lower index than its
/// parent, and no node is linked by more than one parent. Walking the
/// reachable indices in ascending order therefore visits every child before
/// its parent, and every traversal terminates.
/// Cells that are no longer reachable from `root` (for example after
/// minimization) stay in the arena until [`Tree::compact`] is called.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub root: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// A tree made of a single leaf with no label.
    pub fn new() -> Self {
        Tree::from_leaf(None)
    }

    pub fn from_leaf(label: Option<String>) -> Self {
        Tree {
            nodes: vec![Node::leaf(0, label)],
            root: 0,
        }
    }

    /// An empty arena, the caller must push at least one node and set the root.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Vec::with_capacity(capacity),
            root: 0,
        }
    }

    pub(crate) fn push_leaf(&mut self, label: Option<String>) -> usize {
        let num = self.nodes.len();
        self.nodes.push(Node::leaf(num, label));
        num
    }

    pub(crate) fn push_question(&mut self, question: &str, positive_child: usize, negative_child: usize) -> usize {
        let num = self.nodes.len();
        self.nodes
            .push(Node::question(num, question.to_string(), positive_child, negative_child));
        num
    }

    /// Add a node to the arena and return its index.
    ///
    /// Children must already be in the arena and must not be linked by another
    /// node. Nodes dropped by minimization hold no links, so the branches they
    /// dropped can be attached again before [`Tree::compact`] removes them. Passing exactly one child creates a partial node, which the
    /// classifier tolerates and minimization resolves.
    /// * `data` - Question for internal nodes, label for leaves.
    /// * `positive_child` - Child followed when the question's feature is observed.
    /// * `negative_child` - Child followed otherwise.
    pub fn add_node(
        &mut self,
        data: Option<String>,
        positive_child: Option<usize>,
        negative_child: Option<usize>,
    ) -> Result<usize, TriageError> {
        if positive_child.is_some() && positive_child == negative_child {
            return Err(TriageError::TypeMismatch(
                "a node cannot use the same child on both branches".to_string(),
            ));
        }
        for child in [positive_child, negative_child].into_iter().flatten() {
            if child >= self.nodes.len() {
                return Err(TriageError::TypeMismatch(format!("node {} does not exist", child)));
            }
            if self.parent_of(child).is_some() {
                return Err(TriageError::TypeMismatch(format!("node {} already has a parent", child)));
            }
        }
        let num = self.nodes.len();
        self.nodes.push(Node {
            num,
            data,
            positive_child,
            negative_child,
        });
        Ok(num)
    }

    /// Make the node at `idx` the root of the tree.
    pub fn set_root(&mut self, idx: usize) -> Result<(), TriageError> {
        if idx >= self.nodes.len() {
            return Err(TriageError::TypeMismatch(format!("node {} does not exist", idx)));
        }
        self.root = idx;
        Ok(())
    }

    fn parent_of(&self, idx: usize) -> Option<usize> {
        self.nodes
            .iter()
            .find(|n| n.positive_child == Some(idx) || n.negative_child == Some(idx))
            .map(|n| n.num)
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Structural identity of two subtrees of this tree, see [`identical_subtrees`].
    pub fn identical(&self, a: Option<usize>, b: Option<usize>) -> bool {
        identical_subtrees(self, a, self, b)
    }

    /// Indices reachable from the root, in pre-order, positive branch first.
    pub fn reachable(&self) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            let node = &self.nodes[idx];
            stack.extend(node.negative_child);
            stack.extend(node.positive_child);
        }
        order
    }

    /// Reachable indices with every child listed before its parent.
    pub(crate) fn bottom_up(&self) -> Vec<usize> {
        let mut order = self.reachable();
        order.sort_unstable();
        order
    }

    /// Leaf indices from left (positive) to right (negative).
    pub fn leaves(&self) -> Vec<usize> {
        self.reachable()
            .into_iter()
            .filter(|&idx| self.nodes[idx].is_leaf())
            .collect()
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.reachable().len()
    }

    /// Always `false`, a tree always holds at least its root. Provided
    /// alongside [`Tree::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn n_leaves(&self) -> usize {
        self.leaves().len()
    }

    /// Number of decisions on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[idx];
            for child in [node.positive_child, node.negative_child].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Replay a sequence of answers from the root, `true` taking the positive branch.
    /// Returns `None` if the path leaves the tree.
    pub fn follow(&self, path: &[bool]) -> Option<&Node> {
        let mut node = self.root_node();
        for &answer in path {
            node = &self.nodes[node.get_child_idx(answer)?];
        }
        Some(node)
    }

    /// Drop every arena cell that is not reachable from the root and renumber
    /// the rest, keeping children below their parents.
    pub fn compact(&mut self) {
        let order = self.bottom_up();
        if order.len() == self.nodes.len() {
            return;
        }
        let mut new_idx = vec![usize::MAX; self.nodes.len()];
        for (i, &old) in order.iter().enumerate() {
            new_idx[old] = i;
        }
        let nodes = order
            .iter()
            .enumerate()
            .map(|(i, &old)| {
                let node = &self.nodes[old];
                Node {
                    num: i,
                    data: node.data.clone(),
                    positive_child: node.positive_child.map(|c| new_idx[c]),
                    negative_child: node.negative_child.map(|c| new_idx[c]),
                }
            })
            .collect();
        self.root = new_idx[self.root];
        self.nodes = nodes;
    }
}

/// Structural identity of two subtrees, possibly from different trees.
///
/// Two absent subtrees are identical. Two present subtrees are identical when
/// their data is equal (a missing label equals a missing label) and both pairs
/// of children are identical. A present subtree is never identical to an
/// absent one.
pub fn identical_subtrees(lhs: &Tree, a: Option<usize>, rhs: &Tree, b: Option<usize>) -> bool {
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                let (x, y) = (&lhs.nodes[a], &rhs.nodes[b]);
                if x.data != y.data {
                    return false;
                }
                stack.push((x.positive_child, y.positive_child));
                stack.push((x.negative_child, y.negative_child));
            }
            _ => return false,
        }
    }
    true
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        identical_subtrees(self, Some(self.root), other, Some(other.root))
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(usize, usize)> = vec![(self.root, 0)];
        let mut r = String::new();
        while let Some((idx, depth)) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += format!("{}{}\n", DISPLAY_INDENT.repeat(depth), node).as_str();
            if let Some(neg) = node.negative_child {
                print_buffer.push((neg, depth + 1));
            }
            if let Some(pos) = node.positive_child {
                print_buffer.push((pos, depth + 1));
            }
        }
        write!(f, "{}", r)
    }
}
