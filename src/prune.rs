//! Prune
//!
//! In-place minimization of a diagnosis tree. Nodes are never copied, only
//! child links (and the root index) are re-pointed at existing descendants,
//! so the result is still a strict tree inside the same arena.
use crate::tree::Tree;
use log::{debug, warn};

impl Tree {
    /// Remove every question whose two branches are structurally identical,
    /// letting its parent point straight at the positive branch. A partial
    /// node (only one child) is replaced by its only child.
    ///
    /// Children are rewritten before their parents, so questions whose
    /// branches only become identical after a collapse lower down are removed
    /// in the same call and a second call finds nothing to do.
    /// Returns the number of questions removed. Unlinked cells stay in the
    /// arena until [`Tree::compact`].
    pub fn collapse_duplicates(&mut self) -> usize {
        self.rewrite_bottom_up(|tree, pos, neg| {
            if tree.identical(Some(pos), Some(neg)) {
                Some(pos)
            } else {
                None
            }
        })
    }

    /// Remove every question that has a branch ending in a leaf without a
    /// label, letting its parent point at the other branch. Questions whose
    /// both branches are unlabeled leaves are left to
    /// [`Tree::collapse_duplicates`].
    /// Returns the number of questions removed.
    pub fn remove_empty_leaves(&mut self) -> usize {
        self.rewrite_bottom_up(|tree, pos, neg| {
            match (tree.is_empty_leaf(pos), tree.is_empty_leaf(neg)) {
                (true, false) => Some(neg),
                (false, true) => Some(pos),
                _ => None,
            }
        })
    }

    /// Minimize the tree.
    ///
    /// Always removes questions with identical branches. With `remove_empty`,
    /// also removes questions leading to unlabeled leaves, repeating both
    /// passes until nothing changes. Afterwards the only unlabeled leaf that
    /// can remain is a root leaf, and every diagnosis that used to produce a
    /// label produces the same label.
    pub fn minimize(&mut self, remove_empty: bool) {
        let old_n_nodes = self.len();
        self.collapse_duplicates();
        if remove_empty {
            // Every productive round unlinks at least one reachable node.
            let round_limit = old_n_nodes;
            let mut rounds = 0;
            while self.remove_empty_leaves() > 0 {
                self.collapse_duplicates();
                rounds += 1;
                if rounds > round_limit {
                    warn!("Stopped removing empty leaves after {} rounds.", rounds);
                    break;
                }
            }
        }
        self.compact();
        debug!("minimize: n_nodes: {} -> {}", old_n_nodes, self.nodes.len());
    }

    fn is_empty_leaf(&self, idx: usize) -> bool {
        let node = &self.nodes[idx];
        node.is_leaf() && node.data.is_none()
    }

    /// Walk reachable nodes children first. For each question, `replace_with`
    /// may name one of its (already rewritten) children to stand in for it.
    /// A replaced node loses its links, so the branch it drops becomes a
    /// detached tree in the arena.
    fn rewrite_bottom_up<F>(&mut self, replace_with: F) -> usize
    where
        F: Fn(&Tree, usize, usize) -> Option<usize>,
    {
        let mut replacement: Vec<usize> = (0..self.nodes.len()).collect();
        let mut n_removed = 0;
        for idx in self.bottom_up() {
            let pos = self.nodes[idx].positive_child.map(|c| replacement[c]);
            let neg = self.nodes[idx].negative_child.map(|c| replacement[c]);
            self.nodes[idx].positive_child = pos;
            self.nodes[idx].negative_child = neg;
            let stand_in = match (pos, neg) {
                (Some(p), Some(n)) => replace_with(self, p, n),
                (Some(c), None) | (None, Some(c)) => Some(c),
                (None, None) => None,
            };
            if let Some(c) = stand_in {
                replacement[idx] = c;
                // Unlinked cells must not count as parents.
                self.nodes[idx].positive_child = None;
                self.nodes[idx].negative_child = None;
                n_removed += 1;
            }
        }
        self.root = replacement[self.root];
        n_removed
    }
}
