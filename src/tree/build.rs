use super::tree::Tree;
use crate::constants::{LARGE_TREE_DEPTH, MAX_TREE_DEPTH};
use crate::data::{FeatureSet, Record};
use crate::errors::TriageError;
use crate::histogram::LabelHistogram;
use hashbrown::HashMap;
use log::warn;

impl Tree {
    /// Build a diagnosis tree from labeled records.
    ///
    /// The tree is complete: the question at depth `i` is `questions[i]`, and
    /// it has `2^questions.len()` leaves. Each record is routed down the tree
    /// (observed feature goes to the positive child) and each leaf takes the
    /// majority label of the records that reached it, or no label when no
    /// record did. On equal counts, the label seen first in `records` wins.
    ///
    /// * `records` - Training records.
    /// * `questions` - Ordered feature identifiers, one per level.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_TREE_DEPTH`] questions, see
    /// [`Tree::try_fit`] for a fallible version.
    pub fn fit<S: AsRef<str>>(records: &[Record], questions: &[S]) -> Tree {
        match Tree::try_fit(records, questions) {
            Ok(tree) => tree,
            Err(e) => panic!("{}", e),
        }
    }

    /// Build a diagnosis tree like [`Tree::fit`], failing with
    /// [`TriageError::InvalidDepth`] when the complete tree over `questions`
    /// has more nodes than a `usize` can count.
    pub fn try_fit<S: AsRef<str>>(records: &[Record], questions: &[S]) -> Result<Tree, TriageError> {
        if questions.is_empty() {
            let hist: LabelHistogram<&str> = records.iter().map(|r| r.label.as_str()).collect();
            return Ok(Tree::from_leaf(hist.majority().map(|l| l.to_string())));
        }
        if questions.len() > MAX_TREE_DEPTH {
            return Err(TriageError::InvalidDepth(questions.len(), MAX_TREE_DEPTH));
        }
        if questions.len() > LARGE_TREE_DEPTH {
            warn!(
                "Building a complete tree of depth {}, this allocates {} leaves.",
                questions.len(),
                1_u128 << questions.len()
            );
        }

        let mut tree = Tree::grow_complete(questions);

        let mut leaf_labels: HashMap<usize, LabelHistogram<&str>> = HashMap::new();
        for record in records {
            let leaf = tree.leaf_for(record);
            leaf_labels.entry(leaf).or_default().add(record.label.as_str());
        }

        for idx in tree.leaves() {
            tree.nodes[idx].data = leaf_labels
                .get(&idx)
                .and_then(|hist| hist.majority())
                .map(|l| l.to_string());
        }
        Ok(tree)
    }

    /// Complete tree over `questions` with unlabeled leaves.
    /// Levels are pushed deepest first so children sit below their parents.
    /// `questions` holds at most `MAX_TREE_DEPTH` entries.
    fn grow_complete<S: AsRef<str>>(questions: &[S]) -> Tree {
        let n_leaves = 1_usize << questions.len();
        let mut tree = Tree::with_capacity(2 * n_leaves - 1);
        let mut level: Vec<usize> = (0..n_leaves).map(|_| tree.push_leaf(None)).collect();
        for question in questions.iter().rev() {
            level = level
                .chunks(2)
                .map(|pair| tree.push_question(question.as_ref(), pair[0], pair[1]))
                .collect();
        }
        tree.root = level[0];
        tree
    }

    /// Index of the leaf a feature set lands on in a complete tree.
    fn leaf_for<F: FeatureSet + ?Sized>(&self, features: &F) -> usize {
        let mut idx = self.root;
        loop {
            let node = &self.nodes[idx];
            let answer = node.data_str().map_or(false, |q| features.has_feature(q));
            match node.get_child_idx(answer) {
                Some(child) => idx = child,
                None => return idx,
            }
        }
    }
}

/// Build a diagnosis tree, see [`Tree::fit`].
pub fn build_tree<S: AsRef<str>>(records: &[Record], questions: &[S]) -> Tree {
    Tree::fit(records, questions)
}
