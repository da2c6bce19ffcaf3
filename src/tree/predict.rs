use super::tree::Tree;
use crate::data::FeatureSet;
use rayon::prelude::*;

impl Tree {
    /// Classify one set of observed features.
    ///
    /// Walks from the root, taking the positive child when the node's question
    /// is in `features` and the negative child otherwise. If the child to take
    /// is missing (a partial node), the data of the current node is returned
    /// instead. The walk holds no state between calls.
    pub fn diagnose<F: FeatureSet + ?Sized>(&self, features: &F) -> Option<&str> {
        let mut node = self.root_node();
        loop {
            if node.is_leaf() {
                return node.data_str();
            }
            let answer = node.data_str().map_or(false, |q| features.has_feature(q));
            match node.get_child_idx(answer) {
                Some(child) => node = &self.nodes[child],
                None => return node.data_str(),
            }
        }
    }

    /// Classify many feature sets.
    ///
    /// * `features` - One feature set per observation.
    /// * `parallel` - Classify on the rayon global pool.
    pub fn predict<F: FeatureSet + Sync>(&self, features: &[F], parallel: bool) -> Vec<Option<&str>> {
        if parallel {
            features.par_iter().map(|f| self.diagnose(f)).collect()
        } else {
            features.iter().map(|f| self.diagnose(f)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Record;
    use crate::tree::tree::Tree;
    use std::collections::HashSet;

    fn two_question_tree() -> Tree {
        let records = vec![
            Record::new("flu", ["fever", "cough"]),
            Record::new("meningitis", ["fever"]),
            Record::new("cold", ["cough"]),
            Record::new("healthy", Vec::<String>::new()),
        ];
        Tree::fit(&records, &["fever", "cough"])
    }

    #[test]
    fn test_diagnose() {
        let tree = two_question_tree();
        assert_eq!(tree.diagnose(&["fever", "cough"]), Some("flu"));
        assert_eq!(tree.diagnose(&["cough", "fever", "rash"]), Some("flu"));
        assert_eq!(tree.diagnose(&["fever"]), Some("meningitis"));
        assert_eq!(tree.diagnose(&["cough"]), Some("cold"));
        assert_eq!(tree.diagnose(&Vec::<String>::new()), Some("healthy"));
        let set: HashSet<String> = ["fever".to_string()].into_iter().collect();
        assert_eq!(tree.diagnose(&set), Some("meningitis"));
    }

    #[test]
    fn test_diagnose_is_repeatable() {
        let tree = two_question_tree();
        let before = tree.clone();
        for _ in 0..3 {
            assert_eq!(tree.diagnose(&["fever"]), Some("meningitis"));
            assert_eq!(tree.diagnose(&["cough"]), Some("cold"));
        }
        assert_eq!(tree, before);
        assert_eq!(tree.nodes, before.nodes);
    }

    #[test]
    fn test_diagnose_partial_node() {
        let mut tree = Tree::from_leaf(Some("flu".to_string()));
        let root = tree.add_node(Some("fever".to_string()), Some(0), None).unwrap();
        tree.set_root(root).unwrap();
        assert_eq!(tree.diagnose(&["fever"]), Some("flu"));
        // The negative branch is missing, so the question itself comes back.
        assert_eq!(tree.diagnose(&["cough"]), Some("fever"));
    }

    #[test]
    fn test_diagnose_single_leaf() {
        assert_eq!(Tree::new().diagnose(&["fever"]), None);
        assert_eq!(Tree::from_leaf(Some("cold".to_string())).diagnose(&["fever"]), Some("cold"));
    }

    #[test]
    fn test_predict() {
        let tree = two_question_tree();
        let observations = vec![vec!["fever", "cough"], vec![], vec!["cough"]];
        let expected = vec![Some("flu"), Some("healthy"), Some("cold")];
        assert_eq!(tree.predict(&observations, false), expected);
        assert_eq!(tree.predict(&observations, true), expected);
    }
}
