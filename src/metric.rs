//! Metric
//!
//! Evaluation of a diagnosis tree: accuracy over labeled records, the set of
//! labels a tree can produce, and the decision paths leading to a label.
use crate::data::Record;
use crate::errors::TriageError;
use crate::histogram::LabelHistogram;
use crate::tree::Tree;

/// Share of records whose diagnosis matches their label, in `[0, 1]`.
///
/// * `tree` - Tree used to diagnose each record.
/// * `records` - Labeled records, must not be empty.
pub fn accuracy(tree: &Tree, records: &[Record]) -> Result<f64, TriageError> {
    if records.is_empty() {
        return Err(TriageError::EmptyInput);
    }
    let correct = records
        .iter()
        .filter(|r| tree.diagnose(*r) == Some(r.label.as_str()))
        .count();
    Ok(correct as f64 / records.len() as f64)
}

impl Tree {
    /// Every label held by a leaf, most frequent first.
    /// Leaves without a label are skipped. Labels with the same number of
    /// leaves keep the order in which they first appear, positive branch first.
    pub fn all_labels(&self) -> Vec<&str> {
        let hist: LabelHistogram<&str> = self
            .leaves()
            .into_iter()
            .filter_map(|idx| self.nodes[idx].data_str())
            .collect();
        hist.ranked()
    }

    /// All decision paths from the root to a leaf holding `label`.
    ///
    /// Each path lists the answers taken, `true` for the positive branch.
    /// Paths come out from left to right, positive branch first. Passing
    /// `None` finds the leaves that never saw a record. Partial nodes are not
    /// descended into.
    pub fn paths_to(&self, label: Option<&str>) -> Vec<Vec<bool>> {
        if let Some(l) = label {
            if !self.all_labels().contains(&l) {
                return Vec::new();
            }
        }
        let mut paths = Vec::new();
        let mut stack: Vec<(usize, Vec<bool>)> = vec![(self.root, Vec::new())];
        while let Some((idx, path)) = stack.pop() {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                if node.data_str() == label {
                    paths.push(path);
                }
                continue;
            }
            if let (Some(pos), Some(neg)) = (node.positive_child, node.negative_child) {
                let mut neg_path = path.clone();
                neg_path.push(false);
                stack.push((neg, neg_path));
                let mut pos_path = path;
                pos_path.push(true);
                stack.push((pos, pos_path));
            }
        }
        paths
    }
}
