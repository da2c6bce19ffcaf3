//! Histogram
//!
//! Label-frequency accumulation. Labels are kept in the order they are first
//! seen, which makes every tie-break in the crate deterministic: on equal
//! counts the label seen first wins.
use hashbrown::HashMap;
use std::hash::Hash;

/// Ordered label counts.
#[derive(Debug, Clone)]
pub struct LabelHistogram<L> {
    labels: Vec<(L, usize)>,
    position: HashMap<L, usize>,
}

impl<L> Default for LabelHistogram<L> {
    fn default() -> Self {
        LabelHistogram {
            labels: Vec::new(),
            position: HashMap::new(),
        }
    }
}

impl<L: Hash + Eq + Clone> LabelHistogram<L> {
    pub fn new() -> Self {
        LabelHistogram::default()
    }

    /// Count one occurrence of `label`.
    pub fn add(&mut self, label: L) {
        self.add_n(label, 1);
    }

    /// Count `n` occurrences of `label`.
    pub fn add_n(&mut self, label: L, n: usize) {
        match self.position.get(&label) {
            Some(&i) => self.labels[i].1 += n,
            None => {
                self.position.insert(label.clone(), self.labels.len());
                self.labels.push((label, n));
            }
        }
    }

    pub fn count(&self, label: &L) -> usize {
        self.position.get(label).map_or(0, |&i| self.labels[i].1)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> usize {
        self.labels.iter().map(|(_, c)| c).sum()
    }

    /// The label with the highest count, first seen wins on ties.
    /// `None` when nothing has been counted.
    pub fn majority(&self) -> Option<&L> {
        let mut best: Option<&(L, usize)> = None;
        for entry in &self.labels {
            match best {
                Some((_, c)) if *c >= entry.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(label, _)| label)
    }

    /// Labels sorted descending by count, first seen wins on ties.
    pub fn ranked(self) -> Vec<L> {
        let mut labels = self.labels;
        // sort_by is stable, so first-seen order survives among equal counts.
        labels.sort_by(|a, b| b.1.cmp(&a.1));
        labels.into_iter().map(|(label, _)| label).collect()
    }
}

impl<L: Hash + Eq + Clone> FromIterator<L> for LabelHistogram<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut hist = LabelHistogram::new();
        iter.into_iter().for_each(|label| hist.add(label));
        hist
    }
}
