//! Data
//!
//! Records, the feature set abstraction used by the classifier, and a thin
//! adapter turning whitespace-delimited lines (`label feature1 feature2 ...`)
//! into records.
use crate::errors::TriageError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Anything that can answer "was this symptom observed?".
/// Order and duplicates of the underlying collection are irrelevant.
pub trait FeatureSet {
    /// Check if the feature is a member of the set.
    fn has_feature(&self, feature: &str) -> bool;
}

impl<S: Borrow<str> + Hash + Eq> FeatureSet for HashSet<S> {
    fn has_feature(&self, feature: &str) -> bool {
        self.contains(feature)
    }
}

impl<S: Borrow<str> + Ord> FeatureSet for BTreeSet<S> {
    fn has_feature(&self, feature: &str) -> bool {
        self.contains(feature)
    }
}

impl<S: AsRef<str>> FeatureSet for [S] {
    fn has_feature(&self, feature: &str) -> bool {
        self.iter().any(|f| f.as_ref() == feature)
    }
}

impl<S: AsRef<str>, const N: usize> FeatureSet for [S; N] {
    fn has_feature(&self, feature: &str) -> bool {
        self.as_slice().has_feature(feature)
    }
}

impl<S: AsRef<str>> FeatureSet for Vec<S> {
    fn has_feature(&self, feature: &str) -> bool {
        self.as_slice().has_feature(feature)
    }
}

impl<T: FeatureSet + ?Sized> FeatureSet for &T {
    fn has_feature(&self, feature: &str) -> bool {
        (**self).has_feature(feature)
    }
}

/// A labeled training example: the true label (illness) plus the
/// observed features (symptoms).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub label: String,
    pub features: HashSet<String>,
}

impl Record {
    /// Create a new record.
    /// * `label` - The true label of the record.
    /// * `features` - The observed features, duplicates are dropped.
    pub fn new<L, I, S>(label: L, features: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Record {
            label: label.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

impl FeatureSet for Record {
    fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

impl FromStr for Record {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match words.next() {
            Some(label) => Ok(Record::new(label, words)),
            None => Err(TriageError::TypeMismatch(
                "a record line needs at least a label".to_string(),
            )),
        }
    }
}

/// Parse records from a reader, one record per line.
/// Blank lines are skipped.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>, TriageError> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| TriageError::UnableToRead(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(line.parse()?);
    }
    Ok(records)
}

/// Load records from a whitespace-delimited text file.
///
/// * `path` - Path of the file to read.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, TriageError> {
    let file = File::open(path).map_err(|e| TriageError::UnableToRead(e.to_string()))?;
    parse_records(BufReader::new(file))
}
