//! Optimizer
//!
//! Exhaustive search for the subset of questions that gives the most accurate
//! diagnosis tree at a fixed depth. Every combination of `depth` questions is
//! built and scored, so the cost grows with `C(n_questions, depth)`; callers
//! should keep both small.
use crate::constants::COMBINATION_WARN_LIMIT;
use crate::data::Record;
use crate::errors::TriageError;
use crate::metric::accuracy;
use crate::tree::Tree;
use crate::utils::{items_to_strings, n_combinations, validate_depth, validate_questions};
use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the question search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of threads used to score combinations, `None` uses every available core.
    pub num_threads: Option<usize>,
    /// Score combinations in parallel.
    pub parallel: bool,
    /// Collapse identical branches of the winning tree.
    pub minimize: bool,
    /// Also remove questions leading to unlabeled leaves from the winning tree.
    pub remove_empty: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            num_threads: None,
            parallel: true,
            minimize: false,
            remove_empty: false,
        }
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), TriageError> {
        fs::write(path, self.json_dump()?).map_err(|e| TriageError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object.
    fn json_dump(&self) -> Result<String, TriageError> {
        serde_json::to_string(self).map_err(|e| TriageError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string.
    fn from_json(json_str: &str) -> Result<Self, TriageError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TriageError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json file.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, TriageError> {
        let json_str = fs::read_to_string(path).map_err(|e| TriageError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for SearchConfig {}

/// Outcome of a search: the winning questions, in their original order, and
/// the tree built from them.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub questions: Vec<String>,
    pub accuracy: f64,
    pub tree: Tree,
}

#[derive(Clone, Debug, Default)]
pub struct Optimizer {
    pub cfg: SearchConfig,
}

impl Optimizer {
    pub fn new(cfg: SearchConfig) -> Self {
        Optimizer { cfg }
    }

    /// Set the number of threads.
    /// * `num_threads` - Threads used to score combinations, `None` for all cores.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    /// Set whether combinations are scored in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set whether the winning tree is minimized.
    pub fn set_minimize(mut self, minimize: bool) -> Self {
        self.cfg.minimize = minimize;
        self
    }

    /// Set whether unlabeled leaves are removed from the winning tree.
    /// Implies minimization.
    pub fn set_remove_empty(mut self, remove_empty: bool) -> Self {
        self.cfg.remove_empty = remove_empty;
        self
    }

    /// Find the combination of `depth` questions whose tree diagnoses
    /// `records` most accurately.
    ///
    /// Combinations keep the order of `questions` and are tried in
    /// lexicographic index order. On equal accuracy the first combination
    /// wins, also when scoring in parallel.
    ///
    /// * `records` - Labeled records used both to build and to score each tree.
    /// * `questions` - Candidate questions, without duplicates.
    /// * `depth` - Number of questions per tree, at most `questions.len()`.
    pub fn search<S>(&self, records: &[Record], questions: &[S], depth: usize) -> Result<SearchResult, TriageError>
    where
        S: AsRef<str> + Sync,
    {
        validate_depth(depth, questions.len())?;
        validate_questions(questions)?;
        if records.is_empty() {
            return Err(TriageError::EmptyInput);
        }

        match n_combinations(questions.len(), depth) {
            Some(n) if n <= COMBINATION_WARN_LIMIT => {}
            n => warn!(
                "Searching {} combinations of {} questions, this may take a long time.",
                n.map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string()),
                questions.len()
            ),
        }

        let combinations: Vec<Vec<usize>> = (0..questions.len()).combinations(depth).collect();
        info!(
            "Searching {} combinations of depth {} over {} records.",
            combinations.len(),
            depth,
            records.len()
        );

        let pick = |combination: &[usize]| {
            combination
                .iter()
                .map(|&i| questions[i].as_ref())
                .collect::<Vec<&str>>()
        };
        let score = |combination: &Vec<usize>| -> Result<f64, TriageError> {
            let picked = pick(combination.as_slice());
            let tree = Tree::try_fit(records, &picked)?;
            let acc = accuracy(&tree, records)?;
            debug!("[{}] accuracy={:.4}", items_to_strings(&picked), acc);
            Ok(acc)
        };

        let scores: Vec<f64> = if self.cfg.parallel {
            let num_threads = match self.cfg.num_threads {
                Some(num_threads) => num_threads,
                None => std::thread::available_parallelism().map_or(1, |n| n.get()),
            };
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| TriageError::ThreadPool(e.to_string()))?;
            pool.install(|| combinations.par_iter().map(score).collect::<Result<Vec<_>, _>>())?
        } else {
            combinations.iter().map(score).collect::<Result<Vec<_>, _>>()?
        };

        // Collected in enumeration order, so a strict comparison keeps the first best.
        let mut best = 0;
        for (i, s) in scores.iter().enumerate() {
            if *s > scores[best] {
                best = i;
            }
        }

        let questions: Vec<String> = pick(combinations[best].as_slice()).into_iter().map(String::from).collect();
        let mut tree = Tree::try_fit(records, &questions)?;
        if self.cfg.minimize || self.cfg.remove_empty {
            tree.minimize(self.cfg.remove_empty);
        }
        info!("Best questions: [{}] accuracy={:.4}", items_to_strings(&questions), scores[best]);

        Ok(SearchResult {
            questions,
            accuracy: scores[best],
            tree,
        })
    }
}

/// The most accurate tree built from `depth` of the given questions, see
/// [`Optimizer::search`]. Uses the default configuration.
pub fn optimal_tree<S>(records: &[Record], questions: &[S], depth: usize) -> Result<Tree, TriageError>
where
    S: AsRef<str> + Sync,
{
    Optimizer::default().search(records, questions, depth).map(|r| r.tree)
}
