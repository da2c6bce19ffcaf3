mod node;

// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod histogram;
pub mod metric;
pub mod optimizer;
pub mod prune;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use data::{load_records, parse_records, FeatureSet, Record};
pub use errors::TriageError;
pub use metric::accuracy;
pub use node::Node;
pub use optimizer::{optimal_tree, ConfigIO, Optimizer, SearchConfig, SearchResult};
pub use tree::{build_tree, identical_subtrees, Tree};
