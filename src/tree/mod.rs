pub mod build;
pub mod predict;
pub mod tree;

pub use build::build_tree;
pub use tree::{identical_subtrees, Tree};
