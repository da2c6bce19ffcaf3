/// Number of candidate trees above which the optimizer warns about run time.
pub const COMBINATION_WARN_LIMIT: usize = 100_000;
/// Tree depth above which building a complete tree is reported as expensive.
pub const LARGE_TREE_DEPTH: usize = 20;
/// Deepest complete tree whose node count still fits in a `usize`.
pub const MAX_TREE_DEPTH: usize = usize::BITS as usize - 2;
/// Indentation used per level when rendering a tree.
pub const DISPLAY_INDENT: &str = "    ";
