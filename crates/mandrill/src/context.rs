//! Evaluation context configuration

use std::cell::Cell;

/// Default limit on evaluator recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and bounds how deeply the
/// evaluator may recurse into the tree.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum nesting depth (stack overflow protection)
    pub max_depth: usize,

    /// Nodes currently being evaluated on the recursion stack
    depth: Cell<usize>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            depth: Cell::new(0),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Current recursion depth.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Descend one level. Returns `None` once the limit is reached.
    ///
    /// The level is released when the returned guard is dropped.
    pub(crate) fn enter(&self) -> Option<DepthGuard<'_>> {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            return None;
        }
        self.depth.set(depth + 1);
        Some(DepthGuard { ctx: self })
    }
}

/// RAII guard that releases one level of evaluation depth when dropped.
pub(crate) struct DepthGuard<'a> {
    ctx: &'a EvalContext,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.ctx.depth.set(self.ctx.depth.get().saturating_sub(1));
    }
}
