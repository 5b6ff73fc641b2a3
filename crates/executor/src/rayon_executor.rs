//! Executor backed by rayon's global work-stealing pool.

use crate::Executor;
use rayon::prelude::*;

/// Runs items on rayon's global pool. Indexed parallel iterators collect in
/// input order, so callers see the same ordering as with `SyncExecutor`.
///
/// The pool size is whatever rayon was configured with; configure it with
/// `rayon::ThreadPoolBuilder::build_global` before the first executor is made.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
