//! Executors for running independent planner sections.
//!
//! Section builders share no mutable state, so they may run one after another
//! or on a thread pool. Either way results come back in input order, which is
//! what keeps the final output in the configured section order.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution, no threading
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)

use std::fmt::Debug;

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

/// Runs a batch of work items, potentially in parallel.
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. The returned vector is in the same order as
    /// `items`, regardless of the order in which the work completed.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// 1 for sequential executors, the pool size otherwise.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

/// A concrete executor chosen at runtime.
///
/// `Executor` has generic methods and cannot be a trait object, so the
/// planner stores this enum instead.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// The rayon executor when `parallel` is set and available, else sequential.
    pub fn with_parallelism(parallel: bool) -> Self {
        #[cfg(feature = "rayon")]
        {
            if parallel {
                return ExecutorImpl::Rayon(RayonExecutor::new());
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

/// Sequential. Output is deterministic either way; parallelism is opt-in.
impl Default for ExecutorImpl {
    fn default() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_executor_keeps_input_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec!["title", "annual", "dailies"], |name| name.len());
        assert_eq!(results, vec![5, 6, 7]);
        assert_eq!(executor.parallelism(), 1);
    }

    #[test]
    fn sync_executor_passes_errors_through() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<u32, String>> = executor.execute_all(vec![1, 0, 3], |x| {
            if x == 0 {
                Err("empty section".to_string())
            } else {
                Ok(x * 10)
            }
        });
        assert_eq!(results, vec![Ok(10), Err("empty section".to_string()), Ok(30)]);
    }

    #[test]
    fn default_is_sequential() {
        let executor = ExecutorImpl::default();
        assert_eq!(executor.name(), "SyncExecutor");
        assert_eq!(ExecutorImpl::with_parallelism(false).name(), "SyncExecutor");
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_request_selects_rayon() {
        let executor = ExecutorImpl::with_parallelism(true);
        assert_eq!(executor.name(), "RayonExecutor");
        assert!(executor.parallelism() >= 1);
    }
}
