//! Parallel processing strategies

#[cfg(feature = "parallel")]
use rampgen_core::Error;
use rampgen_core::Result;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Processing mode for batch work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing using all available cores
    #[default]
    Parallel,
    /// Parallel with specified number of threads
    ParallelWith(usize),
}

/// Strategy for parallel execution
pub trait ParallelStrategy {
    /// Map a function over indices and collect results in index order
    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;
}

impl ParallelStrategy for ProcessingMode {
    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => Ok(range.map(f).collect()),
            #[cfg(feature = "parallel")]
            ProcessingMode::Parallel => Ok(range.into_par_iter().map(f).collect()),
            #[cfg(feature = "parallel")]
            ProcessingMode::ParallelWith(threads) => {
                let pool = build_pool(*threads)?;
                Ok(pool.install(|| range.into_par_iter().map(f).collect()))
            }
            #[cfg(not(feature = "parallel"))]
            ProcessingMode::Parallel | ProcessingMode::ParallelWith(_) => Ok(range.map(f).collect()),
        }
    }
}

#[cfg(feature = "parallel")]
fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    if threads == 0 {
        return Err(Error::InvalidParameter {
            name: "threads",
            value: threads.to_string(),
            reason: "must be at least 1".into(),
        });
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))
}

/// Number of worker threads [`ProcessingMode::Parallel`] uses
pub fn num_threads() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_agree_and_keep_order() {
        let square = |i: usize| i * i;
        let expected: Vec<usize> = (0..64).map(square).collect();
        for mode in [
            ProcessingMode::Sequential,
            ProcessingMode::Parallel,
            ProcessingMode::ParallelWith(3),
        ] {
            assert_eq!(mode.par_map(0..64, square).unwrap(), expected, "{mode:?}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn zero_threads_is_rejected() {
        let err = ProcessingMode::ParallelWith(0).par_map(0..4, |i| i).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "threads", .. }));
    }

    #[test]
    fn default_is_parallel() {
        assert_eq!(ProcessingMode::default(), ProcessingMode::Parallel);
        assert!(num_threads() >= 1);
    }
}
