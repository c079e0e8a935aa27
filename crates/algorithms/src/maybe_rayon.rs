/// Row-parallel iteration with or without rayon.
///
/// With the `parallel` feature this re-exports rayon's prelude, so
/// `axis_iter_mut(..).into_par_iter()` splits ramp rows across the pool.
/// Without it, `into_par_iter()` falls back to `into_iter()` and the same
/// chain runs on the calling thread.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
