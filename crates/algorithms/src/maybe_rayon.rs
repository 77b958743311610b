//! Parallel or sequential iteration behind one import.
//!
//! With the `parallel` feature (default) this is `rayon::prelude`. Without
//! it, `into_par_iter()` falls back to `into_iter()` so the same chains
//! (`flat_map`, `map`, `collect`) run on the standard iterator adapters.
//! Row passes and per-peak traces are independent and collected in order,
//! so both builds produce identical output.

#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`
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
