//! Conditional parallel iteration.
//!
//! Feature computations are independent across components and across
//! Monte-Carlo trials, so they parallelize with rayon when the `parallel`
//! feature is enabled and fall back to sequential iteration otherwise.
//! Seeded runs stay bit-identical in both modes because every trial derives
//! its own generator from the base seed rather than sharing one.

/// Macro for conditionally parallel iteration over ranges or owned collections.
///
/// With the `parallel` feature, uses `into_par_iter()`; otherwise `into_iter()`.
#[macro_export]
macro_rules! iter_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::IntoParallelIterator;

            IntoParallelIterator::into_par_iter($expr)
        }
        #[cfg(not(feature = "parallel"))]
        {
            IntoIterator::into_iter($expr)
        }
    }};
}

pub use iter_maybe_parallel;
