//! Rayon-based parallelisation utilities.
//!
//! Scenario grids evaluate independent rows on the rayon pool. Output order
//! always matches input order, so results do not depend on scheduling.

use rayon::prelude::*;

/// Parallel map preserving input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `mapper` - Function to apply to each item
///
/// # Returns
///
/// Vector of mapped results, index-aligned with `items`.
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Fallible parallel map.
///
/// Returns the first error in input order when any item fails. Items are
/// still evaluated independently, so every failure is observed at most once.
pub fn try_parallel_map<T, R, E, F>(items: &[T], mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    parallel_map(items, mapper).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<i32> = (0..1000).collect();
        let doubled: Vec<i32> = parallel_map(&items, |&x| x * 2);

        assert_eq!(doubled.len(), 1000);
        assert!(doubled.iter().enumerate().all(|(i, &v)| v == 2 * i as i32));
    }

    #[test]
    fn test_try_parallel_map_reports_first_error() {
        let items: Vec<i32> = (0..100).collect();
        let result: Result<Vec<i32>, i32> =
            try_parallel_map(&items, |&x| if x % 40 == 39 { Err(x) } else { Ok(x) });
        assert_eq!(result, Err(39));

        let ok: Result<Vec<i32>, i32> = try_parallel_map(&items, |&x| Ok(x + 1));
        assert_eq!(ok.unwrap()[99], 100);
    }
}
