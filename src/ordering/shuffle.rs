//! Random permutation.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `items`.
///
/// Uses the thread-local generator. See [`shuffle_with`] for reproducible
/// results.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::shuffle;
///
/// let mut shuffled = shuffle(&[1, 2, 3, 4]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Returns a uniformly random permutation of `items`, drawing from `rng`.
///
/// A Fisher-Yates shuffle of a copy; the input is left untouched.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::ordering::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
