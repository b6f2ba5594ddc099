use rand::Rng;
use tracing::trace;

/// Number of values drawn for every sample.
pub const DRAWS: usize = 10;

/// Exclusive upper bound of the drawn values.
pub const UPPER_BOUND: u32 = 10;

/// Draw a sample from the thread-local generator and keep the even values.
pub fn random_even_sample() -> Vec<u32> {
    random_even_sample_with(&mut rand::rng())
}

/// Same as [`random_even_sample`], drawing from `rng`.
pub fn random_even_sample_with<R: Rng>(rng: &mut R) -> Vec<u32> {
    let draws = (0..DRAWS)
        .map(|_| rng.random_range(0..UPPER_BOUND))
        .collect::<Vec<_>>();
    trace!(?draws, "drew random values");
    keep_even(draws)
}

/// Keep the even values of `draws`, in order.
pub fn keep_even<I>(draws: I) -> Vec<u32>
where
    I: IntoIterator<Item = u32>,
{
    draws.into_iter().filter(|n| n % 2 == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_keep_even_scripted() {
        assert_eq!(keep_even([1, 2, 3, 4, 5, 6, 7, 8, 9, 0]), vec![2, 4, 6, 8, 0]);
        assert!(keep_even([1, 3, 5]).is_empty());
        assert!(keep_even(Vec::new()).is_empty());
    }

    #[test]
    fn test_sample_values() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let sample = random_even_sample_with(&mut rng);
            assert!(sample.len() <= DRAWS);
            assert!(sample.iter().all(|&n| n % 2 == 0 && n < UPPER_BOUND));
        }
        let sample = random_even_sample();
        assert!(sample.len() <= DRAWS);
        assert!(sample.iter().all(|&n| n % 2 == 0 && n < UPPER_BOUND));
    }

    #[test]
    fn test_sample_is_reproducible() {
        let a = random_even_sample_with(&mut StdRng::seed_from_u64(7));
        let b = random_even_sample_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
