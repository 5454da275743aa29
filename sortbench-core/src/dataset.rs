//! Dataset Generation
//!
//! Produces the input permutations the sort variants are measured against.
//! Generation draws exclusively from the RNG the caller supplies, so a run
//! seeded with `StdRng::seed_from_u64` is fully reproducible, and none of
//! the shuffle's work leaks into an algorithm's counters.

use crate::Scenario;
use rand::Rng;
use thiserror::Error;

/// Rejected dataset request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// Requested size exceeds the `u32` element range.
    #[error("dataset size {0} exceeds the supported element range")]
    TooLarge(usize),
}

/// Generate a permutation of `0..size` shaped by `scenario`.
///
/// - `Sorted`: the identity permutation
/// - `Reverse`: the identity permutation reversed
/// - `Random`: an unbiased Fisher-Yates shuffle of the identity permutation,
///   iterating the index downward and swapping with a uniform index in
///   `[0, i]`
pub fn generate(
    size: usize,
    scenario: Scenario,
    rng: &mut impl Rng,
) -> Result<Vec<u32>, DatasetError> {
    if size > u32::MAX as usize {
        return Err(DatasetError::TooLarge(size));
    }

    let mut data: Vec<u32> = (0..size as u32).collect();

    match scenario {
        Scenario::Sorted => {}
        Scenario::Reverse => data.reverse(),
        Scenario::Random => {
            for i in (1..size).rev() {
                let j = rng.gen_range(0..=i);
                data.swap(i, j);
            }
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn is_permutation(data: &[u32]) -> bool {
        let mut seen = vec![false; data.len()];
        for &v in data {
            let idx = v as usize;
            if idx >= data.len() || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    #[test]
    fn sorted_is_identity() {
        let data = generate(5, Scenario::Sorted, &mut rng()).unwrap();
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reverse_is_descending_identity() {
        let data = generate(5, Scenario::Reverse, &mut rng()).unwrap();
        assert_eq!(data, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn random_is_a_permutation() {
        for size in [0, 1, 2, 100, 1000] {
            let data = generate(size, Scenario::Random, &mut rng()).unwrap();
            assert_eq!(data.len(), size);
            assert!(is_permutation(&data), "size {} not a permutation", size);
        }
    }

    #[test]
    fn empty_and_singleton_datasets() {
        for scenario in Scenario::ALL {
            assert_eq!(generate(0, scenario, &mut rng()).unwrap(), Vec::<u32>::new());
            assert_eq!(generate(1, scenario, &mut rng()).unwrap(), vec![0]);
        }
    }

    /// Chi-square test over the 6 permutations of N=3: 10,000 shuffles
    /// should spread close to uniformly (df=5, critical value 20.52 at
    /// p=0.001).
    #[test]
    fn random_shuffle_is_unbiased() {
        const TRIALS: usize = 10_000;
        let mut rng = rng();
        let mut counts = [0usize; 6];

        for _ in 0..TRIALS {
            let data = generate(3, Scenario::Random, &mut rng).unwrap();
            // Rank the permutation into 0..6.
            let idx = match (data[0], data[1], data[2]) {
                (0, 1, 2) => 0,
                (0, 2, 1) => 1,
                (1, 0, 2) => 2,
                (1, 2, 0) => 3,
                (2, 0, 1) => 4,
                (2, 1, 0) => 5,
                other => panic!("not a permutation of 0..3: {:?}", other),
            };
            counts[idx] += 1;
        }

        let expected = TRIALS as f64 / 6.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi_square < 20.52,
            "chi-square {} suggests a biased shuffle: {:?}",
            chi_square,
            counts
        );
    }

    #[test]
    fn oversized_request_is_rejected() {
        #[cfg(target_pointer_width = "64")]
        {
            let size = u32::MAX as usize + 1;
            assert_eq!(
                generate(size, Scenario::Sorted, &mut rng()),
                Err(DatasetError::TooLarge(size))
            );
        }
    }
}
