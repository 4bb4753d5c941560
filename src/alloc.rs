//! Allocation helpers (probabilities, softmax, inverse-CDF sampling).
//!
//! These are deterministic utilities for turning scores into a probability
//! distribution in a stable (reproducible) way.

/// Smallest temperature used when dividing scores; smaller values are clamped up to it.
pub const MIN_LAMBDA: f64 = 1e-6;

/// Compute a stable softmax distribution over per-action scores.
///
/// - `lambda` is the temperature; values below [`MIN_LAMBDA`] are clamped to it.
/// - Uses the standard max-trick for numerical stability.
/// - Scores must be finite (callers validate).
/// - Returns a distribution that sums to 1 (or empty if input is empty).
pub fn softmax(scores: &[f32], lambda: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let t = if lambda.is_finite() {
        lambda.max(MIN_LAMBDA)
    } else {
        1.0
    };

    let max_score = scores
        .iter()
        .map(|&s| s as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut out: Vec<f64> = Vec::with_capacity(scores.len());
    let mut denom = 0.0;
    for &s in scores {
        let x = ((s as f64 - max_score) / t).exp();
        denom += x;
        out.push(x);
    }
    if denom <= 0.0 || !denom.is_finite() {
        // Degenerate fallback: uniform.
        let n = scores.len() as f64;
        return vec![1.0 / n; scores.len()];
    }

    for v in out.iter_mut() {
        *v /= denom;
    }
    out
}

/// Inverse-CDF pick over ordered indices: the first index whose cumulative mass exceeds `r`.
///
/// Returns `(index, fell_through)`. When rounding leaves `r` beyond the total mass, the last
/// index with positive mass is returned with `fell_through = true`. Returns `None` only if
/// `probs` has no positive entry.
pub fn sample_index(probs: &[f64], r: f64) -> Option<(usize, bool)> {
    let mut cdf = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cdf += p;
        if p > 0.0 && r < cdf {
            return Some((i, false));
        }
    }
    // Numerical fallback.
    probs.iter().rposition(|&p| p > 0.0).map(|i| (i, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax(&[0.0, 1.0, -2.0], 1.0);
        let s: f64 = p.iter().sum();
        assert!((s - 1.0).abs() < 1e-9, "sum={}", s);
        assert!(p[1] > p[0] && p[0] > p[2]);
    }

    #[test]
    fn equal_scores_are_uniform() {
        let p = softmax(&[3.0; 4], 0.5);
        for v in p {
            assert!((v - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn tiny_lambda_approaches_argmax() {
        let p = softmax(&[0.0, 1.0, 0.5], 0.0);
        assert!(p[1] > 1.0 - 1e-12, "p={p:?}");
        assert!(p.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn sample_index_skips_zero_mass() {
        assert_eq!(sample_index(&[0.0, 1.0], 0.0), Some((1, false)));
        assert_eq!(sample_index(&[0.5, 0.5], 0.49), Some((0, false)));
        assert_eq!(sample_index(&[0.5, 0.5], 0.5), Some((1, false)));
        assert_eq!(sample_index(&[0.3, 0.3, 0.0], 0.9999), Some((1, true)));
        assert_eq!(sample_index(&[0.0, 0.0], 0.1), None);
    }

    proptest! {
        #[test]
        fn softmax_is_a_distribution(
            // Keep bounded: small vectors, bounded magnitudes.
            scores in proptest::collection::vec(-1.0e6f32..1.0e6f32, 1..20),
            lambda in prop_oneof![Just(f64::NAN), Just(0.0), Just(-1.0), 1.0e-6f64..1.0e6f64],
        ) {
            let p = softmax(&scores, lambda);

            // Deterministic.
            let p2 = softmax(&scores, lambda);
            prop_assert_eq!(&p, &p2);

            prop_assert_eq!(p.len(), scores.len());
            let sum: f64 = p.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
            for &v in &p {
                prop_assert!(v.is_finite());
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn sampled_index_has_positive_mass(
            scores in proptest::collection::vec(-50.0f32..50.0f32, 1..12),
            r in 0.0f64..1.0,
        ) {
            let p = softmax(&scores, 1.0);
            let (i, _) = sample_index(&p, r).unwrap();
            prop_assert!(p[i] > 0.0);
        }
    }
}
