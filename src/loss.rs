//! Loss used for reporting training progress.
//!
//! The backward pass does not call into this module: the output-layer error term
//! `(desired - output) * (1 - output^2)` is the gradient of `0.5 * (desired - output)^2`
//! and is computed directly by [`crate::Network::back_prop`].

/// Mean squared error.
///
/// Shape contract: `pred.len() == target.len()`; an empty slice yields `0.0`.
#[inline]
pub fn mse(pred: &[f64], target: &[f64]) -> f64 {
    debug_assert_eq!(pred.len(), target.len());
    if pred.is_empty() {
        return 0.0;
    }
    let sum: f64 = pred
        .iter()
        .zip(target)
        .map(|(p, t)| {
            let d = p - t;
            d * d
        })
        .sum();
    sum / pred.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mse_basic_values() {
        assert_eq!(mse(&[1.0, -1.0], &[1.0, -1.0]), 0.0);
        assert_relative_eq!(mse(&[0.0, 0.0], &[1.0, -3.0]), 5.0);
        assert_eq!(mse(&[], &[]), 0.0);
    }

    #[test]
    fn mse_propagates_nan() {
        assert!(mse(&[f64::NAN], &[0.0]).is_nan());
    }
}
