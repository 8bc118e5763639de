//! Activation function.
//!
//! Every neuron computes a pre-activation value `z = sum(w_i * x_i) + bias` and then
//! applies `tanh`: `y = tanh(z)`.
//!
//! The network caches the *post-activation* output `y` on each neuron. During
//! backprop the derivative is computed from `y` directly (`1 - y^2`), so the
//! pre-activation value never needs to be stored.

/// Hyperbolic tangent. Bounded to `[-1, 1]`, monotonic, and linear near zero.
#[inline]
pub fn activate(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of [`activate`] expressed in terms of its cached output `y`.
///
/// Given `y = activate(x)`, returns `1 - y^2`.
#[inline]
pub fn activate_derivative(y: f64) -> f64 {
    1.0 - y * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn tanh_basic_values() {
        assert_eq!(activate(0.0), 0.0);
        assert!(activate(10.0) > 0.999);
        assert!(activate(-10.0) < -0.999);
        assert_abs_diff_eq!(activate(0.5), -activate(-0.5));
    }

    #[test]
    fn derivative_is_taken_from_the_output() {
        let x = 0.3;
        let y = activate(x);
        let numeric = (activate(x + 1e-6) - activate(x - 1e-6)) / 2e-6;
        assert_abs_diff_eq!(activate_derivative(y), numeric, epsilon = 1e-8);
        assert_eq!(activate_derivative(0.0), 1.0);
    }

    #[test]
    fn outputs_stay_within_range() {
        for i in -50..=50 {
            let y = activate(i as f64 / 10.0);
            assert!(y > -1.0 && y < 1.0, "tanh({}) = {y}", i as f64 / 10.0);
        }
        for x in [f64::MAX, f64::MIN, 1e6, -1e6] {
            let y = activate(x);
            assert!((-1.0..=1.0).contains(&y));
        }
    }
}
