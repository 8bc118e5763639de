use rand::Rng;

use crate::activation::activate;
use crate::error::ensure_len;
use crate::{Result, WeightInit};

/// A single scalar neuron.
///
/// Holds one weight per incoming connection (indexed by connection index) plus the
/// cached output of the last forward pass and the error term of the last backward pass.
/// The bias is not owned here: it belongs to the enclosing [`crate::Layer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    output: f64,
    error: f64,
}

impl Neuron {
    /// Allocate `num_inputs` weights drawn from `init`.
    pub fn new_with_rng<R: Rng + ?Sized>(num_inputs: usize, init: WeightInit, rng: &mut R) -> Self {
        let weights = (0..num_inputs).map(|_| init.sample(rng)).collect();
        Self::from_weights(weights)
    }

    #[inline]
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self {
            weights,
            output: 0.0,
            error: 0.0,
        }
    }

    /// Computes `tanh(sum(inputs[i] * weights[i]) + bias)`, caches and returns it.
    pub fn forward(&mut self, inputs: &[f64], bias: f64) -> Result<f64> {
        ensure_len("neuron inputs", self.weights.len(), inputs.len())?;

        let mut sum = bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            sum = w.mul_add(x, sum);
        }
        self.output = activate(sum);
        Ok(self.output)
    }

    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Output of the most recent forward pass (0.0 before any pass).
    #[inline]
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Error term computed by the most recent backward pass (0.0 before any pass).
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }

    #[inline]
    pub(crate) fn set_error(&mut self, error: f64) {
        self.error = error;
    }

    #[inline]
    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn forward_is_weighted_sum_plus_bias_through_tanh() {
        let mut n = Neuron::from_weights(vec![0.5, -0.25]);
        let y = n.forward(&[2.0, 4.0], 0.1).unwrap();
        assert_abs_diff_eq!(y, (0.5 * 2.0 - 0.25 * 4.0 + 0.1_f64).tanh(), epsilon = 1e-12);
        assert_eq!(n.output(), y);
    }

    #[test]
    fn forward_rejects_wrong_input_count() {
        let mut n = Neuron::from_weights(vec![0.1; 3]);
        for len in [0, 2, 4] {
            let inputs = vec![1.0; len];
            assert_eq!(
                n.forward(&inputs, 0.0),
                Err(crate::Error::DimensionMismatch {
                    context: "neuron inputs",
                    expected: 3,
                    got: len,
                })
            );
        }
        assert_eq!(n.output(), 0.0);
    }

    #[test]
    fn default_init_keeps_weights_small() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = Neuron::new_with_rng(64, WeightInit::default(), &mut rng);
        assert_eq!(n.num_inputs(), 64);
        assert!(n.weights().iter().all(|w| w.abs() < 0.1), "{:?}", n.weights());
        // Not all identical.
        assert!(n.weights().windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn constant_init_fills_every_weight() {
        let mut rng = StdRng::seed_from_u64(0);
        let n = Neuron::new_with_rng(3, WeightInit::Constant(0.2), &mut rng);
        assert_eq!(n.weights(), &[0.2, 0.2, 0.2]);
    }
}
