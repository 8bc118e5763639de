use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::ensure_len;
use crate::{Error, Neuron, Result};

/// Weight initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// `z / divisor + offset` with `z ~ N(0, 1)`.
    ///
    /// The default (`divisor = 100`, `offset = 0.01`) keeps initial outputs in the
    /// linear region of `tanh`.
    ScaledNormal { divisor: f64, offset: f64 },
    /// Every weight starts at the same value.
    Constant(f64),
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::ScaledNormal {
            divisor: 100.0,
            offset: 0.01,
        }
    }
}

impl WeightInit {
    pub fn validate(self) -> Result<()> {
        match self {
            WeightInit::ScaledNormal { divisor, offset } => {
                if !(divisor.is_finite() && divisor != 0.0) {
                    return Err(Error::InvalidConfig(format!(
                        "init divisor must be finite and non-zero, got {divisor}"
                    )));
                }
                if !offset.is_finite() {
                    return Err(Error::InvalidConfig(format!(
                        "init offset must be finite, got {offset}"
                    )));
                }
            }
            WeightInit::Constant(w) => {
                if !w.is_finite() {
                    return Err(Error::InvalidConfig(format!(
                        "constant init must be finite, got {w}"
                    )));
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self {
            WeightInit::ScaledNormal { divisor, offset } => {
                let z: f64 = StandardNormal.sample(rng);
                z / divisor + offset
            }
            WeightInit::Constant(w) => w,
        }
    }
}

/// An ordered group of neurons sharing one input source and one bias.
///
/// Neuron order is the connection index seen by the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    bias: f64,
}

impl Layer {
    pub fn new_with_rng<R: Rng + ?Sized>(
        width: usize,
        inputs_per_neuron: usize,
        bias: f64,
        init: WeightInit,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..width)
            .map(|_| Neuron::new_with_rng(inputs_per_neuron, init, rng))
            .collect();
        Self { neurons, bias }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// The bias added by every neuron in this layer.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    #[inline]
    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Cached outputs of the last forward pass, in neuron order.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::output).collect()
    }

    /// Forward pass where neuron `j` sees only `inputs[j]`.
    pub(crate) fn forward_per_feature(&mut self, inputs: &[f64]) -> Result<()> {
        ensure_len("per-feature layer inputs", self.neurons.len(), inputs.len())?;
        let bias = self.bias;
        for (neuron, x) in self.neurons.iter_mut().zip(inputs) {
            neuron.forward(std::slice::from_ref(x), bias)?;
        }
        Ok(())
    }

    /// Forward pass where every neuron sees the whole `inputs` slice.
    pub(crate) fn forward_dense(&mut self, inputs: &[f64]) -> Result<()> {
        let bias = self.bias;
        for neuron in &mut self.neurons {
            neuron.forward(inputs, bias)?;
        }
        Ok(())
    }
}
