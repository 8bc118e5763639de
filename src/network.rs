use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::activation::activate_derivative;
use crate::error::ensure_len;
use crate::{Error, Layer, NetworkBuilder, Result, Topology, WeightInit};

static NEXT_NETWORK_ID: AtomicU64 = AtomicU64::new(0);

/// Where a network is in its forward/backward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    ForwardDone,
    BackwardDone,
}

/// Context produced by [`Network::feed_forward`] and consumed by [`Network::back_prop`].
///
/// It owns the input that produced the current neuron outputs (the first layer's
/// weight update needs it) and is only accepted by the network that produced it,
/// and only until the next `feed_forward` or `back_prop` on that network.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    network_id: u64,
    cycle: u64,
    input: Vec<f64>,
    output: Vec<f64>,
}

impl ForwardPass {
    #[inline]
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Outputs of the final layer.
    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    #[inline]
    pub fn into_output(self) -> Vec<f64> {
        self.output
    }
}

/// A feed-forward network of scalar `tanh` neurons.
///
/// Layers are stored in order in one `Vec`; layer `i > 0` is fully connected to
/// layer `i - 1`, while each neuron of layer 0 scales a single input feature.
#[derive(Debug)]
pub struct Network {
    id: u64,
    topology: Topology,
    layers: Vec<Layer>,
    learning_rate: f64,
    cycle: u64,
    state: CycleState,
}

impl Clone for Network {
    /// The clone gets its own identity: forward passes of `self` are not valid for it.
    fn clone(&self) -> Self {
        Self {
            id: NEXT_NETWORK_ID.fetch_add(1, Ordering::Relaxed),
            topology: self.topology.clone(),
            layers: self.layers.clone(),
            learning_rate: self.learning_rate,
            cycle: 0,
            state: CycleState::Idle,
        }
    }
}

impl Network {
    pub fn new_with_seed(topology: &[usize], learning_rate: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(topology, learning_rate, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        topology: &[usize],
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        NetworkBuilder::new(topology)?
            .learning_rate(learning_rate)
            .build_with_rng(rng)
    }

    /// Assemble a network from already validated parts.
    pub(crate) fn from_parts<R: Rng + ?Sized>(
        topology: Topology,
        learning_rate: f64,
        bias: f64,
        init: WeightInit,
        rng: &mut R,
    ) -> Self {
        let layers = topology
            .widths()
            .iter()
            .enumerate()
            .map(|(idx, &width)| {
                Layer::new_with_rng(width, topology.inputs_per_neuron(idx), bias, init, rng)
            })
            .collect();

        debug!(%topology, learning_rate, bias, "built network");

        Self {
            id: NEXT_NETWORK_ID.fetch_add(1, Ordering::Relaxed),
            topology,
            layers,
            learning_rate,
            cycle: 0,
            state: CycleState::Idle,
        }
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.topology.input_dim()
    }

    #[inline]
    pub fn output_dim(&self) -> usize {
        self.topology.output_dim()
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    #[inline]
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Forward pass for a single sample.
    ///
    /// Neuron `j` of layer 0 sees `input[j]` alone; every neuron of layer `i > 0` sees
    /// all outputs of layer `i - 1`. Every neuron caches its output.
    ///
    /// Shape contract: `input.len() == self.input_dim()`.
    pub fn feed_forward(&mut self, input: &[f64]) -> Result<ForwardPass> {
        ensure_len("network input", self.input_dim(), input.len())?;

        // Any earlier pass stops describing the cached outputs from here on.
        self.cycle += 1;
        self.state = CycleState::Idle;

        let mut prev = Vec::new();
        for (idx, layer) in self.layers.iter_mut().enumerate() {
            if idx == 0 {
                layer.forward_per_feature(input)?;
            } else {
                layer.forward_dense(&prev)?;
            }
            prev = layer.outputs();
        }

        self.state = CycleState::ForwardDone;
        trace!(cycle = self.cycle, ?input, output = ?prev, "forward pass");

        Ok(ForwardPass {
            network_id: self.id,
            cycle: self.cycle,
            input: input.to_vec(),
            output: prev,
        })
    }

    /// Backward pass for the sample described by `pass`.
    ///
    /// Computes every neuron's error term from the output layer down to layer 0,
    /// then moves every weight by `learning_rate * error * source`, where `source` is
    /// the input feature (layer 0) or the output of the source neuron in the previous
    /// layer. Layer biases are left unchanged.
    ///
    /// Shape contract: `desired.len() == self.output_dim()`. A shape error leaves
    /// the network untouched and `pass` still usable.
    pub fn back_prop(&mut self, pass: &ForwardPass, desired: &[f64]) -> Result<()> {
        ensure_len("desired output", self.output_dim(), desired.len())?;
        self.ensure_current(pass)?;

        self.compute_errors(desired);
        self.apply_updates(&pass.input);

        self.state = CycleState::BackwardDone;
        trace!(cycle = self.cycle, ?desired, "backward pass");
        Ok(())
    }

    /// One full training cycle. Returns the output observed before the update.
    pub fn train_step(&mut self, input: &[f64], desired: &[f64]) -> Result<Vec<f64>> {
        ensure_len("desired output", self.output_dim(), desired.len())?;
        let pass = self.feed_forward(input)?;
        self.back_prop(&pass, desired)?;
        Ok(pass.into_output())
    }

    fn ensure_current(&self, pass: &ForwardPass) -> Result<()> {
        if pass.network_id != self.id {
            return Err(Error::StaleState(
                "forward pass belongs to a different network".to_owned(),
            ));
        }
        if pass.cycle != self.cycle {
            return Err(Error::StaleState(format!(
                "forward pass {} was superseded by forward pass {}",
                pass.cycle, self.cycle
            )));
        }
        match self.state {
            CycleState::ForwardDone => Ok(()),
            CycleState::BackwardDone => Err(Error::StaleState(
                "forward pass was already used by a backward pass".to_owned(),
            )),
            CycleState::Idle => Err(Error::StaleState(
                "no completed forward pass to back-propagate".to_owned(),
            )),
        }
    }

    /// Writes each neuron's error term, back to front.
    fn compute_errors(&mut self, desired: &[f64]) {
        let last = self.layers.len() - 1;

        for (neuron, &d) in self.layers[last].neurons_mut().iter_mut().zip(desired) {
            let y = neuron.output();
            neuron.set_error((d - y) * activate_derivative(y));
        }

        for idx in (0..last).rev() {
            let (left, right) = self.layers.split_at_mut(idx + 1);
            let layer = &mut left[idx];
            let next = &right[0];

            for (j, neuron) in layer.neurons_mut().iter_mut().enumerate() {
                let downstream: f64 = next
                    .neurons()
                    .iter()
                    .map(|n| n.weights()[j] * n.error())
                    .sum();
                neuron.set_error(downstream * activate_derivative(neuron.output()));
            }
        }
    }

    /// Applies the weight updates front to back using the stored error terms.
    fn apply_updates(&mut self, input: &[f64]) {
        let lr = self.learning_rate;

        for (neuron, &x) in self.layers[0].neurons_mut().iter_mut().zip(input) {
            let step = lr * neuron.error();
            for w in neuron.weights_mut() {
                *w += step * x;
            }
        }

        for idx in 1..self.layers.len() {
            let (left, right) = self.layers.split_at_mut(idx);
            let prev = &left[idx - 1];
            let layer = &mut right[0];

            for neuron in layer.neurons_mut() {
                let step = lr * neuron.error();
                for (w, source) in neuron.weights_mut().iter_mut().zip(prev.neurons()) {
                    *w += step * source.output();
                }
            }
        }
    }
}
