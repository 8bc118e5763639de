//! Network builder.
//!
//! `NetworkBuilder` is the configuration surface for a [`Network`]: topology,
//! learning rate, the shared per-layer bias and the weight initializer.
//!
//! Defaults:
//!
//! - learning rate: `0.03`
//! - initial bias: `0.01` for every layer, so `tanh` does not start exactly at zero
//! - weights: [`WeightInit::default`] (small normal values around `0.01`)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Network, Result, Topology, WeightInit};

pub const DEFAULT_LEARNING_RATE: f64 = 0.03;
pub const DEFAULT_BIAS: f64 = 0.01;

#[derive(Debug, Clone)]
/// Builder for a `Network`.
///
/// Example:
///
/// ```rust
/// use rust_backprop::NetworkBuilder;
///
/// # fn main() -> rust_backprop::Result<()> {
/// let net = NetworkBuilder::new(&[2, 3, 1])?
///     .learning_rate(0.1)
///     .build_with_seed(0)?;
/// assert_eq!(net.topology().widths(), &[2, 3, 1]);
/// # Ok(())
/// # }
/// ```
pub struct NetworkBuilder {
    topology: Topology,
    learning_rate: f64,
    bias: f64,
    init: WeightInit,
}

impl NetworkBuilder {
    /// Start building a network with the given neuron count per layer.
    pub fn new(topology: &[usize]) -> Result<Self> {
        Ok(Self::from_topology(Topology::try_from(topology)?))
    }

    pub fn from_topology(topology: Topology) -> Self {
        Self {
            topology,
            learning_rate: DEFAULT_LEARNING_RATE,
            bias: DEFAULT_BIAS,
            init: WeightInit::default(),
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Bias shared by every neuron of every layer. It is not trained.
    pub fn initial_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn weight_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build using the provided RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if !self.bias.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "bias must be finite, got {}",
                self.bias
            )));
        }
        self.init.validate()?;

        Ok(Network::from_parts(
            self.topology,
            self.learning_rate,
            self.bias,
            self.init,
            rng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let res = NetworkBuilder::new(&[2, 1])
                .unwrap()
                .learning_rate(lr)
                .build_with_seed(0);
            assert!(matches!(res, Err(Error::InvalidConfig(_))), "lr={lr}");
        }
    }

    #[test]
    fn rejects_non_finite_bias() {
        let res = NetworkBuilder::new(&[2, 1])
            .unwrap()
            .initial_bias(f64::NAN)
            .build_with_seed(0);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_topology() {
        assert!(matches!(
            NetworkBuilder::new(&[]),
            Err(Error::InvalidTopology(_))
        ));
    }

    #[test]
    fn applies_configuration() {
        let net = NetworkBuilder::new(&[2, 2])
            .unwrap()
            .learning_rate(0.5)
            .initial_bias(0.2)
            .weight_init(WeightInit::Constant(0.1))
            .build_with_seed(1)
            .unwrap();
        assert_eq!(net.learning_rate(), 0.5);
        for layer in net.layers() {
            assert_eq!(layer.bias(), 0.2);
            for n in layer.neurons() {
                assert!(n.weights().iter().all(|&w| w == 0.1));
            }
        }
    }
}
