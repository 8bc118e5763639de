//! A small multilayer perceptron of scalar `tanh` neurons trained by backpropagation.
//!
//! `rust-backprop` keeps the classic textbook structure visible: a [`Network`] owns an
//! ordered list of [`Layer`]s, each layer owns its [`Neuron`]s, and each neuron owns one
//! weight per incoming connection.
//!
//! # Structure
//!
//! - The [`Topology`] gives the neuron count per layer, first layer first.
//! - Each neuron of layer 0 scales exactly one input feature, so `topology[0]` is also
//!   the input dimension.
//! - Every neuron of layer `i > 0` is connected to every neuron of layer `i - 1`.
//! - Every layer has one bias, shared by all of its neurons. Biases start at `0.01`
//!   and are not trained.
//!
//! # Training cycle
//!
//! [`Network::feed_forward`] returns a [`ForwardPass`]; passing it to
//! [`Network::back_prop`] together with the desired output updates every weight by
//! gradient descent on `0.5 * sum((desired - output)^2)`. A pass is valid only until
//! the next `feed_forward` or `back_prop` on the same network; anything else is
//! reported as [`Error::StaleState`].
//!
//! ```rust
//! use rust_backprop::Network;
//!
//! # fn main() -> rust_backprop::Result<()> {
//! let mut net = Network::new_with_seed(&[2, 1], 0.03, 0)?;
//!
//! let pass = net.feed_forward(&[1.0, 1.0])?;
//! assert_eq!(pass.output().len(), 1);
//! net.back_prop(&pass, &[-1.0])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Training loop
//!
//! ```rust
//! use rust_backprop::{Dataset, FitConfig, NetworkBuilder, Shuffle};
//!
//! # fn main() -> rust_backprop::Result<()> {
//! let xs = vec![
//!     vec![1.0, 1.0],
//!     vec![1.0, -1.0],
//!     vec![-1.0, 1.0],
//!     vec![-1.0, -1.0],
//! ];
//! let ys = vec![vec![1.0], vec![1.0], vec![-1.0], vec![-1.0]];
//! let train = Dataset::from_rows(&xs, &ys)?;
//!
//! let mut net = NetworkBuilder::new(&[2, 1])?
//!     .learning_rate(0.1)
//!     .build_with_seed(0)?;
//!
//! let report = net.fit(
//!     &train,
//!     FitConfig {
//!         epochs: 50,
//!         shuffle: Shuffle::Seeded(0),
//!         log_every: 10,
//!     },
//! )?;
//! assert_eq!(report.epochs.len(), 50);
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (construction at `debug`, each cycle at `trace`,
//! epoch summaries at `info`). Install any subscriber to see them.

pub mod activation;
pub mod builder;
pub mod data;
pub mod error;
pub mod layer;
pub mod loss;
pub mod network;
pub mod neuron;
pub mod topology;
pub mod train;

pub use builder::NetworkBuilder;
pub use data::Dataset;
pub use error::{Error, Result};
pub use layer::{Layer, WeightInit};
pub use network::{CycleState, ForwardPass, Network};
pub use neuron::Neuron;
pub use topology::Topology;
pub use train::{EpochReport, FitConfig, FitReport, Shuffle};
