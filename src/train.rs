//! Online training loop.
//!
//! One epoch visits every sample once; each sample is a full
//! `feed_forward` + `back_prop` cycle, so weights move after every sample.

use std::ops::ControlFlow;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::error::ensure_len;
use crate::{Dataset, Error, Network, Result, loss};

/// Sample order within an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shuffle {
    /// Dataset order.
    #[default]
    None,
    /// Reshuffled every epoch from an RNG seeded once per `fit` call.
    Seeded(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    pub epochs: usize,
    pub shuffle: Shuffle,
    /// Emit an `info` event every `log_every` epochs.
    pub log_every: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            shuffle: Shuffle::None,
            log_every: 10,
        }
    }
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be > 0".to_owned()));
        }
        if self.log_every == 0 {
            return Err(Error::InvalidConfig("log_every must be > 0".to_owned()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// Zero-based epoch index.
    pub epoch: usize,
    /// Mean per-sample MSE, measured on the outputs seen before each update.
    pub mse: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub epochs: Vec<EpochReport>,
    pub final_mse: f64,
    /// True when the epoch callback stopped training before `epochs` ran.
    pub stopped_early: bool,
}

impl Network {
    /// Train on `train` for `cfg.epochs` epochs.
    pub fn fit(&mut self, train: &Dataset, cfg: FitConfig) -> Result<FitReport> {
        self.fit_with(train, cfg, |_| ControlFlow::Continue(()))
    }

    /// Like [`Network::fit`], calling `on_epoch` after every epoch.
    ///
    /// Returning `ControlFlow::Break(())` stops training; the current cycle is
    /// always finished first.
    pub fn fit_with<F>(
        &mut self,
        train: &Dataset,
        cfg: FitConfig,
        mut on_epoch: F,
    ) -> Result<FitReport>
    where
        F: FnMut(&EpochReport) -> ControlFlow<()>,
    {
        cfg.validate()?;
        self.ensure_dataset(train)?;

        let mut order: Vec<usize> = (0..train.len()).collect();
        let mut rng = match cfg.shuffle {
            Shuffle::None => None,
            Shuffle::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };

        debug!(
            samples = train.len(),
            epochs = cfg.epochs,
            learning_rate = self.learning_rate(),
            "starting training"
        );

        let mut epochs = Vec::with_capacity(cfg.epochs);
        let mut stopped_early = false;

        for epoch in 0..cfg.epochs {
            if let Some(rng) = rng.as_mut() {
                order.shuffle(rng);
            }

            let mut total = 0.0;
            for &idx in &order {
                let target = train.target(idx);
                let pass = self.feed_forward(train.input(idx))?;
                total += loss::mse(pass.output(), target);
                self.back_prop(&pass, target)?;
            }

            let report = EpochReport {
                epoch,
                mse: total / train.len() as f64,
            };
            if !report.mse.is_finite() {
                warn!(epoch, mse = report.mse, "non-finite training loss");
            }
            if (epoch + 1) % cfg.log_every == 0 {
                info!(epoch, mse = report.mse, "epoch complete");
            }
            epochs.push(report);

            if on_epoch(&report).is_break() {
                stopped_early = epoch + 1 < cfg.epochs;
                debug!(epoch, "training stopped by callback");
                break;
            }
        }

        let final_mse = epochs.last().map_or(f64::NAN, |r| r.mse);
        Ok(FitReport {
            epochs,
            final_mse,
            stopped_early,
        })
    }

    /// Mean per-sample MSE over `data`. Weights are not modified.
    pub fn evaluate_mse(&mut self, data: &Dataset) -> Result<f64> {
        self.ensure_dataset(data)?;

        let mut total = 0.0;
        for idx in 0..data.len() {
            let pass = self.feed_forward(data.input(idx))?;
            total += loss::mse(pass.output(), data.target(idx));
        }
        Ok(total / data.len() as f64)
    }

    /// Final-layer outputs for each input row.
    pub fn predict(&mut self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        inputs
            .iter()
            .map(|x| self.feed_forward(x).map(|pass| pass.into_output()))
            .collect()
    }

    fn ensure_dataset(&self, data: &Dataset) -> Result<()> {
        ensure_len("dataset input_dim", self.input_dim(), data.input_dim())?;
        ensure_len("dataset target_dim", self.output_dim(), data.target_dim())
    }
}
