//! Contiguous dataset storage.
//!
//! Samples are stored row-major in two flat buffers so the training loop can hand
//! out slices without per-step allocations.

use crate::{Error, Result};

/// A supervised dataset: inputs (X) and desired outputs (Y).
///
/// - `inputs.len() == len * input_dim`
/// - `targets.len() == len * target_dim`
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
    len: usize,
    input_dim: usize,
    target_dim: usize,
}

impl Dataset {
    /// Build a dataset from flat buffers with shapes `(len, input_dim)` and
    /// `(len, target_dim)`.
    pub fn from_flat(
        inputs: Vec<f64>,
        targets: Vec<f64>,
        input_dim: usize,
        target_dim: usize,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
        }
        if target_dim == 0 {
            return Err(Error::InvalidData("target_dim must be > 0".to_owned()));
        }
        if inputs.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }
        if inputs.len() % input_dim != 0 {
            return Err(Error::InvalidData(format!(
                "inputs length {} is not divisible by input_dim {}",
                inputs.len(),
                input_dim
            )));
        }

        let len = inputs.len() / input_dim;
        if targets.len() != len * target_dim {
            return Err(Error::InvalidData(format!(
                "targets length {} does not match len * target_dim ({} * {})",
                targets.len(),
                len,
                target_dim
            )));
        }

        Ok(Self {
            inputs,
            targets,
            len,
            input_dim,
            target_dim,
        })
    }

    /// Build a dataset from per-sample rows (copied into contiguous storage).
    pub fn from_rows(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }
        if inputs.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }

        let input_dim = inputs[0].len();
        let target_dim = targets[0].len();
        let inputs = flatten("input", inputs, input_dim)?;
        let targets = flatten("target", targets, target_dim)?;
        Self::from_flat(inputs, targets, input_dim, target_dim)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    /// Returns the `idx`-th input row.
    ///
    /// Panics if `idx >= len`.
    #[inline]
    pub fn input(&self, idx: usize) -> &[f64] {
        let start = idx * self.input_dim;
        &self.inputs[start..start + self.input_dim]
    }

    /// Returns the `idx`-th target row.
    ///
    /// Panics if `idx >= len`.
    #[inline]
    pub fn target(&self, idx: usize) -> &[f64] {
        let start = idx * self.target_dim;
        &self.targets[start..start + self.target_dim]
    }
}

fn flatten(what: &str, rows: &[Vec<f64>], dim: usize) -> Result<Vec<f64>> {
    let mut flat = Vec::with_capacity(rows.len() * dim);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(Error::InvalidData(format!(
                "{what} row {i} has len {}, expected {dim}",
                row.len()
            )));
        }
        flat.extend_from_slice(row);
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_validates_shapes() {
        let ok = Dataset::from_flat(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0], 2, 1).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.input(1), &[2.0, 3.0]);
        assert_eq!(ok.target(1), &[1.0]);

        assert!(Dataset::from_flat(vec![0.0, 1.0, 2.0], vec![0.0], 2, 1).is_err());
        assert!(Dataset::from_flat(vec![0.0, 1.0], vec![0.0, 1.0], 2, 1).is_err());
        assert!(Dataset::from_flat(vec![], vec![], 2, 1).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let xs = vec![vec![0.0, 0.0], vec![1.0]];
        let ys = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            Dataset::from_rows(&xs, &ys),
            Err(Error::InvalidData(_))
        ));

        let ys_short = vec![vec![0.0]];
        assert!(Dataset::from_rows(&[vec![0.0], vec![1.0]], &ys_short).is_err());
    }
}
