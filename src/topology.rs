use std::fmt;

use crate::{Error, Result};

/// Neuron count per layer, first layer first.
///
/// The first width is also the input dimension: every first-layer neuron scales
/// exactly one input feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topology(Vec<usize>);

impl Topology {
    pub fn new(widths: Vec<usize>) -> Result<Self> {
        if widths.is_empty() {
            return Err(Error::InvalidTopology(
                "topology must have at least one layer".to_owned(),
            ));
        }
        if let Some(idx) = widths.iter().position(|&w| w == 0) {
            return Err(Error::InvalidTopology(format!(
                "layer {idx} has zero neurons; every layer needs at least one"
            )));
        }
        Ok(Self(widths))
    }

    #[inline]
    pub fn widths(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.0[0]
    }

    #[inline]
    pub fn output_dim(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Incoming weight count for each neuron of layer `idx`.
    #[inline]
    pub(crate) fn inputs_per_neuron(&self, idx: usize) -> usize {
        if idx == 0 { 1 } else { self.0[idx - 1] }
    }
}

impl TryFrom<&[usize]> for Topology {
    type Error = Error;

    fn try_from(widths: &[usize]) -> Result<Self> {
        Self::new(widths.to_vec())
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = Error;

    fn try_from(widths: Vec<usize>) -> Result<Self> {
        Self::new(widths)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_zero_width() {
        assert!(matches!(
            Topology::new(vec![]),
            Err(Error::InvalidTopology(_))
        ));
        assert!(matches!(
            Topology::new(vec![2, 0, 1]),
            Err(Error::InvalidTopology(_))
        ));
    }

    #[test]
    fn first_layer_takes_one_input_per_neuron() {
        let t = Topology::try_from(&[3_usize, 4, 2][..]).unwrap();
        assert_eq!(t.inputs_per_neuron(0), 1);
        assert_eq!(t.inputs_per_neuron(1), 3);
        assert_eq!(t.inputs_per_neuron(2), 4);
        assert_eq!(t.input_dim(), 3);
        assert_eq!(t.output_dim(), 2);
        assert_eq!(t.to_string(), "[3, 4, 2]");
    }

    #[test]
    fn single_layer_is_allowed() {
        let t = Topology::new(vec![5]).unwrap();
        assert_eq!(t.num_layers(), 1);
        assert_eq!(t.input_dim(), t.output_dim());
    }
}
