use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Unit count of every layer, input first, output last.
///
/// A valid spec has at least two layers and no empty layer. It cannot be
/// changed once built; deserializing runs the same validation as `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LayerSpec {
    sizes: Vec<usize>,
}

impl LayerSpec {
    pub fn new(sizes: Vec<usize>) -> Result<LayerSpec> {
        if sizes.len() < 2 {
            return Err(NetworkError::Configuration(format!(
                "a network needs at least 2 layers, got {}",
                sizes.len()
            )));
        }
        if let Some(idx) = sizes.iter().position(|&n| n == 0) {
            return Err(NetworkError::Configuration(format!(
                "layer {idx} has no units"
            )));
        }
        Ok(LayerSpec { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of layers, input and output included.
    pub fn depth(&self) -> usize {
        self.sizes.len()
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }
}

impl TryFrom<Vec<usize>> for LayerSpec {
    type Error = NetworkError;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        LayerSpec::new(sizes)
    }
}

impl TryFrom<&[usize]> for LayerSpec {
    type Error = NetworkError;

    fn try_from(sizes: &[usize]) -> Result<Self> {
        LayerSpec::new(sizes.to_vec())
    }
}

impl From<LayerSpec> for Vec<usize> {
    fn from(spec: LayerSpec) -> Self {
        spec.sizes
    }
}
