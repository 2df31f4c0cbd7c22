/// Value and error state of one layer's units.
///
/// `values[j]` is written by the forward pass, `errors[j]` by the backward
/// pass. Errors are overwritten on every backward pass, never accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitLayer {
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
}

impl UnitLayer {
    /// A layer of `size` units with every value and error at zero.
    pub fn new(size: usize) -> UnitLayer {
        UnitLayer {
            values: vec![0.0; size],
            errors: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Sum of `|error|` over the layer.
    pub fn abs_error(&self) -> f64 {
        self.errors.iter().map(|e| e.abs()).sum()
    }
}
