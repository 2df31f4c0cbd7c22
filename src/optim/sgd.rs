use crate::network::network::Network;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online update from the unit state left by the last forward
    /// and backward pass:
    ///
    /// `w[i][j][k] += lr * measure(layer[i].value[k], layer[i+1].value[j], layer[i+1].error[j])`
    pub fn step(&self, network: &mut Network) {
        let (layers, weights, profile) = network.parts_mut();

        for (i, matrix) in weights.iter_mut().enumerate() {
            let source = &layers[i];
            let dest = &layers[i + 1];
            for (j, row) in matrix.data.iter_mut().enumerate() {
                let y = dest.values[j];
                let e = dest.errors[j];
                for (k, w) in row.iter_mut().enumerate() {
                    *w += self.learning_rate * profile.measure(source.values[k], y, e);
                }
            }
        }
    }
}
