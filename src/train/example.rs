use serde::{Serialize, Deserialize};

/// One labelled sample: the network input and the output it should produce.
///
/// The JSON form accepts `target` under the alias `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    #[serde(alias = "output")]
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> TrainingExample {
        TrainingExample { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for TrainingExample {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        TrainingExample { input, target }
    }
}
