use rand::Rng;
use tracing::debug;

use crate::activation::activation::ActivationProfile;
use crate::error::{NetworkError, Result};
use crate::layers::units::UnitLayer;
use crate::math::matrix::Matrix;
use crate::network::spec::LayerSpec;
use crate::optim::reward::reward_scale;
use crate::train::example::TrainingExample;
use crate::train::train_config::TrainingParams;
use crate::train::trainer::train_network;

/// A fully connected feedforward network.
///
/// `layers[i]` holds the unit state of layer `i`; `weights[i]` connects layer
/// `i` to layer `i + 1` and has shape `(sizes[i + 1], sizes[i])`.
///
/// The unit buffer is shared by the forward and backward passes:
/// `propagate_error` reads the values written by the last `run`, so it must be
/// called with the target of the same example.
#[derive(Debug, Clone)]
pub struct Network {
    spec: LayerSpec,
    profile: ActivationProfile,
    layers: Vec<UnitLayer>,
    weights: Vec<Matrix>,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local RNG.
    pub fn new<S>(spec: S, profile: ActivationProfile) -> Result<Network>
    where
        S: TryInto<LayerSpec>,
        NetworkError: From<S::Error>,
    {
        Network::with_rng(spec, profile, &mut rand::thread_rng())
    }

    /// Same as `new`, resolving the profile from its registry name.
    pub fn from_profile_name<S>(spec: S, profile: &str) -> Result<Network>
    where
        S: TryInto<LayerSpec>,
        NetworkError: From<S::Error>,
    {
        let profile = ActivationProfile::from_name(profile)?;
        Network::new(spec, profile)
    }

    /// Builds a network drawing its initial weights from `rng`.
    pub fn with_rng<S, R>(spec: S, profile: ActivationProfile, rng: &mut R) -> Result<Network>
    where
        S: TryInto<LayerSpec>,
        NetworkError: From<S::Error>,
        R: Rng,
    {
        let spec: LayerSpec = spec.try_into()?;
        let layers = spec.sizes().iter().map(|&size| UnitLayer::new(size)).collect();
        let weights = spec.sizes()
            .windows(2)
            .map(|pair| Matrix::uniform(pair[1], pair[0], rng))
            .collect();

        debug!(
            depth = spec.depth(),
            layers = ?spec.sizes(),
            profile = %profile,
            "network constructed"
        );

        Ok(Network { spec, profile, layers, weights })
    }

    pub fn layer_spec(&self) -> &LayerSpec {
        &self.spec
    }

    pub fn profile(&self) -> ActivationProfile {
        self.profile
    }

    pub fn layers(&self) -> &[UnitLayer] {
        &self.layers
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Replaces the matrix connecting layer `index` to layer `index + 1`.
    ///
    /// The new matrix must have shape `(sizes[index + 1], sizes[index])` with
    /// every row that long; otherwise the network is left unchanged.
    pub fn set_weights(&mut self, index: usize, matrix: Matrix) -> Result<()> {
        if index >= self.weights.len() {
            return Err(NetworkError::Configuration(format!(
                "no weight matrix at index {index}, network has {}",
                self.weights.len()
            )));
        }

        let rows = self.layers[index + 1].size();
        let cols = self.layers[index].size();
        NetworkError::check_len("weight rows", rows, matrix.data.len())?;
        for row in &matrix.data {
            NetworkError::check_len("weight columns", cols, row.len())?;
        }

        self.weights[index] = Matrix::from_data(matrix.data);
        Ok(())
    }

    pub(crate) fn parts_mut(&mut self) -> (&[UnitLayer], &mut [Matrix], ActivationProfile) {
        (&self.layers, &mut self.weights, self.profile)
    }

    /// Forward pass. Returns the output layer's values.
    ///
    /// Every input unit receives `input[0]`; the remaining elements only fix
    /// the expected length. Unit errors are left untouched.
    pub fn run(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        NetworkError::check_len("input", self.spec.input_size(), input.len())?;

        let first = input[0];
        for value in self.layers[0].values.iter_mut() {
            *value = first;
        }

        for i in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            let prev = &done[i - 1].values;
            let weights = &self.weights[i - 1];
            for (j, value) in rest[0].values.iter_mut().enumerate() {
                let sum: f64 = prev.iter()
                    .zip(weights.row(j))
                    .map(|(x, w)| x * w)
                    .sum();
                *value = self.profile.activate(sum);
            }
        }

        Ok(self.output())
    }

    /// Values of the output layer as of the last forward pass.
    pub fn output(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].values.clone()
    }

    /// Backward pass. Writes every non-input unit's error and returns the sum
    /// of their absolute values.
    ///
    /// Output errors are the signed residual `target - value`. A hidden unit's
    /// error is the next layer's errors weighted by the connections leaving it.
    pub fn propagate_error(&mut self, target: &[f64]) -> Result<f64> {
        NetworkError::check_len("target", self.spec.output_size(), target.len())?;

        let last = self.layers.len() - 1;
        let mut total = 0.0;

        let output = &mut self.layers[last];
        for (j, t) in target.iter().enumerate() {
            let e = t - output.values[j];
            output.errors[j] = e;
            total += e.abs();
        }

        for i in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let next_errors = &tail[0].errors;
            let weights = &self.weights[i];
            for (j, error) in head[i].errors.iter_mut().enumerate() {
                let e: f64 = next_errors.iter()
                    .enumerate()
                    .map(|(k, ek)| ek * weights.get(k, j))
                    .sum();
                *error = e;
                total += e.abs();
            }
        }

        Ok(total)
    }

    /// Sum of `|error|` over every unit currently in the buffer.
    ///
    /// Reads whatever the last backward pass left behind.
    pub fn total_error(&self) -> f64 {
        self.layers.iter().map(UnitLayer::abs_error).sum()
    }

    /// Trains on `examples` in order, updating weights after every example.
    pub fn train(&mut self, examples: &[TrainingExample], params: &TrainingParams) -> Result<()> {
        train_network(self, examples, params)
    }

    /// Nudges every weight by an independent `uniform[-1, 1) * reward`, where
    /// the reward is derived from `cost` (smaller is better).
    ///
    /// A cost whose reward is not finite (`NaN`, or negative beyond what an
    /// `f64` can scale) is a `Configuration` error and leaves the weights alone.
    pub fn reward_perturb(&mut self, cost: f64) -> Result<()> {
        self.reward_perturb_with_rng(cost, &mut rand::thread_rng())
    }

    pub fn reward_perturb_with_rng<R: Rng>(&mut self, cost: f64, rng: &mut R) -> Result<()> {
        let reward = reward_scale(cost);
        if !reward.is_finite() {
            return Err(NetworkError::Configuration(format!(
                "cost {cost} gives a non-finite reward"
            )));
        }
        for matrix in self.weights.iter_mut() {
            matrix.perturb(reward, rng);
        }
        debug!(cost, reward, "weights perturbed");
        Ok(())
    }
}
