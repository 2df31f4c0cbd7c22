use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::{NetworkError, Result};

/// Gradient factor `measure` would use outside the linear region of `Relu`.
const RELU_LEAK: f64 = 0.01;

/// The activation profile shared by every non-input unit of a network.
///
/// A profile pairs the forward function (`activate`) with the per-weight
/// learning contribution (`measure`) used by the training update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationProfile {
    /// Logistic function.
    #[default]
    Sigmoid,
    /// Leaky-clamped linear unit: identity on `[0, 1]`, slope `0.01` outside.
    Relu,
}

impl ActivationProfile {
    /// Every registered profile.
    pub const ALL: [ActivationProfile; 2] = [ActivationProfile::Sigmoid, ActivationProfile::Relu];

    /// Maps a pre-activation sum to the unit's output value.
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            ActivationProfile::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationProfile::Relu => {
                if x > 1.0 {
                    1.0 + RELU_LEAK * (x - 1.0)
                } else if x < 0.0 {
                    RELU_LEAK * x
                } else {
                    x
                }
            }
        }
    }

    /// Learning contribution of one connection.
    ///
    /// `x` is the source unit's value, `y` the destination unit's value and
    /// `e` the destination unit's propagated error.
    ///
    /// `Relu` returns the bare product `x * y * e`; the region slope is not
    /// folded in.
    pub fn measure(&self, x: f64, y: f64, e: f64) -> f64 {
        match self {
            ActivationProfile::Sigmoid => e * y * (1.0 - y) * x,
            ActivationProfile::Relu => x * y * e,
        }
    }

    /// Registry name of the profile.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationProfile::Sigmoid => "sigmoid",
            ActivationProfile::Relu => "relu",
        }
    }

    /// Looks a profile up by its registry name.
    pub fn from_name(name: &str) -> Result<ActivationProfile> {
        ActivationProfile::ALL
            .iter()
            .copied()
            .find(|profile| profile.name() == name)
            .ok_or_else(|| {
                NetworkError::Configuration(format!("unknown activation profile '{name}'"))
            })
    }
}

impl FromStr for ActivationProfile {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        ActivationProfile::from_name(s)
    }
}

impl std::fmt::Display for ActivationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
