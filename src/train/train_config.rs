use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Hyperparameters for `train_network`.
///
/// # Fields
/// - `iterations`   — number of rounds; each round visits every example once
/// - `learn_rate`   — scale applied to every weight update
/// - `log`          — emit a diagnostic event every `log_interval` rounds
/// - `log_interval` — rounds between diagnostic events; must be positive
///
/// Deserializing fills missing keys with the defaults below and ignores keys
/// it does not know. camelCase spellings (`learnRate`, `logInterval`) are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingParams {
    pub iterations: usize,
    #[serde(alias = "learnRate")]
    pub learn_rate: f64,
    pub log: bool,
    #[serde(alias = "logInterval")]
    pub log_interval: usize,
}

impl Default for TrainingParams {
    fn default() -> Self {
        TrainingParams {
            iterations: 1000,
            learn_rate: 0.2,
            log: false,
            log_interval: 100,
        }
    }
}

impl TrainingParams {
    /// Parses a JSON parameter object.
    pub fn from_json(json: &str) -> Result<TrainingParams> {
        let params: TrainingParams = serde_json::from_str(json)
            .map_err(|e| NetworkError::Configuration(format!("invalid training parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_learn_rate(mut self, learn_rate: f64) -> Self {
        self.learn_rate = learn_rate;
        self
    }

    /// Turns diagnostic logging on, one event every `interval` rounds.
    pub fn with_logging(mut self, interval: usize) -> Self {
        self.log = true;
        self.log_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_interval == 0 {
            return Err(NetworkError::Configuration(
                "log_interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(TrainingParams::from_json("{}").unwrap(), TrainingParams::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let params = TrainingParams::from_json(r#"{"iterations": 5, "log": true}"#).unwrap();
        assert_eq!(params.iterations, 5);
        assert!(params.log);
        assert_eq!(params.learn_rate, 0.2);
        assert_eq!(params.log_interval, 100);
    }

    #[test]
    fn camel_case_aliases_and_unknown_keys() {
        let params = TrainingParams::from_json(
            r#"{"learnRate": 0.05, "logInterval": 10, "momentum": 0.9}"#,
        )
        .unwrap();
        assert_eq!(params.learn_rate, 0.05);
        assert_eq!(params.log_interval, 10);
        assert_eq!(params.iterations, 1000);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = TrainingParams::from_json(r#"{"log_interval": 0}"#).unwrap_err();
        assert!(err.is_configuration());
        assert!(TrainingParams::default().with_logging(0).validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let wrong_type = TrainingParams::from_json(r#"{"iterations": "many"}"#);
        assert!(wrong_type.unwrap_err().is_configuration());
        assert!(TrainingParams::from_json("iterations: 5").unwrap_err().is_configuration());
    }

    #[test]
    fn builder() {
        let params = TrainingParams::default()
            .with_iterations(3)
            .with_learn_rate(0.5)
            .with_logging(1);
        assert_eq!(
            params,
            TrainingParams { iterations: 3, learn_rate: 0.5, log: true, log_interval: 1 }
        );
    }
}
