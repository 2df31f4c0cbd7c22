use serde::{Serialize, Deserialize};

/// Diagnostic record for one training round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// 0-based round index.
    pub round: usize,
    /// Sum of `propagate_error` results over the round's examples.
    pub error: f64,
}
