/// Exponent applied when damping rewards above 1.
const DAMPING: f64 = 0.9;

/// Turns a cost (smaller is better) into the perturbation scale.
///
/// The raw reward is `2^-cost`. Rewards above 1 (negative cost) are damped to
/// `reward / reward^0.9`, i.e. `reward^0.1`, evaluated as `2^(-cost * 0.1)` so
/// it stays finite long after `2^-cost` would overflow. A `NaN` cost yields
/// `NaN`.
pub fn reward_scale(cost: f64) -> f64 {
    if cost < 0.0 {
        2f64.powf(-cost * (1.0 - DAMPING))
    } else {
        2f64.powf(-cost)
    }
}
