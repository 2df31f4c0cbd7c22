use tracing::info;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::example::TrainingExample;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainingParams;

/// Trains `network` on `examples`, reporting logged rounds through `tracing`.
pub fn train_network(
    network: &mut Network,
    examples: &[TrainingExample],
    params: &TrainingParams,
) -> Result<()> {
    train_loop(network, examples, params, |stats| {
        info!(
            round = stats.round,
            error = stats.error,
            "iteration: {}, error: {}",
            stats.round,
            stats.error
        );
    })
}
