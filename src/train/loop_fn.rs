use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::example::TrainingExample;
use crate::train::round_stats::RoundStats;
use crate::train::train_config::TrainingParams;

/// Runs `params.iterations` rounds of online training and hands the stats of
/// every logged round to `on_log`.
///
/// Each round visits `examples` in the given order. For every example the
/// network runs forward, propagates the target error back and updates its
/// weights immediately. A round is logged when `params.log` is set and
/// `round % params.log_interval == 0`.
///
/// Parameters and example shapes are checked before the first round, so an
/// `Err` leaves the weights untouched.
pub fn train_loop<F>(
    network: &mut Network,
    examples: &[TrainingExample],
    params: &TrainingParams,
    mut on_log: F,
) -> Result<()>
where
    F: FnMut(RoundStats),
{
    params.validate()?;
    check_examples(network, examples)?;

    let optimizer = Sgd::new(params.learn_rate);

    for round in 0..params.iterations {
        let mut error = 0.0;

        for example in examples {
            network.run(&example.input)?;
            error += network.propagate_error(&example.target)?;
            optimizer.step(network);
        }

        if params.log && round % params.log_interval == 0 {
            on_log(RoundStats { round, error });
        }
    }

    Ok(())
}

fn check_examples(network: &Network, examples: &[TrainingExample]) -> Result<()> {
    let spec = network.layer_spec();
    for example in examples {
        NetworkError::check_len("input", spec.input_size(), example.input.len())?;
        NetworkError::check_len("target", spec.output_size(), example.target.len())?;
    }
    Ok(())
}
