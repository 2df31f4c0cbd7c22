use ferrite_perceptron::{ActivationProfile, Network, TrainingExample, TrainingParams};
use tracing_subscriber::EnvFilter;

fn main() -> ferrite_perceptron::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut network = Network::new(vec![2usize, 3, 1], ActivationProfile::Sigmoid)?;

    let examples = vec![
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let params = TrainingParams::default()
        .with_iterations(5000)
        .with_learn_rate(0.2)
        .with_logging(1000);
    network.train(&examples, &params)?;

    for example in &examples {
        let output = network.run(&example.input)?;
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }

    // Stochastic search: keep a perturbation only when it lowers the error.
    // Cost grows as the error shrinks, so steps get smaller near a minimum.
    let mut best = score(&mut network, &examples)?;
    for _ in 0..200 {
        let mut candidate = network.clone();
        candidate.reward_perturb(1.0 / best.max(1e-6))?;
        let cost = score(&mut candidate, &examples)?;
        if cost < best {
            network = candidate;
            best = cost;
        }
    }
    println!("Error after reward search: {best:.6}");

    Ok(())
}

fn score(network: &mut Network, examples: &[TrainingExample]) -> ferrite_perceptron::Result<f64> {
    let mut total = 0.0;
    for example in examples {
        network.run(&example.input)?;
        total += network.propagate_error(&example.target)?;
    }
    Ok(total)
}
