pub mod example;
pub mod loop_fn;
pub mod round_stats;
pub mod train_config;
pub mod trainer;

pub use example::TrainingExample;
pub use loop_fn::train_loop;
pub use round_stats::RoundStats;
pub use train_config::TrainingParams;
pub use trainer::train_network;
