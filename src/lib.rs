pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationProfile;
pub use layers::units::UnitLayer;
pub use network::network::Network;
pub use network::spec::LayerSpec;
pub use optim::sgd::Sgd;
pub use train::{TrainingExample, TrainingParams, RoundStats, train_network};
pub use error::{NetworkError, Result};
