pub mod reward;
pub mod sgd;

pub use reward::reward_scale;
pub use sgd::Sgd;
