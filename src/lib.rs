pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod report;

// Convenience re-exports
pub use error::{Result, XorError};
pub use math::matrix::Matrix;
pub use activation::{sigmoid, sigmoid_derivative};
pub use network::{forward, infer, ForwardResult, NetworkParameters, RandomInitializer, Topology};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use data::{Dataset, TrainingExample};
pub use train::{evaluate, train_loop, LossRecord, Prediction, TrainConfig, TrainingHistory, TrainingObserver};
