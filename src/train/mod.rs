pub mod evaluate;
pub mod loss_record;
pub mod observer;
pub mod train_config;
pub mod loop_fn;

pub use evaluate::{accuracy, evaluate, Prediction};
pub use loss_record::{LossRecord, TrainingHistory};
pub use observer::{ChannelObserver, TracingObserver, TrainingObserver};
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, CONVERGED_LOSS};
