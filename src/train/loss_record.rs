use serde::{Serialize, Deserialize};

/// Average training loss at a reported epoch.
///
/// Emitted by `train_loop` on every epoch index divisible by
/// `TrainConfig::report_interval`, in increasing epoch order. Observers
/// (console log, loss-curve plot, a channel to another thread) only read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossRecord {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Mean of the per-example loss over the whole dataset in this epoch.
    pub average_loss: f64,
}

/// Everything `train_loop` reports back once it finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub records: Vec<LossRecord>,
    /// Average loss of the last epoch, reported or not.
    pub final_loss: f64,
    pub epochs: usize,
}
