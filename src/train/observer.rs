use std::sync::mpsc;

use tracing::{debug, info};

use crate::train::loss_record::LossRecord;

/// Receives progress from `train_loop`. Observers never touch parameters.
pub trait TrainingObserver {
    fn on_record(&mut self, record: &LossRecord);

    /// Called once after the last epoch with every record emitted.
    fn on_finish(&mut self, _records: &[LossRecord]) {}
}

/// Discards everything.
impl TrainingObserver for () {
    fn on_record(&mut self, _record: &LossRecord) {}
}

/// Collects records in emission order.
impl TrainingObserver for Vec<LossRecord> {
    fn on_record(&mut self, record: &LossRecord) {
        self.push(*record);
    }
}

impl<O: TrainingObserver + ?Sized> TrainingObserver for &mut O {
    fn on_record(&mut self, record: &LossRecord) {
        (**self).on_record(record);
    }

    fn on_finish(&mut self, records: &[LossRecord]) {
        (**self).on_finish(records);
    }
}

/// Logs every record at `info` level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TrainingObserver for TracingObserver {
    fn on_record(&mut self, record: &LossRecord) {
        info!(epoch = record.epoch, "Epoch {}, Average Loss: {:.6}", record.epoch, record.average_loss);
    }

    fn on_finish(&mut self, records: &[LossRecord]) {
        if let Some(last) = records.last() {
            info!(records = records.len(), last_reported = last.epoch, "training progress complete");
        }
    }
}

/// Streams records to another thread, e.g. a live chart.
///
/// A dropped receiver does not stop training; later sends are skipped.
pub struct ChannelObserver {
    tx: mpsc::Sender<LossRecord>,
    disconnected: bool,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::Sender<LossRecord>) -> Self {
        ChannelObserver { tx, disconnected: false }
    }
}

impl TrainingObserver for ChannelObserver {
    fn on_record(&mut self, record: &LossRecord) {
        if self.disconnected {
            return;
        }
        if self.tx.send(*record).is_err() {
            debug!(epoch = record.epoch, "progress receiver dropped; no further records sent");
            self.disconnected = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_in_order() {
        fn feed<O: TrainingObserver>(mut obs: O) {
            obs.on_record(&LossRecord { epoch: 0, average_loss: 0.3 });
            obs.on_record(&LossRecord { epoch: 5, average_loss: 0.1 });
        }

        let mut seen: Vec<LossRecord> = Vec::new();
        feed(&mut seen);
        assert_eq!(seen.iter().map(|r| r.epoch).collect::<Vec<_>>(), vec![0, 5]);
    }

    #[test]
    fn channel_tolerates_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let mut obs = ChannelObserver::new(tx);
        obs.on_record(&LossRecord { epoch: 0, average_loss: 0.2 });
        assert_eq!(rx.recv().unwrap().epoch, 0);
        drop(rx);
        obs.on_record(&LossRecord { epoch: 1, average_loss: 0.1 });
        obs.on_record(&LossRecord { epoch: 2, average_loss: 0.05 });
        assert!(obs.disconnected);
    }
}
