use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::data::dataset::Dataset;
use crate::loss::mse::MseLoss;
use crate::network::forward::forward;
use crate::network::network::NetworkParameters;
use crate::optim::sgd::Sgd;
use crate::train::loss_record::{LossRecord, TrainingHistory};
use crate::train::observer::TrainingObserver;
use crate::train::train_config::TrainConfig;

/// Average loss under which XOR counts as learned.
pub const CONVERGED_LOSS: f64 = 0.01;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `params` for `config.epochs` epochs over `dataset`.
///
/// Every epoch visits the examples in dataset order; each example runs a
/// forward pass, adds its loss to the epoch total and immediately updates
/// `params`, so the next example already sees that update. On every epoch
/// index divisible by `config.report_interval` a `LossRecord` is handed to
/// `observer` and kept in the returned history.
///
/// There is no early stop: the loop always runs the full epoch count.
///
/// # Panics
/// Panics if the config is out of range or the dataset's input width does
/// not match `params`.
pub fn train_loop<O: TrainingObserver + ?Sized>(
    params: &mut NetworkParameters,
    dataset: &Dataset,
    config: &TrainConfig,
    observer: &mut O,
) -> TrainingHistory {
    assert!(!dataset.is_empty(), "dataset must not be empty");
    assert_eq!(
        dataset.input_width(),
        params.weights_input_hidden.cols,
        "dataset input width must equal input_nodes"
    );
    assert!(config.epochs > 0, "epochs must be at least 1");
    assert!(config.report_interval > 0, "report_interval must be at least 1");

    let optimizer = Sgd::new(config.learning_rate);
    let mut records = Vec::with_capacity(config.expected_records());
    let mut last_loss = f64::NAN;

    info!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        examples = dataset.len(),
        "training started"
    );
    let t_start = Instant::now();

    for epoch in 0..config.epochs {
        let average_loss = run_one_epoch(params, dataset, &optimizer);
        last_loss = average_loss;
        trace!(epoch, average_loss, "epoch done");

        if epoch % config.report_interval == 0 {
            let record = LossRecord { epoch, average_loss };
            debug!(epoch, average_loss, "loss record");
            observer.on_record(&record);
            records.push(record);
        }
    }

    observer.on_finish(&records);

    let elapsed_ms = t_start.elapsed().as_millis() as u64;
    info!(final_loss = last_loss, elapsed_ms, "training finished");
    if last_loss >= CONVERGED_LOSS {
        warn!(
            final_loss = last_loss,
            "average loss is still above {CONVERGED_LOSS}; this initialization may not learn XOR"
        );
    }

    TrainingHistory {
        records,
        final_loss: last_loss,
        epochs: config.epochs,
    }
}

/// Runs one epoch of per-example SGD in dataset order.
/// Returns the mean loss over all examples.
pub fn run_one_epoch(params: &mut NetworkParameters, dataset: &Dataset, optimizer: &Sgd) -> f64 {
    let mut total_loss = 0.0;

    for example in dataset {
        let activations = forward(&example.input, params);
        total_loss += MseLoss::loss(activations.output, example.target);
        optimizer.step(params, &example.input, &activations, example.target);
    }

    total_loss / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::init::RandomInitializer;
    use crate::network::topology::Topology;

    #[test]
    fn reports_on_interval_boundaries() {
        let mut params = NetworkParameters::initialized(&Topology::XOR, &mut RandomInitializer::seeded(5));
        let config = TrainConfig::new(0.5, 25, 10);
        let history = train_loop(&mut params, &Dataset::xor(), &config, &mut ());
        let epochs: Vec<usize> = history.records.iter().map(|r| r.epoch).collect();
        assert_eq!(epochs, vec![0, 10, 20]);
        assert_eq!(history.epochs, 25);
        assert!(history.final_loss.is_finite());
    }

    #[test]
    #[should_panic(expected = "input width")]
    fn mismatched_dataset_panics() {
        let mut params = NetworkParameters::zeros(&Topology { input_nodes: 3, ..Topology::XOR });
        train_loop(&mut params, &Dataset::xor(), &TrainConfig::default(), &mut ());
    }
}
