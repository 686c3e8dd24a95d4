use serde::Serialize;

use crate::data::dataset::Dataset;
use crate::network::forward::infer;
use crate::network::network::NetworkParameters;

/// Network output for one example after training.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub input: Vec<f64>,
    pub target: f64,
    pub output: f64,
}

impl Prediction {
    /// Output falls on the same side of 0.5 as the target.
    pub fn is_correct(&self) -> bool {
        (self.output >= 0.5) == (self.target >= 0.5)
    }
}

/// Runs one forward pass per example without touching `params`.
pub fn evaluate(params: &NetworkParameters, dataset: &Dataset) -> Vec<Prediction> {
    dataset.iter()
        .map(|ex| Prediction {
            input: ex.input.clone(),
            target: ex.target,
            output: infer(params, &ex.input),
        })
        .collect()
}

/// Fraction of predictions on the correct side of 0.5.
pub fn accuracy(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    correct as f64 / predictions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correctness_is_decided_at_half() {
        let p = |target, output| Prediction { input: vec![0.0, 0.0], target, output };
        assert!(p(0.0, 0.2).is_correct());
        assert!(p(1.0, 0.8).is_correct());
        assert!(!p(0.0, 0.7).is_correct());
        assert_eq!(accuracy(&[p(0.0, 0.1), p(1.0, 0.1)]), 0.5);
        assert_eq!(accuracy(&[]), 0.0);
    }
}
