use serde::{Serialize, Deserialize};
use crate::error::{Result, XorError};
use crate::network::topology::Topology;

/// One input vector paired with its scalar target in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: f64,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: f64) -> TrainingExample {
        TrainingExample { input, target }
    }
}

/// A fixed, ordered, validated set of training examples.
///
/// Order matters: the training loop visits examples in exactly this order
/// every epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    examples: Vec<TrainingExample>,
}

impl Dataset {
    /// Validates `topology`, then `examples` against it: non-empty, every
    /// input of length `input_nodes`, all values finite, targets within [0, 1].
    pub fn new(examples: Vec<TrainingExample>, topology: &Topology) -> Result<Dataset> {
        topology.validate()?;
        if examples.is_empty() {
            return Err(XorError::EmptyDataset);
        }
        for (i, ex) in examples.iter().enumerate() {
            if ex.input.len() != topology.input_nodes {
                return Err(XorError::DimensionMismatch {
                    context: format!("input of example {i}"),
                    expected: topology.input_nodes,
                    found: ex.input.len(),
                });
            }
            if !ex.input.iter().all(|x| x.is_finite()) || !ex.target.is_finite() {
                return Err(XorError::NonFinite(format!("example {i}")));
            }
            if !(0.0..=1.0).contains(&ex.target) {
                return Err(XorError::InvalidConfig(format!(
                    "target of example {i} is {}, expected a value in [0, 1]",
                    ex.target
                )));
            }
        }
        Ok(Dataset { examples })
    }

    /// The XOR truth table: (0,0)→0, (0,1)→1, (1,0)→1, (1,1)→0.
    pub fn xor() -> Dataset {
        Dataset {
            examples: vec![
                TrainingExample::new(vec![0.0, 0.0], 0.0),
                TrainingExample::new(vec![0.0, 1.0], 1.0),
                TrainingExample::new(vec![1.0, 0.0], 1.0),
                TrainingExample::new(vec![1.0, 1.0], 0.0),
            ],
        }
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    /// Input width shared by every example.
    pub fn input_width(&self) -> usize {
        self.examples[0].input.len()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
