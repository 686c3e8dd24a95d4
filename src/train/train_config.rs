use serde::{Serialize, Deserialize};
use crate::error::{Result, XorError};

/// Hyperparameters of a `train_loop` run.
///
/// # Fields
/// - `learning_rate`   — step size of every per-example update
/// - `epochs`          — number of full passes over the dataset
/// - `report_interval` — a `LossRecord` is emitted on every epoch index
///                       divisible by this value (epoch 0 included)
///
/// Missing fields in a JSON config fall back to the reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub report_interval: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, epochs: usize, report_interval: usize) -> Self {
        TrainConfig {
            learning_rate,
            epochs,
            report_interval,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(XorError::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(XorError::InvalidConfig("epochs must be at least 1".into()));
        }
        if self.report_interval == 0 {
            return Err(XorError::InvalidConfig("report_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of `LossRecord`s a run with this config emits.
    pub fn expected_records(&self) -> usize {
        self.epochs.div_ceil(self.report_interval)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(0.5, 10_000, 1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        let c = TrainConfig::default();
        assert_eq!(c, TrainConfig::new(0.5, 10_000, 1_000));
        assert!(c.validate().is_ok());
        assert_eq!(c.expected_records(), 10);
    }

    #[test]
    fn expected_records_rounds_up() {
        assert_eq!(TrainConfig::new(0.5, 10, 3).expected_records(), 4);
        assert_eq!(TrainConfig::new(0.5, 1, 1000).expected_records(), 1);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(TrainConfig::new(0.0, 10, 1).validate().is_err());
        assert!(TrainConfig::new(-0.1, 10, 1).validate().is_err());
        assert!(TrainConfig::new(f64::NAN, 10, 1).validate().is_err());
        assert!(TrainConfig::new(0.5, 0, 1).validate().is_err());
        assert!(TrainConfig::new(0.5, 10, 0).validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let c: TrainConfig = serde_json::from_str(r#"{ "epochs": 500 }"#).unwrap();
        assert_eq!(c, TrainConfig { epochs: 500, ..TrainConfig::default() });
    }
}
