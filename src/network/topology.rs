use serde::{Serialize, Deserialize};
use crate::error::{Result, XorError};

/// Layer widths of the single-hidden-layer network.
///
/// Fields:
/// - `input_nodes`  — length of every input vector
/// - `hidden_nodes` — number of sigmoid units in the hidden layer
/// - `output_nodes` — number of output units; the network has exactly one
///
/// The depth is fixed (input → hidden → output); only the widths are carried
/// here so that construction and training take them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_nodes: usize,
    pub hidden_nodes: usize,
    pub output_nodes: usize,
}

impl Topology {
    /// The reference 2-2-1 network.
    pub const XOR: Topology = Topology { input_nodes: 2, hidden_nodes: 2, output_nodes: 1 };

    /// Same widths as `XOR` but with `hidden_nodes` hidden units.
    pub fn with_hidden(hidden_nodes: usize) -> Topology {
        Topology { hidden_nodes, ..Topology::XOR }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_nodes == 0 {
            return Err(XorError::InvalidConfig("input_nodes must be at least 1".into()));
        }
        if self.hidden_nodes == 0 {
            return Err(XorError::InvalidConfig("hidden_nodes must be at least 1".into()));
        }
        if self.output_nodes != 1 {
            return Err(XorError::InvalidConfig(format!(
                "output_nodes must be 1, got {}",
                self.output_nodes
            )));
        }
        Ok(())
    }
}

impl Default for Topology {
    fn default() -> Self {
        Topology::XOR
    }
}
