use crate::math::matrix::Matrix;
use crate::network::init::RandomInitializer;
use crate::network::topology::Topology;
use rand::Rng;
use serde::Serialize;

/// Every trainable value of the network.
///
/// Shapes are fixed at construction and never change:
/// - `weights_input_hidden`  — hidden_nodes × input_nodes
/// - `weights_hidden_output` — output_nodes × hidden_nodes
/// - `biases_hidden`         — hidden_nodes
/// - `biases_output`         — output_nodes
///
/// The training loop holds the only `&mut` to this value for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkParameters {
    pub weights_input_hidden: Matrix,
    pub weights_hidden_output: Matrix,
    pub biases_hidden: Vec<f64>,
    pub biases_output: Vec<f64>,
}

impl NetworkParameters {
    /// Allocates correctly-shaped, all-zero containers.
    pub fn zeros(topology: &Topology) -> NetworkParameters {
        NetworkParameters {
            weights_input_hidden: Matrix::zeros(topology.hidden_nodes, topology.input_nodes),
            weights_hidden_output: Matrix::zeros(topology.output_nodes, topology.hidden_nodes),
            biases_hidden: vec![0.0; topology.hidden_nodes],
            biases_output: vec![0.0; topology.output_nodes],
        }
    }

    /// Construction entry point: allocate, then fill every value from U[0, 1).
    pub fn initialized<R: Rng>(
        topology: &Topology,
        initializer: &mut RandomInitializer<R>,
    ) -> NetworkParameters {
        let mut params = NetworkParameters::zeros(topology);
        initializer.initialize(&mut params);
        params
    }

    /// Widths implied by the stored shapes.
    pub fn topology(&self) -> Topology {
        Topology {
            input_nodes: self.weights_input_hidden.cols,
            hidden_nodes: self.weights_input_hidden.rows,
            output_nodes: self.weights_hidden_output.rows,
        }
    }

    /// True when the four containers agree with each other and with `topology`.
    pub fn has_shape(&self, topology: &Topology) -> bool {
        self.weights_input_hidden.shape() == (topology.hidden_nodes, topology.input_nodes)
            && self.weights_hidden_output.shape() == (topology.output_nodes, topology.hidden_nodes)
            && self.biases_hidden.len() == topology.hidden_nodes
            && self.biases_output.len() == topology.output_nodes
    }

    pub fn is_finite(&self) -> bool {
        self.weights_input_hidden.is_finite()
            && self.weights_hidden_output.is_finite()
            && self.biases_hidden.iter().all(|x| x.is_finite())
            && self.biases_output.iter().all(|x| x.is_finite())
    }

    /// Total number of trainable scalars.
    pub fn num_parameters(&self) -> usize {
        let (hr, hc) = self.weights_input_hidden.shape();
        let (or, oc) = self.weights_hidden_output.shape();
        hr * hc + or * oc + self.biases_hidden.len() + self.biases_output.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let params = NetworkParameters::zeros(&Topology::XOR);
        assert!(params.has_shape(&Topology::XOR));
        assert_eq!(params.topology(), Topology::XOR);
        assert_eq!(params.num_parameters(), 9);
    }

    #[test]
    fn initialized_is_seed_deterministic() {
        let a = NetworkParameters::initialized(&Topology::XOR, &mut RandomInitializer::seeded(3));
        let b = NetworkParameters::initialized(&Topology::XOR, &mut RandomInitializer::seeded(3));
        assert_eq!(a, b);
        assert_ne!(a, NetworkParameters::zeros(&Topology::XOR));
    }
}
