use crate::activation::sigmoid_derivative;
use crate::network::forward::ForwardResult;
use crate::network::network::NetworkParameters;

/// Single-example gradient descent on the 2-layer network.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Backpropagates one example and updates `params` in place.
    ///
    /// `activations` must come from `forward(input, params)` with the current
    /// `params`. The output layer is updated first; the hidden error is then
    /// read from the already-updated hidden→output weights.
    pub fn step(
        &self,
        params: &mut NetworkParameters,
        input: &[f64],
        activations: &ForwardResult,
        target: f64,
    ) {
        let lr = self.learning_rate;
        let hidden = &activations.hidden;
        assert_eq!(hidden.len(), params.biases_hidden.len(), "hidden activation length must equal hidden_nodes");
        assert_eq!(input.len(), params.weights_input_hidden.cols, "input length must equal input_nodes");

        let output_delta = (target - activations.output) * sigmoid_derivative(activations.output);

        let w_ho = params.weights_hidden_output.row_mut(0);
        for (w, h) in w_ho.iter_mut().zip(hidden) {
            *w += lr * output_delta * h;
        }
        params.biases_output[0] += lr * output_delta;

        let hidden_deltas: Vec<f64> = params.weights_hidden_output.row(0).iter()
            .zip(hidden)
            .map(|(w, h)| output_delta * w * sigmoid_derivative(*h))
            .collect();

        for (i, delta) in hidden_deltas.iter().enumerate() {
            for (w, x) in params.weights_input_hidden.row_mut(i).iter_mut().zip(input) {
                *w += lr * delta * x;
            }
            params.biases_hidden[i] += lr * delta;
        }
    }
}
