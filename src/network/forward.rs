use crate::activation::sigmoid;
use crate::math::matrix::dot;
use crate::network::network::NetworkParameters;

/// Activations of one forward pass, kept only until backprop has used them.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardResult {
    pub hidden: Vec<f64>,
    pub output: f64,
}

/// Forward pass: hidden = σ(W_ih·x + b_h), output = σ(W_ho[0]·hidden + b_o[0]).
///
/// # Panics
/// Panics if `input.len()` differs from the network's input width.
pub fn forward(input: &[f64], params: &NetworkParameters) -> ForwardResult {
    assert_eq!(
        input.len(),
        params.weights_input_hidden.cols,
        "input length must equal input_nodes"
    );

    let hidden: Vec<f64> = params.weights_input_hidden.data.iter()
        .zip(params.biases_hidden.iter())
        .map(|(weights, bias)| sigmoid(dot(weights, input) + bias))
        .collect();

    let output = sigmoid(dot(params.weights_hidden_output.row(0), &hidden) + params.biases_output[0]);

    ForwardResult { hidden, output }
}

/// Inference entry point; returns only the network output.
pub fn infer(params: &NetworkParameters, input: &[f64]) -> f64 {
    forward(input, params).output
}
