//! Forward propagation: ranges, determinism and hand-checked values.

use approx::assert_relative_eq;
use xornet::{forward, infer, sigmoid, Matrix, NetworkParameters, RandomInitializer, Topology};

fn params(seed: u64) -> NetworkParameters {
    NetworkParameters::initialized(&Topology::XOR, &mut RandomInitializer::seeded(seed))
}

#[test]
fn test_activations_lie_in_open_unit_interval() {
    for seed in 0..20 {
        let p = params(seed);
        for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
            let r = forward(&input, &p);
            assert_eq!(r.hidden.len(), 2);
            assert!(r.hidden.iter().all(|&h| h > 0.0 && h < 1.0));
            assert!(r.output > 0.0 && r.output < 1.0);
        }
    }
}

#[test]
fn test_forward_is_deterministic() {
    let p = params(42);
    let first = forward(&[1.0, 0.0], &p);
    for _ in 0..10 {
        assert_eq!(forward(&[1.0, 0.0], &p), first);
    }
}

#[test]
fn test_infer_matches_forward_output() {
    let p = params(9);
    assert_eq!(infer(&p, &[0.0, 1.0]), forward(&[0.0, 1.0], &p).output);
}

#[test]
fn test_zero_parameters_give_half_everywhere() {
    let p = NetworkParameters::zeros(&Topology::XOR);
    let r = forward(&[1.0, 1.0], &p);
    assert_eq!(r.hidden, vec![0.5, 0.5]);
    assert_eq!(r.output, 0.5);
}

#[test]
fn test_known_weights() {
    let p = NetworkParameters {
        weights_input_hidden: Matrix::from_data(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]),
        weights_hidden_output: Matrix::from_data(vec![vec![2.0, 2.0]]),
        biases_hidden: vec![0.0, 0.0],
        biases_output: vec![-2.0],
    };
    let r = forward(&[1.0, 0.0], &p);
    assert_relative_eq!(r.hidden[0], sigmoid(1.0), epsilon = 1e-15);
    assert_relative_eq!(r.hidden[1], sigmoid(-1.0), epsilon = 1e-15);
    // sigmoid(1) + sigmoid(-1) == 1, so the output pre-activation is 2·1 − 2 = 0.
    assert_relative_eq!(r.output, 0.5, epsilon = 1e-12);
}

#[test]
fn test_wider_hidden_layer() {
    let topology = Topology::with_hidden(5);
    let p = NetworkParameters::initialized(&topology, &mut RandomInitializer::seeded(1));
    assert_eq!(forward(&[0.5, 0.5], &p).hidden.len(), 5);
}

#[test]
#[should_panic]
fn test_short_input_panics() {
    forward(&[1.0], &params(0));
}
