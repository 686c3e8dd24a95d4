/// Logistic function `1 / (1 + e^-x)`.
///
/// Strictly inside (0, 1) for roughly `-709 < x < 36`. Outside that range
/// f64 rounding saturates it to exactly `0.0` or `1.0`; it never yields NaN.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output.
///
/// `a` must already be an activation, `a = sigmoid(z)`, so that
/// `σ'(z) = a · (1 − a)`. Passing the raw pre-activation `z` gives a wrong
/// gradient.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}
