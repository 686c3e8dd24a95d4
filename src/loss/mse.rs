pub struct MseLoss;

impl MseLoss {
    /// Scalar loss for one output: ½(predicted − target)²
    pub fn loss(predicted: f64, target: f64) -> f64 {
        let diff = predicted - target;
        0.5 * diff * diff
    }

    /// ∂loss/∂predicted: predicted − target
    pub fn derivative(predicted: f64, target: f64) -> f64 {
        predicted - target
    }
}
