use crate::network::network::NetworkParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Fills parameter containers with independent U[0, 1) draws.
///
/// Wraps the random source so a run can be reproduced from a seed.
pub struct RandomInitializer<R: Rng = StdRng> {
    rng: R,
}

impl RandomInitializer<StdRng> {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        RandomInitializer { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomInitializer { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomInitializer<R> {
    /// Overwrites every weight and bias in `params`. Shapes are left untouched.
    pub fn initialize(&mut self, params: &mut NetworkParameters) {
        params.weights_input_hidden.fill_uniform(&mut self.rng);
        params.weights_hidden_output.fill_uniform(&mut self.rng);
        for b in params.biases_hidden.iter_mut().chain(params.biases_output.iter_mut()) {
            *b = self.rng.gen::<f64>();
        }
        debug!(parameters = params.num_parameters(), "initialized network parameters");
    }
}
