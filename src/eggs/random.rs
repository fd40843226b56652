//! Uniform random draws
//!
//! Cosmetic randomness only - nothing here is cryptographically secure.
//! Behind a trait so scenario tests can force exact draws.

use rand::RngCore;

/// Source of uniform draws in [0, 1)
pub trait UniformSource {
    fn draw(&mut self) -> f64;
}

/// Any rand generator is a source (thread RNG in the page, seeded Pcg32 in
/// tests and the native smoke run).
impl<R: RngCore> UniformSource for R {
    fn draw(&mut self) -> f64 {
        rand::Rng::random(self)
    }
}

/// Inclusive-ish integer sampler: `round((to - from) * draw + from)`
pub fn between(from: i32, to: i32, src: &mut impl UniformSource) -> i32 {
    ((to - from) as f64 * src.draw() + from as f64).round() as i32
}

/// Replays a fixed list of draws, in order
#[cfg(test)]
pub(crate) struct ScriptedDraws(std::collections::VecDeque<f64>);

#[cfg(test)]
impl ScriptedDraws {
    pub fn new(draws: &[f64]) -> Self {
        Self(draws.iter().copied().collect())
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl UniformSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        self.0.pop_front().expect("ran out of scripted draws")
    }
}
