//! Environment facts injected into the engine from outside the model.
//!
//! Only randomness lives here today; the engine never reaches for a global
//! generator, so tests can substitute a scripted oracle.
mod rng;

pub use rng::{PcgRng, RngContext, RngOracle, compute_seed};
