//! Verification collaborators
//!
//! The real validation contract lives in the hosted backend; this module
//! provides the simulated stand-in used in development and tests.

pub mod simulated;

pub use simulated::SimulatedVerifier;

#[cfg(test)]
mod tests;
