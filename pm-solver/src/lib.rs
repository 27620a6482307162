/**
 * These are implementations of the assignment solvers.
 */
mod impls;
pub use impls::*;

/**
 * The 0/1 program shared by the exact solver and the exporters.
 */
mod formulation;
pub use formulation::*;

mod error;
pub use error::SolveError;

/// Write the assignment program to standard LP and MPS files
#[cfg(feature = "export")]
pub mod export;
