/// Implementation using first-improvement pairwise swaps
#[cfg(feature = "local-search")]
pub mod local;

/// Implementation using a 0/1 integer program and the microlp solver
#[cfg(feature = "exact")]
pub mod exact;
