mod assigner;

pub use assigner::Assigner;
