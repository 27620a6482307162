use crate::models::{AgentPool, Config, Outcome};

/// Interface for strategies that assign catalog items to agents.
///
/// An assigner is built once for a [`Config`] and then asked to assign a pool
/// of agents. Implementations differ in the guarantee they offer, which they
/// report through [`Outcome::status`].
pub trait Assigner {
    /// Implementation-specific settings (e.g. a random source or tolerances)
    type Settings;

    /// Error type for assignment failures
    type Error: std::error::Error;

    /// Create a new instance for the given configuration and settings
    fn new(config: Config, settings: Self::Settings) -> Self;

    /// The configuration this instance was built for
    fn config(&self) -> &Config;

    /// Assign the configured catalog to `agents`.
    ///
    /// A successful outcome covers every catalog item exactly once and never
    /// uses an agent twice.
    fn assign(&mut self, agents: &AgentPool) -> Result<Outcome, Self::Error>;
}
