use clap::ValueEnum;
use pm_core::{
    models::{AgentPool, Config, Outcome},
    ports::Assigner as _,
};
use pm_solver::{SolveError, exact::ExactAssigner, local::LocalSearch};

// This explicitly articulates the available assigners for the `solve` subcommand
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Method {
    /// Hill-climb over pairwise swaps from a random start (pads with empty slots only under --allow-unassigned)
    Local,
    /// Solve the 0/1 program to optimality
    Exact,
}

// The same enum handles the particulars of constructing each assigner
impl Method {
    pub fn assign(
        &self,
        config: Config,
        seed: Option<u64>,
        agents: &AgentPool,
    ) -> Result<Outcome, SolveError> {
        match self {
            Method::Local => match seed {
                Some(seed) => LocalSearch::seeded(config, seed).assign(agents),
                None => LocalSearch::from_os_rng(config).assign(agents),
            },
            Method::Exact => ExactAssigner::with_config(config).assign(agents),
        }
    }
}
