use pm_core::models::AssignmentError;

/// Errors that can occur while assigning items to agents
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// Every item needs an agent, but there are not enough agents
    #[error("Infeasible: {items} items cannot each receive one of {agents} agents")]
    Infeasible {
        /// The number of catalog items
        items: usize,
        /// The number of agents
        agents: usize,
    },

    /// The solver reported an unbounded objective
    #[error("The assignment program is unbounded")]
    Unbounded,

    /// The solver returned values that do not read back as a 0/1 assignment
    #[error("The solver returned a fractional assignment for item {0}")]
    NonIntegral(String),

    /// Any other failure inside the solver
    #[error("Solver failure: {0}")]
    Solver(String),

    /// The produced assignment broke a structural invariant
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}
