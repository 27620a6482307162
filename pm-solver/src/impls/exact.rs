use crate::{Formulation, Sense, SolveError};
use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, Variable, constraint, microlp, variable,
    variables,
};
use pm_core::{
    models::{AgentPool, Assignment, Config, Outcome, Status},
    ports::Assigner,
};
use tracing::{debug, info};

/// Settings for the exact assigner
#[derive(Clone, Debug)]
pub struct ExactSettings {
    /// A binary variable whose solved value exceeds this is read back as 1
    pub threshold: f64,
}

impl Default for ExactSettings {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

/// An assigner that solves the 0/1 assignment program (see [`Formulation`])
/// to global optimality with the microlp branch-and-bound solver.
pub struct ExactAssigner {
    config: Config,
    settings: ExactSettings,
}

impl Default for ExactAssigner {
    fn default() -> Self {
        Self::new(Config::default(), ExactSettings::default())
    }
}

impl ExactAssigner {
    /// An instance with the default settings
    pub fn with_config(config: Config) -> Self {
        Self::new(config, ExactSettings::default())
    }
}

impl Assigner for ExactAssigner {
    type Settings = ExactSettings;
    type Error = SolveError;

    fn new(config: Config, settings: Self::Settings) -> Self {
        Self { config, settings }
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn assign(&mut self, agents: &AgentPool) -> Result<Outcome, Self::Error> {
        let catalog = &self.config.catalog;
        let infeasible = || SolveError::Infeasible {
            items: catalog.len(),
            agents: agents.len(),
        };

        // An item row with no agents to draw from can never be satisfied; we
        // report that directly rather than handing the solver an empty row.
        if !self.config.is_feasible(agents.len()) {
            return Err(infeasible());
        }

        // With nothing to decide, every constraint is vacuous.
        if catalog.is_empty() || agents.is_empty() {
            let assignment = Assignment::unassigned(catalog);
            return Ok(Outcome::new(assignment, agents, Status::Optimal));
        }

        let program = Formulation::new(&self.config, agents);
        debug!(
            variables = program.num_variables(),
            constraints = program.num_constraints(),
            "built assignment program"
        );

        // x[i][j] is set when item i goes to agent j
        let mut vars = variables!();
        let x: Vec<Vec<Variable>> = (0..program.items())
            .map(|_| {
                (0..program.agents())
                    .map(|_| vars.add(variable().binary()))
                    .collect()
            })
            .collect();

        let mut objective = Expression::with_capacity(program.num_variables());
        for (i, row) in x.iter().enumerate() {
            for (j, &var) in row.iter().enumerate() {
                objective.add_mul(program.cost(i, j) as f64, var);
            }
        }

        let mut problem = vars.minimise(objective).using(microlp);

        // Every agent takes at most one item
        for j in 0..program.agents() {
            let load: Expression = x.iter().map(|row| row[j]).sum();
            problem = problem.with(constraint!(load <= 1));
        }

        // Every item goes to (at most) one agent
        for row in x.iter() {
            let cover: Expression = row.iter().copied().sum();
            problem = problem.with(match program.item_sense() {
                Sense::Equal => constraint!(cover == 1),
                Sense::AtMost => constraint!(cover <= 1),
            });
        }

        // Keep the relaxed program from leaving everything empty
        if let Some(total) = program.total_assignments() {
            let assigned: Expression = x.iter().flatten().copied().sum();
            let total = total as f64;
            problem = problem.with(constraint!(assigned == total));
        }

        let solution = problem.solve().map_err(|error| match error {
            ResolutionError::Infeasible => infeasible(),
            ResolutionError::Unbounded => SolveError::Unbounded,
            other => SolveError::Solver(other.to_string()),
        })?;

        // Read back which agent (if any) holds each item
        let mut slots = Vec::with_capacity(program.items());
        for (i, row) in x.iter().enumerate() {
            let mut chosen = row
                .iter()
                .enumerate()
                .filter(|&(_, &var)| solution.value(var) > self.settings.threshold)
                .map(|(j, _)| j);

            let slot = chosen.next();
            let fractional = chosen.next().is_some()
                || (slot.is_none() && program.item_sense() == Sense::Equal);
            if fractional {
                let item = catalog.get_index(i).map(ToString::to_string);
                return Err(SolveError::NonIntegral(item.unwrap_or_default()));
            }
            slots.push(slot);
        }

        let assignment = Assignment::from_slots(catalog, agents, &slots);
        assignment.validate(catalog, agents)?;

        let outcome = Outcome::new(assignment, agents, Status::Optimal);
        debug_assert_eq!(outcome.total_cost, program.objective(&slots));
        info!(total = outcome.total_cost, "exact assignment solved");
        Ok(outcome)
    }
}
