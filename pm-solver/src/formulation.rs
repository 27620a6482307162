use pm_core::models::{AgentPool, Config, Cost, cost};

/// The comparison used by a constraint row, against a right-hand side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    /// lhs <= rhs
    AtMost,
    /// lhs == rhs
    Equal,
}

/// The 0/1 assignment program for a configuration and a pool of agents.
///
/// There is one binary variable `x[i][j]` for every catalog item `i` and
/// agent `j`, set when the item goes to the agent. The rows are:
///
/// - one per agent: Σ_i x[i][j] <= 1,
/// - one per item: Σ_j x[i][j] == 1 (strict) or <= 1 (unassigned allowed),
/// - when unassigned items are allowed, Σ_ij x[i][j] == min(#items, #agents),
///   so that the program does not cheat by leaving everything empty.
///
/// The objective is Σ_ij cost(i, j) x[i][j], to be minimized.
#[derive(Clone, Debug, PartialEq)]
pub struct Formulation {
    items: usize,
    agents: usize,
    // row-major, one row per item
    costs: Vec<Cost>,
    allow_unassigned: bool,
}

impl Formulation {
    /// Price every (item, agent) pair of the problem
    pub fn new(config: &Config, agents: &AgentPool) -> Self {
        let costs = config
            .catalog
            .iter()
            .flat_map(|item| agents.iter().map(move |agent| cost(item, Some(agent))))
            .collect();

        Self {
            items: config.catalog.len(),
            agents: agents.len(),
            costs,
            allow_unassigned: config.allow_unassigned,
        }
    }

    /// The number of catalog items
    pub fn items(&self) -> usize {
        self.items
    }

    /// The number of agents
    pub fn agents(&self) -> usize {
        self.agents
    }

    /// The objective coefficient of `x[item][agent]`
    pub fn cost(&self, item: usize, agent: usize) -> Cost {
        self.costs[item * self.agents + agent]
    }

    /// The sense of the per-item rows
    pub fn item_sense(&self) -> Sense {
        if self.allow_unassigned {
            Sense::AtMost
        } else {
            Sense::Equal
        }
    }

    /// The pinned total number of assignments, if the program has that row
    pub fn total_assignments(&self) -> Option<usize> {
        self.allow_unassigned.then(|| self.items.min(self.agents))
    }

    /// The number of decision variables
    pub fn num_variables(&self) -> usize {
        self.items * self.agents
    }

    /// The number of constraint rows
    pub fn num_constraints(&self) -> usize {
        self.agents + self.items + usize::from(self.allow_unassigned)
    }

    /// Evaluate the objective at a positional assignment (see
    /// [`pm_core::models::Assignment::from_slots`]); empty slots are free.
    pub fn objective(&self, slots: &[Option<usize>]) -> Cost {
        slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|j| self.cost(i, j)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_core::models::{Agent, Catalog};

    fn problem(allow_unassigned: bool) -> Formulation {
        let config = Config::new(Catalog::new(["X", "Y", "Z"]).unwrap())
            .with_unassigned(allow_unassigned);
        let agents = [
            Agent::new("a@example.com", "A", ["Y", "X"]),
            Agent::new("b@example.com", "B", ["Z"]),
        ]
        .into_iter()
        .collect();
        Formulation::new(&config, &agents)
    }

    #[test]
    fn test_costs() {
        let program = problem(false);
        assert_eq!(program.items(), 3);
        assert_eq!(program.agents(), 2);
        assert_eq!(program.num_variables(), 6);

        // item X
        assert_eq!(program.cost(0, 0), 1);
        assert_eq!(program.cost(0, 1), 1);
        // item Y
        assert_eq!(program.cost(1, 0), 0);
        assert_eq!(program.cost(1, 1), 1);
        // item Z
        assert_eq!(program.cost(2, 0), 2);
        assert_eq!(program.cost(2, 1), 0);
    }

    #[test]
    fn test_rows() {
        let strict = problem(false);
        assert_eq!(strict.item_sense(), Sense::Equal);
        assert_eq!(strict.total_assignments(), None);
        assert_eq!(strict.num_constraints(), 5);

        let relaxed = problem(true);
        assert_eq!(relaxed.item_sense(), Sense::AtMost);
        assert_eq!(relaxed.total_assignments(), Some(2));
        assert_eq!(relaxed.num_constraints(), 6);
    }

    #[test]
    fn test_objective() {
        let program = problem(true);
        assert_eq!(program.objective(&[None, Some(0), Some(1)]), 0);
        assert_eq!(program.objective(&[Some(0), None, Some(1)]), 1);
        assert_eq!(program.objective(&[]), 0);
    }
}
