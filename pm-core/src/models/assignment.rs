use crate::models::{Agent, AgentId, AgentPool, Catalog, Cost, ItemId, Map, Set, cost};
use std::fmt;

/// A mapping from every catalog item to the agent holding it, if any.
///
/// Entries are kept in catalog order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Assignment(Map<ItemId, Option<AgentId>>);

impl Assignment {
    /// An assignment with every catalog item left empty
    pub fn unassigned(catalog: &Catalog) -> Self {
        Self(catalog.iter().map(|item| (item.clone(), None)).collect())
    }

    /// Build an assignment from positional slots.
    ///
    /// `slots[i]` is the position in `agents` of the agent holding the `i`th
    /// catalog item. Slots beyond the catalog are ignored and missing slots
    /// are treated as empty.
    pub fn from_slots(catalog: &Catalog, agents: &AgentPool, slots: &[Option<usize>]) -> Self {
        Self(
            catalog
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let agent = slots
                        .get(i)
                        .copied()
                        .flatten()
                        .and_then(|j| agents.get_index(j))
                        .map(|agent| agent.id.clone());
                    (item.clone(), agent)
                })
                .collect(),
        )
    }

    /// Place `agent` on `item`, returning whoever held it before
    pub fn assign(
        &mut self,
        item: &ItemId,
        agent: Option<AgentId>,
    ) -> Result<Option<AgentId>, AssignmentError> {
        let slot = self
            .0
            .get_mut(item)
            .ok_or_else(|| AssignmentError::UnknownItem(item.clone()))?;
        Ok(std::mem::replace(slot, agent))
    }

    /// The agent holding `item`, if any
    pub fn get(&self, item: &ItemId) -> Option<&AgentId> {
        self.0.get(item).and_then(Option::as_ref)
    }

    /// The number of items covered (assigned or not)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the assignment covers no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of items that have an agent
    pub fn assigned(&self) -> usize {
        self.0.values().filter(|agent| agent.is_some()).count()
    }

    /// Iterate over (item, agent) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Option<&AgentId>)> {
        self.0.iter().map(|(item, agent)| (item, agent.as_ref()))
    }

    /// Sum the cost of every placement.
    ///
    /// Agents that cannot be found in `agents` are priced as empty slots;
    /// [`Assignment::validate`] rejects such assignments.
    pub fn total_cost(&self, agents: &AgentPool) -> Cost {
        self.iter()
            .map(|(item, agent)| cost(item, agent.and_then(|id| agents.get(id))))
            .sum()
    }

    /// Check the structural invariants against the problem it was built for:
    /// every catalog item appears exactly once and in order, every agent is
    /// known, and no agent holds two items.
    pub fn validate(&self, catalog: &Catalog, agents: &AgentPool) -> Result<(), AssignmentError> {
        for (expected, actual) in catalog.iter().zip(self.0.keys()) {
            if expected != actual {
                return Err(AssignmentError::MissingItem(expected.clone()));
            }
        }
        if let Some(item) = catalog.iter().nth(self.len()) {
            return Err(AssignmentError::MissingItem(item.clone()));
        }
        if let Some(item) = self.0.keys().nth(catalog.len()) {
            return Err(AssignmentError::UnknownItem(item.clone()));
        }

        let mut seen = Set::default();
        for agent in self.0.values().flatten() {
            if agents.get(agent).is_none() {
                return Err(AssignmentError::UnknownAgent(agent.clone()));
            }
            if !seen.insert(agent) {
                return Err(AssignmentError::DuplicateAgent(agent.clone()));
            }
        }
        Ok(())
    }
}

/// Errors arising from an assignment that does not fit its problem
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AssignmentError {
    /// An item outside the catalog was referenced
    #[error("Item is not in the catalog: {0}")]
    UnknownItem(ItemId),
    /// A catalog item has no entry, or is out of order
    #[error("Catalog item is missing from the assignment: {0}")]
    MissingItem(ItemId),
    /// An agent outside the pool was referenced
    #[error("Agent is not in the pool: {0}")]
    UnknownAgent(AgentId),
    /// An agent holds more than one item
    #[error("Agent is assigned more than once: {0}")]
    DuplicateAgent(AgentId),
}

/// How much trust a caller can place in an outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// No feasible assignment has a lower total cost
    Optimal,
    /// No single swap of two items' agents lowers the total cost
    LocalOptimum,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (match self {
            Self::Optimal => "Optimal",
            Self::LocalOptimum => "Local optimum",
        })
        .fmt(f)
    }
}

/// The result of a successful assignment run
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The completed assignment
    pub assignment: Assignment,
    /// The total cost of the assignment
    pub total_cost: Cost,
    /// The guarantee the producing solver offers
    pub status: Status,
}

impl Outcome {
    /// Wrap an assignment, pricing it against `agents`
    pub fn new(assignment: Assignment, agents: &AgentPool, status: Status) -> Self {
        let total_cost = assignment.total_cost(agents);
        Self {
            assignment,
            total_cost,
            status,
        }
    }

    /// Resolve each entry into a render-ready [`Placement`], in catalog order
    pub fn placements<'a>(&'a self, agents: &'a AgentPool) -> impl Iterator<Item = Placement<'a>> {
        self.assignment.iter().map(move |(item, agent)| {
            let agent = agent.and_then(|id| agents.get(id));
            Placement {
                item,
                agent,
                cost: cost(item, agent),
            }
        })
    }
}

/// One catalog entry of an outcome, with the agent resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<'a> {
    /// The item
    pub item: &'a ItemId,
    /// The agent holding the item, if any
    pub agent: Option<&'a Agent>,
    /// The cost of this placement
    pub cost: Cost,
}
