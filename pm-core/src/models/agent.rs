use crate::models::{AgentId, Cost, ItemId, Map};
use tracing::warn;

/// A participant who receives at most one item.
///
/// The ranking is taken verbatim from the input: it may omit catalog items,
/// repeat them, or name items that are not in the catalog at all. None of
/// these are errors; they simply fall through to the penalty in
/// [`Agent::cost_of`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// The unique key of the agent (e.g. an email address)
    pub id: AgentId,
    /// The display name
    pub name: String,
    /// Ranked items, most preferred first
    pub ranking: Vec<ItemId>,
}

impl Agent {
    /// Create an agent from its key, display name and ranking
    pub fn new(
        id: impl Into<AgentId>,
        name: impl Into<String>,
        ranking: impl IntoIterator<Item = impl Into<ItemId>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ranking: ranking.into_iter().map(Into::into).collect(),
        }
    }

    /// The zero-based position of the first occurrence of `item`, if ranked
    pub fn rank(&self, item: &ItemId) -> Option<usize> {
        self.ranking.iter().position(|ranked| ranked == item)
    }

    /// The cost charged for any item this agent did not rank
    pub fn penalty(&self) -> Cost {
        self.ranking.len()
    }

    /// The cost of handing `item` to this agent
    pub fn cost_of(&self, item: &ItemId) -> Cost {
        self.rank(item).unwrap_or_else(|| self.penalty())
    }
}

/// The ordered collection of agents taking part in an assignment, keyed by [`AgentId`].
///
/// Order is insertion order, which the solvers rely on for a stable layout.
#[derive(Clone, Debug, Default)]
pub struct AgentPool(Map<AgentId, Agent>);

impl AgentPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent to the pool.
    ///
    /// An agent whose key is already present replaces the earlier entry in
    /// its original position, and the earlier entry is returned.
    pub fn insert(&mut self, agent: Agent) -> Option<Agent> {
        let previous = self.0.insert(agent.id.clone(), agent);
        if let Some(previous) = &previous {
            warn!(agent = %previous.id, "replacing earlier preferences for agent");
        }
        previous
    }

    /// The number of agents
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pool has no agents
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an agent by key
    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.0.get(id)
    }

    /// Look up an agent by position
    pub fn get_index(&self, index: usize) -> Option<&Agent> {
        self.0.get_index(index).map(|(_, agent)| agent)
    }

    /// The position of the agent with the given key
    pub fn index_of(&self, id: &AgentId) -> Option<usize> {
        self.0.get_index_of(id)
    }

    /// Iterate over the agents in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Agent> {
        self.0.values()
    }
}

impl FromIterator<Agent> for AgentPool {
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        let mut pool = Self::new();
        for agent in iter {
            pool.insert(agent);
        }
        pool
    }
}
