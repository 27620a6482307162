use crate::models::Catalog;

/// The context an assignment runs in.
///
/// Solvers receive this at construction time; there is no process-wide catalog.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The items to assign, in reporting order
    #[cfg_attr(feature = "serde", serde(default))]
    pub catalog: Catalog,

    /// Whether items may be left without an agent.
    ///
    /// When false, every item must be assigned and a pool with fewer agents
    /// than items is infeasible. When true, empty slots cost nothing and
    /// exactly min(#items, #agents) items are assigned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_unassigned: bool,
}

impl Config {
    /// A strict configuration over `catalog`
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            allow_unassigned: false,
        }
    }

    /// Set whether items may be left without an agent
    pub fn with_unassigned(mut self, allow_unassigned: bool) -> Self {
        self.allow_unassigned = allow_unassigned;
        self
    }

    /// Whether a pool of `agents` agents can cover the catalog under this policy
    pub fn is_feasible(&self, agents: usize) -> bool {
        self.allow_unassigned || agents >= self.catalog.len()
    }

    /// How many items will end up with an agent
    pub fn capacity(&self, agents: usize) -> usize {
        self.catalog.len().min(agents)
    }
}
