use crate::SolveError;
use pm_core::{
    models::{AgentPool, Assignment, Catalog, Config, Cost, ItemId, Outcome, Status, cost},
    ports::Assigner,
};
use rand::{Rng, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};
use tracing::{debug, info};

/// A hill-climbing assigner over pairwise swaps.
///
/// Starting from a random assignment, it scans every pair of catalog items
/// (in catalog order) and swaps their agents whenever that strictly lowers
/// the pair's combined cost, repeating full passes until a pass makes no
/// swap. The total cost is a non-negative integer that drops with every
/// swap, so the search always terminates, at an assignment no single swap
/// can improve. It is not necessarily a global optimum.
///
/// All randomness comes from the injected random source and is confined to
/// the starting point, so a seeded source makes the whole run reproducible.
pub struct LocalSearch<R = StdRng> {
    config: Config,
    rng: R,
}

impl LocalSearch<StdRng> {
    /// A reproducible instance, seeded with `seed`
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// An instance seeded from the operating system
    pub fn from_os_rng(config: Config) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> LocalSearch<R> {
    // Pair the catalog with a shuffled list of agent positions, dropping the
    // tail of the shuffle if there are too many agents and padding with empty
    // slots if there are too few.
    fn initial_slots(&mut self, agents: &AgentPool) -> Vec<Option<usize>> {
        let items = self.config.catalog.len();
        let mut order = (0..agents.len()).collect::<Vec<_>>();
        order.shuffle(&mut self.rng);
        order.truncate(items);

        let mut slots = order.into_iter().map(Some).collect::<Vec<_>>();
        slots.resize(items, None);
        slots
    }
}

impl<R: Rng> Assigner for LocalSearch<R> {
    type Settings = R;
    type Error = SolveError;

    fn new(config: Config, rng: Self::Settings) -> Self {
        Self { config, rng }
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn assign(&mut self, agents: &AgentPool) -> Result<Outcome, Self::Error> {
        if !self.config.is_feasible(agents.len()) {
            return Err(SolveError::Infeasible {
                items: self.config.catalog.len(),
                agents: agents.len(),
            });
        }

        let mut slots = self.initial_slots(agents);
        let search = Search::new(&self.config.catalog, agents);
        let initial = search.total(&slots);

        let mut passes = 0;
        let mut swaps = 0;
        loop {
            passes += 1;
            let count = search.sweep(&mut slots);
            debug!(pass = passes, swaps = count, "completed swap pass");
            swaps += count;
            if count == 0 {
                break;
            }
        }

        let assignment = Assignment::from_slots(&self.config.catalog, agents, &slots);
        assignment.validate(&self.config.catalog, agents)?;

        let outcome = Outcome::new(assignment, agents, Status::LocalOptimum);
        info!(
            initial,
            total = outcome.total_cost,
            passes,
            swaps,
            "local search converged"
        );
        Ok(outcome)
    }
}

// The read-only half of the search: the items in catalog order and the pool
// the slots point into.
struct Search<'a> {
    items: Vec<&'a ItemId>,
    agents: &'a AgentPool,
}

impl<'a> Search<'a> {
    fn new(catalog: &'a Catalog, agents: &'a AgentPool) -> Self {
        Self {
            items: catalog.iter().collect(),
            agents,
        }
    }

    fn price(&self, item: usize, slot: Option<usize>) -> Cost {
        cost(
            self.items[item],
            slot.and_then(|agent| self.agents.get_index(agent)),
        )
    }

    fn total(&self, slots: &[Option<usize>]) -> Cost {
        slots
            .iter()
            .enumerate()
            .map(|(item, slot)| self.price(item, *slot))
            .sum()
    }

    // One full first-improvement pass over every pair i < j. Returns the
    // number of swaps made.
    fn sweep(&self, slots: &mut [Option<usize>]) -> usize {
        let mut swaps = 0;
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                let (si, sj) = (slots[i], slots[j]);
                let current = self.price(i, si) + self.price(j, sj);
                let swapped = self.price(i, sj) + self.price(j, si);
                if swapped < current {
                    slots.swap(i, j);
                    swaps += 1;
                }
            }
        }
        swaps
    }
}
