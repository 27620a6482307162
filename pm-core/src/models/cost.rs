use crate::models::{Agent, ItemId};

/// The dissatisfaction of a single (item, agent) pairing, lower is better.
pub type Cost = usize;

/// Price the placement of `item` with `agent`.
///
/// - An empty slot (no agent) is free.
/// - A ranked item costs its zero-based position in the agent's ranking.
/// - An unranked item costs the length of the ranking, which is strictly
///   worse than anything the agent did rank.
pub fn cost(item: &ItemId, agent: Option<&Agent>) -> Cost {
    match agent {
        Some(agent) => agent.cost_of(item),
        None => 0,
    }
}
