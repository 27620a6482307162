use clap::ValueEnum;
use pm_core::models::{AgentId, AgentPool, Cost, ItemId, Outcome, Status};
use serde::Serialize;
use std::io::Write;

/// The ways an outcome can be written
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One `paper: name (email)` line per paper
    Text,
    /// A table with `item,name,email,cost` columns
    Csv,
    /// A report with the status, the total cost and every placement
    Json,
}

#[derive(Serialize)]
struct Row<'a> {
    item: &'a str,
    name: Option<&'a str>,
    email: Option<&'a str>,
    cost: Cost,
}

#[derive(Serialize)]
struct Report<'a> {
    status: Status,
    total_cost: Cost,
    placements: Vec<PlacementReport<'a>>,
}

#[derive(Serialize)]
struct PlacementReport<'a> {
    item: &'a ItemId,
    agent: Option<AgentReport<'a>>,
    cost: Cost,
}

#[derive(Serialize)]
struct AgentReport<'a> {
    id: &'a AgentId,
    name: &'a str,
}

impl OutputFormat {
    /// Write the outcome, in catalog order
    pub fn render<W: Write>(
        &self,
        outcome: &Outcome,
        agents: &AgentPool,
        buffer: &mut W,
    ) -> anyhow::Result<()> {
        match self {
            Self::Text => {
                for placement in outcome.placements(agents) {
                    match placement.agent {
                        Some(agent) => {
                            writeln!(buffer, "{}: {} ({})", placement.item, agent.name, agent.id)?
                        }
                        None => writeln!(buffer, "{}: None", placement.item)?,
                    }
                }
            }
            Self::Csv => {
                let mut writer = csv::Writer::from_writer(buffer);
                for placement in outcome.placements(agents) {
                    writer.serialize(Row {
                        item: placement.item.as_str(),
                        name: placement.agent.map(|agent| agent.name.as_str()),
                        email: placement.agent.map(|agent| agent.id.as_str()),
                        cost: placement.cost,
                    })?;
                }
                writer.flush()?;
            }
            Self::Json => {
                let report = Report {
                    status: outcome.status,
                    total_cost: outcome.total_cost,
                    placements: outcome
                        .placements(agents)
                        .map(|placement| PlacementReport {
                            item: placement.item,
                            agent: placement.agent.map(|agent| AgentReport {
                                id: &agent.id,
                                name: &agent.name,
                            }),
                            cost: placement.cost,
                        })
                        .collect(),
                };
                serde_json::to_writer_pretty(&mut *buffer, &report)?;
                writeln!(buffer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_core::models::{Agent, Assignment, Catalog};

    fn outcome() -> (Outcome, AgentPool) {
        let catalog = Catalog::new(["X", "Y"]).unwrap();
        let agents = [Agent::new("a@example.com", "Ada", ["Y", "X"])]
            .into_iter()
            .collect::<AgentPool>();
        let mut assignment = Assignment::unassigned(&catalog);
        assignment
            .assign(&"X".into(), Some("a@example.com".into()))
            .unwrap();
        (Outcome::new(assignment, &agents, Status::Optimal), agents)
    }

    fn render(format: OutputFormat) -> String {
        let (outcome, agents) = outcome();
        let mut buffer = Vec::new();
        format.render(&outcome, &agents, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text() {
        assert_eq!(render(OutputFormat::Text), "X: Ada (a@example.com)\nY: None\n");
    }

    #[test]
    fn test_csv() {
        assert_eq!(
            render(OutputFormat::Csv),
            "item,name,email,cost\nX,Ada,a@example.com,1\nY,,,0\n"
        );
    }

    #[test]
    fn test_json() {
        let report = serde_json::from_str::<serde_json::Value>(&render(OutputFormat::Json)).unwrap();
        assert_eq!(
            report,
            serde_json::json!({
                "status": "optimal",
                "total_cost": 1,
                "placements": [
                    {"item": "X", "agent": {"id": "a@example.com", "name": "Ada"}, "cost": 1},
                    {"item": "Y", "agent": null, "cost": 0},
                ]
            })
        );
    }
}
