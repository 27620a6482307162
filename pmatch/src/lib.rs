use clap::Parser;
use pm_core::models::{AgentPool, Config as Problem};
use pm_solver::Formulation;
use std::io::Write as _;
use tracing::debug;

mod io;
pub use io::*;

mod config;
pub use self::config::*;

mod records;
pub use records::*;

mod render;
pub use render::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Solve {
                io,
                problem,
                method,
                seed,
                format,
            } => {
                let config = problem.load()?;
                let agents = io.agents()?;
                report_unknown(&config, &agents);

                let outcome = method.assign(config, seed, &agents)?;
                eprintln!("{}: total cost {}", outcome.status, outcome.total_cost);

                let mut output = io.sink()?;
                format.render(&outcome, &agents, &mut output)?;
                output.flush()?;
            }
            Commands::Export {
                io,
                problem,
                format,
            } => {
                let config = problem.load()?;
                let agents = io.agents()?;
                let format = io.export_format(format)?;

                let program = Formulation::new(&config, &agents);
                let mut output = io.sink()?;
                format.export(&program, &mut output)?;
                output.flush()?;
            }
        }

        Ok(())
    }
}

// Ranked papers outside the catalog are harmless (they only lengthen the
// ranking), but they are usually typos worth knowing about.
fn report_unknown(config: &Problem, agents: &AgentPool) {
    for agent in agents.iter() {
        for item in agent.ranking.iter() {
            if !config.catalog.contains(item) {
                debug!(agent = %agent.id, item = %item, "ranked paper is not in the catalog");
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer export format, please specify a valid format")]
    ExportInference,

    #[error(transparent)]
    ExportFormat(#[from] ExportFormatError),
}
