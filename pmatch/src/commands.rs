use super::{IOArgs, OutputFormat, ProblemArgs};
use clap::Subcommand;

mod export;
mod solve;

pub use export::{ExportFormat, ExportFormatError};
pub use solve::Method;

#[derive(Subcommand)]
pub enum Commands {
    /// Assign the catalog's papers to the ranked students and report the result
    Solve {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        problem: ProblemArgs,

        /// The assignment method; both fail on a class with fewer students than papers unless --allow-unassigned is set
        #[arg(short, long, default_value = "exact")]
        method: Method,

        /// Seed for the local search's random start (if omitted, seeded from the OS)
        #[arg(long)]
        seed: Option<u64>,

        /// How to write the assignment
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Construct the 0/1 assignment program and export to a standard format
    Export {
        #[command(flatten)]
        io: IOArgs,

        #[command(flatten)]
        problem: ProblemArgs,

        /// The file format to use (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
}
