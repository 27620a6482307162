use pm_core::models::{Agent, AgentPool};
use std::io::Read;

// timestamp, email, name, then at least one ranking column
const MIN_FIELDS: usize = 4;

/// Errors that can occur while reading the rankings
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    /// A record is too short to hold an email, a name and a ranking
    #[error("Malformed record on line {line}: expected at least {MIN_FIELDS} fields, found {fields}")]
    Malformed { line: u64, fields: usize },

    /// The input is not valid CSV
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Read the agents from a form export.
///
/// The first record is a header. In every other record the first field (the
/// form timestamp) is ignored, the second is the agent's email, the third the
/// display name, and the rest the ranked papers, most preferred first. Cells
/// are trimmed and empty ranking cells are dropped.
pub fn read_agents(reader: impl Read) -> Result<AgentPool, RecordError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut agents = AgentPool::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < MIN_FIELDS {
            return Err(RecordError::Malformed {
                line: record.position().map_or(0, |position| position.line()),
                fields: record.len(),
            });
        }

        let ranking = record.iter().skip(3).filter(|cell| !cell.is_empty());
        agents.insert(Agent::new(&record[1], &record[2], ranking));
    }
    Ok(agents)
}
