use crate::{Formulation, Sense};
use std::io::Write;

// LP readers limit the line length, so long sums are wrapped every few terms.
const TERMS_PER_LINE: usize = 8;

/// Errors that can occur while exporting the assignment program
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// With no items or no agents there are no variables to write
    #[error("Nothing to export: {items} items and {agents} agents produce no variables")]
    Empty {
        /// The number of catalog items
        items: usize,
        /// The number of agents
        agents: usize,
    },

    /// The buffer could not be written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn ensure_variables(program: &Formulation) -> Result<(), ExportError> {
    if program.num_variables() == 0 {
        Err(ExportError::Empty {
            items: program.items(),
            agents: program.agents(),
        })
    } else {
        Ok(())
    }
}

/// Export the assignment program in `.mps` format.
///
/// Variables are named `x_{item}_{agent}` by position, the objective row is
/// `cost`, agent rows are `a_{agent}`, item rows are `p_{item}`, and the
/// relaxed program adds the row `n_assigned`.
pub fn export_mps(program: &Formulation, buffer: &mut impl Write) -> Result<(), ExportError> {
    ensure_variables(program)?;

    // MPS is a somewhat archaic format, but is easy enough to generate.
    // https://www.ibm.com/docs/en/icos/22.1.2?topic=standard-records-in-mps-format
    // is a good reference.
    writeln!(buffer, "NAME paper_assignment")?;
    writeln!(buffer, "ROWS")?;
    writeln!(buffer, " N    cost")?;

    for j in 0..program.agents() {
        writeln!(buffer, " L    a_{j}")?;
    }
    let item_row = match program.item_sense() {
        Sense::Equal => "E",
        Sense::AtMost => "L",
    };
    for i in 0..program.items() {
        writeln!(buffer, " {item_row}    p_{i}")?;
    }
    let total = program.total_assignments();
    if total.is_some() {
        writeln!(buffer, " E    n_assigned")?;
    }

    // Every variable is integral, so the whole section sits inside one marker pair.
    writeln!(buffer, "COLUMNS")?;
    writeln!(buffer, "    MARKER    'MARKER'    'INTORG'")?;
    for i in 0..program.items() {
        for j in 0..program.agents() {
            let cost = program.cost(i, j);
            if cost != 0 {
                writeln!(buffer, "    x_{i}_{j}    cost    {cost}")?;
            }
            writeln!(buffer, "    x_{i}_{j}    a_{j}    1")?;
            writeln!(buffer, "    x_{i}_{j}    p_{i}    1")?;
            if total.is_some() {
                writeln!(buffer, "    x_{i}_{j}    n_assigned    1")?;
            }
        }
    }
    writeln!(buffer, "    MARKER    'MARKER'    'INTEND'")?;

    writeln!(buffer, "RHS")?;
    for j in 0..program.agents() {
        writeln!(buffer, "    RHS    a_{j}    1")?;
    }
    for i in 0..program.items() {
        writeln!(buffer, "    RHS    p_{i}    1")?;
    }
    if let Some(total) = total {
        writeln!(buffer, "    RHS    n_assigned    {total}")?;
    }

    writeln!(buffer, "BOUNDS")?;
    for i in 0..program.items() {
        for j in 0..program.agents() {
            writeln!(buffer, " BV BND    x_{i}_{j}")?;
        }
    }

    writeln!(buffer, "ENDATA")?;
    Ok(())
}

/// Export the assignment program in (CPLEX) `.lp` format, using the same
/// names as [`export_mps`].
pub fn export_lp(program: &Formulation, buffer: &mut impl Write) -> Result<(), ExportError> {
    ensure_variables(program)?;

    let variables = (0..program.items())
        .flat_map(|i| (0..program.agents()).map(move |j| (i, j)))
        .collect::<Vec<_>>();

    writeln!(buffer, "\\ Problem: paper_assignment")?;
    writeln!(buffer, "Minimize")?;
    write_sum(
        buffer,
        "cost",
        variables
            .iter()
            .map(|&(i, j)| (program.cost(i, j), format!("x_{i}_{j}"))),
    )?;
    writeln!(buffer)?;

    writeln!(buffer, "Subject To")?;
    for j in 0..program.agents() {
        write_sum(
            buffer,
            &format!("a_{j}"),
            (0..program.items()).map(|i| (1, format!("x_{i}_{j}"))),
        )?;
        writeln!(buffer, " <= 1")?;
    }
    let item_sense = match program.item_sense() {
        Sense::Equal => "=",
        Sense::AtMost => "<=",
    };
    for i in 0..program.items() {
        write_sum(
            buffer,
            &format!("p_{i}"),
            (0..program.agents()).map(|j| (1, format!("x_{i}_{j}"))),
        )?;
        writeln!(buffer, " {item_sense} 1")?;
    }
    if let Some(total) = program.total_assignments() {
        write_sum(
            buffer,
            "n_assigned",
            variables.iter().map(|&(i, j)| (1, format!("x_{i}_{j}"))),
        )?;
        writeln!(buffer, " = {total}")?;
    }

    writeln!(buffer, "Binary")?;
    for chunk in variables.chunks(TERMS_PER_LINE) {
        let names = chunk
            .iter()
            .map(|(i, j)| format!("x_{i}_{j}"))
            .collect::<Vec<_>>();
        writeln!(buffer, " {}", names.join(" "))?;
    }

    writeln!(buffer, "End")?;
    Ok(())
}

// Write ` name: c0 v0 + c1 v1 + ...`, wrapping long sums. The caller finishes
// the line (with a relation, or just a newline for the objective).
fn write_sum(
    buffer: &mut impl Write,
    name: &str,
    terms: impl Iterator<Item = (usize, String)>,
) -> Result<(), std::io::Error> {
    write!(buffer, " {name}:")?;
    for (n, (coefficient, variable)) in terms.enumerate() {
        if n > 0 {
            if n % TERMS_PER_LINE == 0 {
                write!(buffer, "\n   ")?;
            }
            write!(buffer, " +")?;
        }
        write!(buffer, " {coefficient} {variable}")?;
    }
    Ok(())
}
