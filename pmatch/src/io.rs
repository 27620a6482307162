use crate::{CliError, ExportFormat, read_agents};
use anyhow::Context as _;
use clap::Args;
use pm_core::models::AgentPool;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Both subcommands read the form export and write one artifact (an
// assignment or a program), so they share where those live.
#[derive(Args)]
pub struct IOArgs {
    /// The rankings CSV file, as exported from the sign-up form ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(Location))]
    rankings: Location,

    /// Where to write the assignment or program ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(Location))]
    output: Location,
}

impl IOArgs {
    /// Parse the rankings into the pool of agents
    pub fn agents(&self) -> anyhow::Result<AgentPool> {
        match &self.rankings {
            Location::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Unable to open rankings {}", path.display()))?;
                read_agents(BufReader::new(file))
                    .with_context(|| format!("Unable to read rankings {}", path.display()))
            }
            Location::Std => Ok(read_agents(stdin().lock())?),
        }
    }

    /// Open the destination for the rendered outcome or exported program
    pub fn sink(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            Location::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Location::Std => Ok(Box::new(stdout().lock())),
        }
    }

    /// The export format: the requested one, else inferred from the output's extension
    pub fn export_format(&self, requested: Option<ExportFormat>) -> Result<ExportFormat, CliError> {
        if let Some(format) = requested {
            return Ok(format);
        }
        let extension = match &self.output {
            Location::File(path) => path.extension().and_then(|ext| ext.to_str()),
            Location::Std => None,
        };
        Ok(extension
            .ok_or(CliError::ExportInference)?
            .parse::<ExportFormat>()?)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Location {
    File(PathBuf),
    Std,
}

impl FromStr for Location {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::File(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportFormatError;

    fn demo(name: &str) -> Location {
        Location::File(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("../demos")
                .join(name),
        )
    }

    fn writing_to(output: &str) -> IOArgs {
        IOArgs {
            rankings: Location::Std,
            output: output.parse().unwrap(),
        }
    }

    #[test]
    fn test_dash_is_std() {
        assert_eq!("-".parse::<Location>().unwrap(), Location::Std);
        assert_eq!(
            "out.lp".parse::<Location>().unwrap(),
            Location::File("out.lp".into())
        );
    }

    #[test]
    fn test_agents_from_file() {
        let io = IOArgs {
            rankings: demo("rankings.csv"),
            output: Location::Std,
        };
        let agents = io.agents().unwrap();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents.get_index(1).unwrap().name, "Alan Turing");
    }

    #[test]
    fn test_missing_rankings_name_the_file() {
        let io = IOArgs {
            rankings: demo("no-such-form.csv"),
            output: Location::Std,
        };
        let error = io.agents().unwrap_err();
        assert!(error.to_string().contains("no-such-form.csv"));
    }

    #[test]
    fn test_requested_format_wins() {
        let io = writing_to("program.mps");
        assert_eq!(
            io.export_format(Some(ExportFormat::Lp)).unwrap(),
            ExportFormat::Lp
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            writing_to("program.mps").export_format(None).unwrap(),
            ExportFormat::Mps
        );
        assert_eq!(
            writing_to("program.LP").export_format(None).unwrap(),
            ExportFormat::Lp
        );
    }

    #[test]
    fn test_format_cannot_be_inferred() {
        assert!(matches!(
            writing_to("-").export_format(None),
            Err(CliError::ExportInference)
        ));
        assert!(matches!(
            writing_to("program").export_format(None),
            Err(CliError::ExportInference)
        ));
        assert!(matches!(
            writing_to("assignment.json").export_format(None),
            Err(CliError::ExportFormat(ExportFormatError::ExportExtension(ext))) if ext == "json"
        ));
    }
}
