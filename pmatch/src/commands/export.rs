use clap::ValueEnum;
use pm_solver::{
    Formulation,
    export::{export_lp, export_mps},
};
use std::{io::Write, str::FromStr};

// Same story here with the ExportFormat enum, as with the Method enum
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Mps,
    Lp,
}

impl ExportFormat {
    pub fn export<W: Write>(&self, program: &Formulation, buffer: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Mps => export_mps(program, buffer)?,
            Self::Lp => export_lp(program, buffer)?,
        };
        Ok(())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mps" | "MPS" => Ok(Self::Mps),
            "lp" | "LP" => Ok(Self::Lp),
            _ => Err(Self::Err::ExportExtension(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportFormatError {
    #[error("Unknown export format: {0}")]
    ExportExtension(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!("lp".parse::<ExportFormat>().unwrap(), ExportFormat::Lp);
        assert_eq!("MPS".parse::<ExportFormat>().unwrap(), ExportFormat::Mps);
        assert!(matches!(
            "json".parse::<ExportFormat>(),
            Err(ExportFormatError::ExportExtension(ext)) if ext == "json"
        ));
    }
}
