//! Problem configuration management.
//!
//! The catalog of papers and the assignment policy are loaded from layered
//! sources with a clear precedence order, so that the same rankings can be
//! re-run against a different catalog without touching any code.

use anyhow::anyhow;
use clap::Args;
use pm_core::models::Config;
use std::path::{Path, PathBuf};

/// Command-line arguments that describe the problem (as opposed to the data)
#[derive(Args, Debug)]
pub struct ProblemArgs {
    /// Path to the configuration file holding the paper catalog
    #[arg(short, long, env = "PMATCH_CONFIG")]
    pub config: PathBuf,

    /// Allow papers to remain unassigned when there are fewer students than papers
    #[arg(long)]
    pub allow_unassigned: bool,
}

impl ProblemArgs {
    /// Load the configuration these arguments point at
    pub fn load(&self) -> anyhow::Result<Config> {
        let mut config = load(&self.config)?;
        if self.allow_unassigned {
            config.allow_unassigned = true;
        }
        Ok(config)
    }
}

/// Load configuration from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The given config file
/// 3. Default values (lowest priority)
///
/// Environment variables are mapped using the pattern `PMATCH_<KEY>`.
///
/// # Examples
///
/// ```bash
/// # Leave papers unassigned rather than failing on a short class
/// export PMATCH_ALLOW_UNASSIGNED=true
/// ```
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let mut config = config::Config::builder();

    // Start with default values
    config = config.add_source(config::Config::try_from(&Config::default())?);

    // Layer on the config file, which must exist
    if path.exists() {
        config = config.add_source(config::File::from(path));
    } else {
        return Err(anyhow!("Config file {} does not exist", path.display()));
    }

    // Override with environment variables
    config = config.add_source(
        config::Environment::with_prefix("PMATCH")
            .prefix_separator("_")
            .try_parsing(true),
    );

    let built_config = config.build()?;
    built_config.try_deserialize().map_err(Into::into)
}
