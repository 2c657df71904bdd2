use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "skillgap")]
#[command(about = "Career skill gap advisor: profile, job matches, learning paths")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the advisory service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the profile, skill chart and learning progress
    Profile,
    /// List the target roles available for analysis
    Roles,
    /// List job matches, best first
    Jobs {
        /// Location substring, or "all"
        #[arg(long)]
        location: Option<String>,
        /// Minimum match score (0-100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        min_score: Option<u32>,
    },
    /// List learning resources
    Resources {
        /// beginner, intermediate, advanced or "all"
        #[arg(long)]
        difficulty: Option<String>,
        /// short, medium, long or "all"
        #[arg(long)]
        duration: Option<String>,
    },
    /// Ask the advisory service for a skill gap report
    Analyze {
        /// Target role; defaults to the profile's target role
        #[arg(long)]
        role: Option<String>,
    },
}

impl CliConfig {
    /// Loads the configuration file (or defaults), applies command line
    /// overrides and validates the result.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if self.verbose {
            config.logging.verbose = true;
        }
        if self.log_json {
            config.logging.json = true;
        }

        match &self.command {
            Command::Jobs {
                location,
                min_score,
            } => {
                if let Some(location) = location {
                    config.jobs.location = location.clone();
                }
                if let Some(score) = min_score {
                    config.jobs.min_match_score = *score;
                }
            }
            Command::Resources {
                difficulty,
                duration,
            } => {
                if let Some(difficulty) = difficulty {
                    config.resources.difficulty = difficulty.clone();
                }
                if let Some(duration) = duration {
                    config.resources.duration = duration.clone();
                }
            }
            Command::Profile | Command::Roles | Command::Analyze { .. } => {}
        }

        config.validate()?;
        Ok(config)
    }
}
