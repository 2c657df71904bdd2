pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{HttpAdvisoryClient, LocalStorage};
pub use config::TomlConfig;
pub use crate::core::{
    catalog::Catalogs,
    query::{JobQuery, ResourceQuery},
    session::{AnalysisSession, AnalysisStatus},
};
pub use utils::error::{AdvisorError, Result};
