use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::filter::{DurationBucket, ALL};
use crate::core::query::{JobQuery, ResourceQuery};
use crate::core::ConfigProvider;
use crate::domain::model::{Difficulty, MAX_LEVEL};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub catalog: CatalogConfig,
    pub jobs: JobFilterConfig,
    pub resources: ResourceFilterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory the catalog paths are relative to.
    pub base_path: Option<String>,
    pub profile: Option<String>,
    pub jobs: Option<String>,
    pub resources: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilterConfig {
    pub location: String,
    pub min_match_score: u32,
}

impl Default for JobFilterConfig {
    fn default() -> Self {
        Self {
            location: ALL.to_string(),
            min_match_score: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFilterConfig {
    pub difficulty: String,
    pub duration: String,
}

impl Default for ResourceFilterConfig {
    fn default() -> Self {
        Self {
            difficulty: ALL.to_string(),
            duration: ALL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// in place so validation reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_base_path(&self) -> &str {
        self.catalog.base_path.as_deref().unwrap_or(".")
    }

    pub fn job_query(&self) -> JobQuery {
        let mut query = JobQuery::new();
        query.set_location(self.jobs.location.clone());
        query.set_min_match_score(self.jobs.min_match_score);
        query
    }

    pub fn resource_query(&self) -> Result<ResourceQuery> {
        let mut query = ResourceQuery::new();
        query.set_difficulty(self.resources.difficulty.trim());
        query.set_duration(self.resources.duration.parse::<DurationBucket>()?);
        Ok(query)
    }

    pub fn validate_config(&self) -> Result<()> {
        require_resolved("service.endpoint", &self.service.endpoint)?;
        validate_url("service.endpoint", &self.service.endpoint)?;

        if let Some(base) = &self.catalog.base_path {
            require_resolved("catalog.base_path", base)?;
            validate_path("catalog.base_path", base)?;
        }
        for (field, file) in [
            ("catalog.profile", &self.catalog.profile),
            ("catalog.jobs", &self.catalog.jobs),
            ("catalog.resources", &self.catalog.resources),
        ] {
            if let Some(file) = file {
                require_resolved(field, file)?;
                validate_path(field, file)?;
                validate_file_extension(field, file, &["json"])?;
            }
        }

        validate_range(
            "jobs.min_match_score",
            self.jobs.min_match_score,
            0,
            u32::from(MAX_LEVEL),
        )?;

        let difficulty = self.resources.difficulty.trim();
        if difficulty != ALL {
            difficulty.parse::<Difficulty>()?;
        }
        self.resources.duration.parse::<DurationBucket>()?;

        Ok(())
    }
}

/// Fails when a `${VAR}` placeholder survived substitution.
fn require_resolved(field: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(AdvisorError::MissingConfigError {
            field: field.to_string(),
        });
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn advisory_endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn profile_file(&self) -> Option<&str> {
        self.catalog.profile.as_deref()
    }

    fn jobs_file(&self) -> Option<&str> {
        self.catalog.jobs.as_deref()
    }

    fn resources_file(&self) -> Option<&str> {
        self.catalog.resources.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.advisory_endpoint(), DEFAULT_ENDPOINT);
        assert!(config.jobs_file().is_none());
        assert_eq!(config.catalog_base_path(), ".");
        assert_eq!(config.job_query(), JobQuery::new());
        assert_eq!(config.resource_query().unwrap(), ResourceQuery::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[service]
endpoint = "https://advisor.example.com/api/analyze-skill-gap"

[catalog]
base_path = "./data"
jobs = "jobs.json"

[jobs]
location = "remote"
min_match_score = 80

[resources]
difficulty = "intermediate"
duration = "long"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.advisory_endpoint(),
            "https://advisor.example.com/api/analyze-skill-gap"
        );
        assert_eq!(config.jobs_file(), Some("jobs.json"));
        assert_eq!(config.catalog_base_path(), "./data");
        assert_eq!(config.job_query().location(), "remote");
        assert_eq!(config.job_query().min_match_score(), 80);
        assert_eq!(
            config.resource_query().unwrap().duration(),
            DurationBucket::Long
        );
        assert!(config.logging.verbose);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SKILLGAP_TEST_ENDPOINT", "https://test.advisor.com/api");

        let toml_content = r#"
[service]
endpoint = "${SKILLGAP_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.service.endpoint, "https://test.advisor.com/api");

        std::env::remove_var("SKILLGAP_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[service]
endpoint = "${SKILLGAP_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(AdvisorError::MissingConfigError { field }) => {
                assert_eq!(field, "service.endpoint")
            }
            other => panic!("expected missing config error, got {:?}", other),
        }
    }

    #[test]
    fn test_padded_difficulty_validates_and_filters() {
        let config =
            TomlConfig::from_toml_str("[resources]\ndifficulty = \" advanced \"\n").unwrap();

        assert!(config.validate().is_ok());
        let query = config.resource_query().unwrap();
        assert_eq!(query.difficulty(), "advanced");

        let resources = query.run(&crate::domain::sample::sample_resources());
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].difficulty, "Advanced");
    }

    #[test]
    fn test_config_validation() {
        let bad_score = TomlConfig::from_toml_str("[jobs]\nmin_match_score = 120\n").unwrap();
        assert!(bad_score.validate().is_err());

        let bad_duration = TomlConfig::from_toml_str("[resources]\nduration = \"forever\"\n").unwrap();
        assert!(bad_duration.validate().is_err());

        let bad_difficulty = TomlConfig::from_toml_str("[resources]\ndifficulty = \"expert\"\n").unwrap();
        assert!(bad_difficulty.validate().is_err());

        let bad_catalog = TomlConfig::from_toml_str("[catalog]\njobs = \"jobs.csv\"\n").unwrap();
        assert!(bad_catalog.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[service\nendpoint =").unwrap_err();
        assert!(matches!(err, AdvisorError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nendpoint = \"http://127.0.0.1:5000/api/analyze-skill-gap\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.advisory_endpoint(),
            "http://127.0.0.1:5000/api/analyze-skill-gap"
        );
    }
}
