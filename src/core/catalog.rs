use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{JobPosting, LearningResource, UserProfile};
use crate::domain::sample::{sample_jobs, sample_profile, sample_resources};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;

/// The profile and the two catalogs the queries run over.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    pub profile: UserProfile,
    pub jobs: Vec<JobPosting>,
    pub resources: Vec<LearningResource>,
}

impl Catalogs {
    pub fn sample() -> Self {
        Self {
            profile: sample_profile(),
            jobs: sample_jobs(),
            resources: sample_resources(),
        }
    }

    /// Loads each configured catalog file; anything not configured comes
    /// from the built-in samples.
    pub async fn load<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        let profile: UserProfile = match config.profile_file() {
            Some(path) => load_json(storage, path).await?,
            None => sample_profile(),
        };
        let jobs: Vec<JobPosting> = match config.jobs_file() {
            Some(path) => load_json(storage, path).await?,
            None => sample_jobs(),
        };
        let resources: Vec<LearningResource> = match config.resources_file() {
            Some(path) => load_json(storage, path).await?,
            None => sample_resources(),
        };

        tracing::debug!(
            "Catalogs ready: {} skills, {} jobs, {} resources",
            profile.skills.len(),
            jobs.len(),
            resources.len()
        );

        Ok(Self {
            profile,
            jobs,
            resources,
        })
    }
}

pub async fn load_json<T, S>(storage: &S, path: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
    S: Storage,
{
    let bytes = storage.read_file(path).await?;
    let value: T = serde_json::from_slice(&bytes)?;
    value.validate()?;
    tracing::info!("Loaded catalog file {}", path);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AdvisorError;
    use std::collections::HashMap;

    struct MemoryStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl Storage for MemoryStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                AdvisorError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }
    }

    #[derive(Default)]
    struct Paths {
        profile: Option<String>,
        jobs: Option<String>,
        resources: Option<String>,
    }

    impl ConfigProvider for Paths {
        fn advisory_endpoint(&self) -> &str {
            "http://localhost:5000/api/analyze-skill-gap"
        }

        fn profile_file(&self) -> Option<&str> {
            self.profile.as_deref()
        }

        fn jobs_file(&self) -> Option<&str> {
            self.jobs.as_deref()
        }

        fn resources_file(&self) -> Option<&str> {
            self.resources.as_deref()
        }
    }

    fn storage_with(path: &str, body: serde_json::Value) -> MemoryStorage {
        let mut files = HashMap::new();
        files.insert(path.to_string(), body.to_string().into_bytes());
        MemoryStorage { files }
    }

    #[tokio::test]
    async fn test_unconfigured_catalogs_use_samples() {
        let storage = MemoryStorage {
            files: HashMap::new(),
        };
        let catalogs = Catalogs::load(&storage, &Paths::default()).await.unwrap();
        assert_eq!(catalogs, Catalogs::sample());
    }

    #[tokio::test]
    async fn test_jobs_file_replaces_sample_jobs() {
        let storage = storage_with(
            "jobs.json",
            serde_json::json!([{
                "title": "Platform Engineer",
                "company": "Cloudline",
                "location": "Islamabad, Pakistan",
                "requiredSkills": ["Kubernetes"],
                "description": "Run the platform",
                "matchScore": 64
            }]),
        );
        let paths = Paths {
            jobs: Some("jobs.json".to_string()),
            ..Paths::default()
        };

        let catalogs = Catalogs::load(&storage, &paths).await.unwrap();

        assert_eq!(catalogs.jobs.len(), 1);
        assert_eq!(catalogs.jobs[0].company, "Cloudline");
        assert_eq!(catalogs.resources, sample_resources());
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_rejected() {
        let storage = storage_with(
            "jobs.json",
            serde_json::json!([{
                "title": "Platform Engineer",
                "company": "Cloudline",
                "location": "Remote",
                "requiredSkills": [],
                "description": "",
                "matchScore": 140
            }]),
        );
        let paths = Paths {
            jobs: Some("jobs.json".to_string()),
            ..Paths::default()
        };

        let err = Catalogs::load(&storage, &paths).await.unwrap_err();
        assert!(matches!(err, AdvisorError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_missing_profile_file_fails() {
        let storage = MemoryStorage {
            files: HashMap::new(),
        };
        let paths = Paths {
            profile: Some("me.json".to_string()),
            ..Paths::default()
        };

        let err = Catalogs::load(&storage, &paths).await.unwrap_err();
        assert!(matches!(err, AdvisorError::IoError(_)));
    }
}
