use crate::domain::model::{GapRequest, JobPosting, LearningResource, SkillGap};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn advisory_endpoint(&self) -> &str;
    fn profile_file(&self) -> Option<&str>;
    fn jobs_file(&self) -> Option<&str>;
    fn resources_file(&self) -> Option<&str>;
}

/// The external skill gap analysis service.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn analyze(&self, request: &GapRequest) -> Result<SkillGap>;
}

// Field access used by the catalog predicates.

pub trait Located {
    fn location(&self) -> &str;
}

pub trait Scored {
    fn match_score(&self) -> u8;
}

pub trait Graded {
    fn difficulty(&self) -> &str;
}

pub trait Timed {
    fn duration(&self) -> &str;
}

impl Located for JobPosting {
    fn location(&self) -> &str {
        &self.location
    }
}

impl Scored for JobPosting {
    fn match_score(&self) -> u8 {
        self.match_score
    }
}

impl Graded for LearningResource {
    fn difficulty(&self) -> &str {
        &self.difficulty
    }
}

impl Timed for LearningResource {
    fn duration(&self) -> &str {
        &self.duration
    }
}
