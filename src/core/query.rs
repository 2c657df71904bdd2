use crate::core::filter::{
    filter, DifficultyEquals, DurationBucket, LocationMatches, PredicateSet, ScoreAtLeast, ALL,
};
use crate::core::rank::rank;
use crate::domain::model::{JobPosting, LearningResource};

/// Job listing selections: location and minimum match score. Results are
/// ranked by match score, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    location: String,
    min_match_score: u32,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            location: ALL.to_string(),
            min_match_score: 0,
        }
    }
}

impl JobQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn min_match_score(&self) -> u32 {
        self.min_match_score
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_min_match_score(&mut self, score: u32) {
        self.min_match_score = score;
    }

    pub fn predicates(&self) -> PredicateSet<'static, JobPosting> {
        PredicateSet::new()
            .with(LocationMatches::new(self.location.clone()))
            .with(ScoreAtLeast(self.min_match_score))
    }

    pub fn run(&self, jobs: &[JobPosting]) -> Vec<JobPosting> {
        rank(filter(jobs, &self.predicates()), |job| job.match_score)
    }
}

/// Learning resource selections: difficulty and duration bucket. Results keep
/// catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    difficulty: String,
    duration: DurationBucket,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            difficulty: ALL.to_string(),
            duration: DurationBucket::All,
        }
    }
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn duration(&self) -> DurationBucket {
        self.duration
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.difficulty = difficulty.into();
    }

    pub fn set_duration(&mut self, duration: DurationBucket) {
        self.duration = duration;
    }

    pub fn predicates(&self) -> PredicateSet<'static, LearningResource> {
        PredicateSet::new()
            .with(DifficultyEquals::new(self.difficulty.clone()))
            .with(self.duration)
    }

    pub fn run(&self, resources: &[LearningResource]) -> Vec<LearningResource> {
        filter(resources, &self.predicates())
    }
}
