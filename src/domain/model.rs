use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
    pub category: String,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        proficiency: u8,
        category: impl Into<String>,
    ) -> Result<Self> {
        let skill = Self {
            name: name.into(),
            proficiency,
            category: category.into(),
        };
        skill.validate()?;
        Ok(skill)
    }
}

impl Validate for Skill {
    fn validate(&self) -> Result<()> {
        validate_range(
            &format!("{}.proficiency", self.name),
            self.proficiency,
            0,
            MAX_LEVEL,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub description: String,
    /// Relevance to the profile, computed upstream.
    pub match_score: u8,
}

impl Validate for JobPosting {
    fn validate(&self) -> Result<()> {
        validate_range(
            &format!("{}.matchScore", self.title),
            self.match_score,
            0,
            MAX_LEVEL,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub title: String,
    pub provider: String,
    /// Free text such as "6 hours", "2 weeks" or "3 months".
    pub duration: String,
    pub difficulty: String,
    pub url: String,
    pub skills_covered: Vec<String>,
}

impl Validate for LearningResource {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// The difficulty levels offered by the resource filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AdvisorError::ValidationError {
                message: format!(
                    "Unknown difficulty '{}'. Expected beginner, intermediate or advanced",
                    s
                ),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub completed_courses: Vec<String>,
    pub in_progress_courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub current_role: String,
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    pub learning_progress: LearningProgress,
}

impl UserProfile {
    /// Labels and values of the proficiency chart, in profile order.
    pub fn proficiency_chart(&self) -> Vec<(&str, u8)> {
        self.skills
            .iter()
            .map(|skill| (skill.name.as_str(), skill.proficiency))
            .collect()
    }

    /// The stated target role, or the first catalogued role when none is set.
    pub fn effective_target_role(&self) -> &str {
        self.target_role
            .as_deref()
            .filter(|role| !role.trim().is_empty())
            .unwrap_or(crate::domain::sample::TARGET_ROLES[0])
    }
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<()> {
        self.skills.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSkill {
    pub name: String,
    pub current_level: u8,
    pub required_level: u8,
}

impl PartialSkill {
    /// How far the current level goes toward the required one, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.required_level == 0 {
            return 100.0;
        }
        let ratio = f64::from(self.current_level) / f64::from(self.required_level) * 100.0;
        ratio.min(100.0)
    }
}

impl Validate for PartialSkill {
    fn validate(&self) -> Result<()> {
        validate_range(
            &format!("{}.currentLevel", self.name),
            self.current_level,
            0,
            MAX_LEVEL,
        )?;
        validate_range(
            &format!("{}.requiredLevel", self.name),
            self.required_level,
            0,
            MAX_LEVEL,
        )
    }
}

/// Report returned by the advisory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub missing_skills: Vec<String>,
    pub partial_skills: Vec<PartialSkill>,
    pub recommendations: Vec<LearningResource>,
}

impl Validate for SkillGap {
    fn validate(&self) -> Result<()> {
        self.partial_skills.validate()?;
        self.recommendations.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRequest {
    pub role: String,
    pub skills: Vec<Skill>,
}
