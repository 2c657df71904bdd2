//! Catalog filtering.
//!
//! A [`PredicateSet`] holds independent criteria; [`filter`] keeps the items
//! every criterion accepts, in their original order. Filtering never fails: a
//! set that nothing satisfies simply yields an empty result.

use crate::domain::ports::{Graded, Located, Scored, Timed};
use crate::utils::error::{AdvisorError, Result};
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "no constraint".
pub const ALL: &str = "all";

pub trait Predicate<T> {
    fn accepts(&self, item: &T) -> bool;
}

/// Adapts a closure into a [`Predicate`].
pub struct FnPredicate<F>(pub F);

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool,
{
    fn accepts(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

/// Accepts items whose location contains the target, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatches {
    target: String,
    needle: String,
}

impl LocationMatches {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let needle = target.to_lowercase();
        Self { target, needle }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<T: Located> Predicate<T> for LocationMatches {
    fn accepts(&self, item: &T) -> bool {
        self.target == ALL || item.location().to_lowercase().contains(&self.needle)
    }
}

/// Accepts items whose match score is at least the threshold. A threshold
/// above 100 rejects every valid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAtLeast(pub u32);

impl<T: Scored> Predicate<T> for ScoreAtLeast {
    fn accepts(&self, item: &T) -> bool {
        u32::from(item.match_score()) >= self.0
    }
}

/// Accepts items whose difficulty equals the level, ignoring case and
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyEquals {
    level: String,
}

impl DifficultyEquals {
    pub fn new(level: impl Into<String>) -> Self {
        let level: String = level.into();
        Self {
            level: level.trim().to_string(),
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

impl<T: Graded> Predicate<T> for DifficultyEquals {
    fn accepts(&self, item: &T) -> bool {
        self.level == ALL || item.difficulty().trim().eq_ignore_ascii_case(&self.level)
    }
}

/// Coarse duration class, matched by the unit word in the free-text duration.
///
/// "3 months" is only ever `Long`; text without "hours", "weeks" or "months"
/// matches no bucket except `All`. Callers depend on this heuristic only
/// through the predicate, so a structured duration can replace it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationBucket {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            DurationBucket::All => None,
            DurationBucket::Short => Some("hours"),
            DurationBucket::Medium => Some("weeks"),
            DurationBucket::Long => Some("months"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::All => ALL,
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ALL => Ok(DurationBucket::All),
            "short" => Ok(DurationBucket::Short),
            "medium" => Ok(DurationBucket::Medium),
            "long" => Ok(DurationBucket::Long),
            other => Err(AdvisorError::ValidationError {
                message: format!(
                    "Unknown duration bucket '{}'. Expected all, short, medium or long",
                    other
                ),
            }),
        }
    }
}

impl<T: Timed> Predicate<T> for DurationBucket {
    fn accepts(&self, item: &T) -> bool {
        match self.unit() {
            None => true,
            Some(unit) => item.duration().contains(unit),
        }
    }
}

/// Conjunction of predicates.
pub struct PredicateSet<'a, T> {
    predicates: Vec<Box<dyn Predicate<T> + 'a>>,
}

impl<'a, T> PredicateSet<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn with_fn<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.with(FnPredicate(f))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn accepts(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.accepts(item))
    }
}

impl<T> Default for PredicateSet<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn filter<T: Clone>(items: &[T], predicates: &PredicateSet<'_, T>) -> Vec<T> {
    let kept: Vec<T> = items
        .iter()
        .filter(|item| predicates.accepts(item))
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} items with {} predicates, {} kept",
        items.len(),
        predicates.len(),
        kept.len()
    );
    kept
}
