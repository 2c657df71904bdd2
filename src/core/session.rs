use crate::domain::model::{GapRequest, SkillGap, UserProfile};
use crate::domain::ports::AdvisoryService;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Idle,
    Analyzing,
    Settled,
}

#[derive(Debug, Default)]
struct SessionState {
    target_role: String,
    in_flight: bool,
    result: Option<SkillGap>,
    error: Option<String>,
    settled_at: Option<DateTime<Utc>>,
}

/// Skill gap analysis for one profile.
///
/// At most one request is outstanding at a time; a second `analyze` while one
/// is running is refused. Every outcome ends up either as the last result or
/// as the last error message, never both.
pub struct AnalysisSession<A: AdvisoryService> {
    service: A,
    profile: UserProfile,
    state: Mutex<SessionState>,
}

/// Clears the in-flight flag when the request completes or is dropped.
struct InFlightGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight = false;
    }
}

impl<A: AdvisoryService> AnalysisSession<A> {
    pub fn new(service: A, profile: UserProfile) -> Self {
        let state = SessionState {
            target_role: profile.effective_target_role().to_string(),
            ..SessionState::default()
        };
        Self {
            service,
            profile,
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn target_role(&self) -> String {
        self.state().target_role.clone()
    }

    pub fn set_target_role(&self, role: impl Into<String>) {
        self.state().target_role = role.into();
    }

    pub fn status(&self) -> AnalysisStatus {
        let state = self.state();
        if state.in_flight {
            AnalysisStatus::Analyzing
        } else if state.settled_at.is_some() {
            AnalysisStatus::Settled
        } else {
            AnalysisStatus::Idle
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.state().in_flight
    }

    pub fn result(&self) -> Option<SkillGap> {
        self.state().result.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.state().settled_at
    }

    /// Requests a gap report for the current target role and the profile's
    /// skills, recording the outcome in the session.
    pub async fn analyze(&self) -> Result<SkillGap> {
        let role = {
            let mut state = self.state();
            validate_non_empty_string("targetRole", &state.target_role)?;
            if state.in_flight {
                tracing::warn!("Analysis for '{}' already in progress", state.target_role);
                return Err(AdvisorError::AnalysisInFlight);
            }
            state.in_flight = true;
            state.error = None;
            state.target_role.clone()
        };
        let _gate = InFlightGuard { state: &self.state };

        let request = GapRequest {
            role,
            skills: self.profile.skills.clone(),
        };
        tracing::info!(
            "Analyzing skill gap for '{}' with {} skills",
            request.role,
            request.skills.len()
        );

        let outcome = self.service.analyze(&request).await;

        let mut state = self.state();
        state.settled_at = Some(Utc::now());
        match &outcome {
            Ok(gap) => {
                tracing::info!(
                    "Skill gap for '{}': {} missing, {} partial, {} recommendations",
                    request.role,
                    gap.missing_skills.len(),
                    gap.partial_skills.len(),
                    gap.recommendations.len()
                );
                state.result = Some(gap.clone());
                state.error = None;
            }
            Err(e) => {
                tracing::error!(
                    "Error analyzing skill gap: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                state.result = None;
                state.error = Some(e.user_friendly_message());
            }
        }
        drop(state);

        outcome
    }
}
