//! Session-scoped workflow state.
//!
//! One session holds at most one generated plan at a time. State moves from
//! collecting to displaying only on a successful generation, and back only on
//! an explicit user reset.
use crate::profile::UserProfile;
use crate::prompt;
use crate::provider::{GenerationClient, GenerationError};
use std::cell::Cell;

/// Where the session currently sits in the collect/display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Displaying,
}

/// Session-scoped state, mutated only by [`Session`].
///
/// Invariant: `has_generated_plan` implies both options are populated; the
/// three fields change together on success and on reset.
#[derive(Debug, Default)]
pub struct SessionState {
    has_generated_plan: bool,
    current_profile: Option<UserProfile>,
    current_plan: Option<String>,
}

impl SessionState {
    /// True once a plan has been generated and stored this session.
    #[allow(dead_code)]
    pub fn has_generated_plan(&self) -> bool {
        self.has_generated_plan
    }

    /// Profile behind the current plan, if one has been generated.
    #[allow(dead_code)]
    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.current_profile.as_ref()
    }

    /// Cached plan text, if one has been generated.
    pub fn current_plan(&self) -> Option<&str> {
        self.current_plan.as_deref()
    }

    fn install(&mut self, profile: UserProfile, plan: String) {
        self.current_profile = Some(profile);
        self.current_plan = Some(plan);
        self.has_generated_plan = true;
    }

    fn clear(&mut self) {
        *self = SessionState::default();
    }
}

/// Marker for an outstanding generation call. Single-threaded, so a plain
/// `Cell` suffices; the guard clears it on every exit path, including unwind.
#[derive(Debug, Default)]
struct InFlightFlag(Cell<bool>);

impl InFlightFlag {
    fn begin(&self) -> InFlightGuard<'_> {
        self.0.set(true);
        InFlightGuard { flag: self }
    }

    fn is_set(&self) -> bool {
        self.0.get()
    }
}

struct InFlightGuard<'a> {
    flag: &'a InFlightFlag,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.0.set(false);
    }
}

/// Acknowledgment returned for free-text feedback. Feedback is neither
/// persisted nor transmitted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAck {
    Received,
    Empty,
}

/// Controller core for one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    in_flight: InFlightFlag,
}

impl Session {
    /// Start a session in the collecting phase with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Derived phase: displaying once a plan is stored, collecting otherwise.
    pub fn phase(&self) -> Phase {
        if self.state.has_generated_plan {
            Phase::Displaying
        } else {
            Phase::Collecting
        }
    }

    /// True while a generation call is outstanding.
    #[allow(dead_code)]
    pub fn generation_in_progress(&self) -> bool {
        self.in_flight.is_set()
    }

    /// Generate a plan for a validated profile and move to displaying.
    ///
    /// Builds the prompt and issues the single blocking generation call
    /// inside the in-flight scope. On success, profile and plan are stored
    /// together; on failure nothing is stored and the session stays in the
    /// collecting phase.
    pub fn submit(
        &mut self,
        profile: UserProfile,
        client: &GenerationClient,
    ) -> Result<(), GenerationError> {
        let prompt = prompt::build_prompt(&profile);
        let plan = {
            let _in_flight = self.in_flight.begin();
            client.generate(&prompt)?
        };
        self.state.install(profile, plan);
        tracing::debug!("session entered displaying phase");
        Ok(())
    }

    /// Explicit user reset: discard profile and plan, return to collecting.
    pub fn reset(&mut self) {
        self.state.clear();
        tracing::debug!("session reset to collecting phase");
    }

    /// Acknowledge free-text feedback locally.
    pub fn acknowledge_feedback(&self, feedback: &str) -> FeedbackAck {
        if feedback.trim().is_empty() {
            FeedbackAck::Empty
        } else {
            FeedbackAck::Received
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
