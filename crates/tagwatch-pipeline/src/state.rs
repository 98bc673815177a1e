//! Run lifecycle.
//!
//! `Idle → Configuring → Fetching → Evaluating → Notifying → Done`, with a
//! jump to `Failed` from any non-terminal state. `Done` and `Failed` are
//! terminal.

use chrono::{DateTime, Utc};

use crate::error::RunError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Configuring,
    Fetching,
    Evaluating,
    Notifying,
    Done,
    Failed,
}

impl RunState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub fn can_advance_to(self, next: RunState) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == RunState::Failed {
            return self != RunState::Idle;
        }
        matches!(
            (self, next),
            (RunState::Idle, RunState::Configuring)
                | (RunState::Configuring, RunState::Fetching)
                | (RunState::Fetching, RunState::Evaluating)
                | (RunState::Evaluating, RunState::Notifying)
                | (RunState::Notifying, RunState::Done)
        )
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Configuring => "configuring",
            RunState::Fetching => "fetching",
            RunState::Evaluating => "evaluating",
            RunState::Notifying => "notifying",
            RunState::Done => "done",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks and logs the state of one run.
#[derive(Debug)]
pub(crate) struct Progress {
    state: RunState,
    started_at: DateTime<Utc>,
}

impl Progress {
    pub(crate) fn start() -> Self {
        Self {
            state: RunState::Idle,
            started_at: Utc::now(),
        }
    }

    pub(crate) fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal run transition {} -> {next}",
            self.state
        );
        tracing::debug!(from = %self.state, to = %next, "compliance run state");
        self.state = next;
    }

    /// Moves to `Failed`, logs the error, and hands it back for `?`.
    pub(crate) fn fail(&mut self, error: RunError) -> RunError {
        tracing::error!(state = %self.state, error = %error, "compliance run failed");
        self.advance(RunState::Failed);
        error
    }

    pub(crate) fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> RunState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_legal() {
        let path = [
            RunState::Idle,
            RunState::Configuring,
            RunState::Fetching,
            RunState::Evaluating,
            RunState::Notifying,
            RunState::Done,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_advance_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn stages_cannot_be_skipped() {
        assert!(!RunState::Configuring.can_advance_to(RunState::Evaluating));
        assert!(!RunState::Fetching.can_advance_to(RunState::Done));
    }

    #[test]
    fn any_active_state_can_fail() {
        for state in [
            RunState::Configuring,
            RunState::Fetching,
            RunState::Evaluating,
            RunState::Notifying,
        ] {
            assert!(state.can_advance_to(RunState::Failed), "{state}");
        }
    }

    #[test]
    fn terminal_states_have_no_successors() {
        assert!(!RunState::Done.can_advance_to(RunState::Failed));
        assert!(!RunState::Failed.can_advance_to(RunState::Configuring));
        assert!(RunState::Done.is_terminal());
        assert!(RunState::Failed.is_terminal());
    }

    #[test]
    fn fail_returns_error_and_marks_failed() {
        let mut progress = Progress::start();
        progress.advance(RunState::Configuring);
        let err = progress.fail(RunError::Config(tagwatch_core::ConfigError::MissingEnvVar(
            "EMAIL_TO".to_string(),
        )));
        assert!(matches!(err, RunError::Config(_)));
        assert_eq!(progress.state(), RunState::Failed);
    }
}
