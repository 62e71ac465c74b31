//! Platform-agnostic core of the push-channel lifecycle.
//!
//! No tokio in here. The connection manager owns the socket and the timer and
//! calls into this core for the state machine and the retry schedule.

use std::fmt;
use std::time::Duration;

use crate::infrastructure::messaging::ConnectionStatus;

/// Where the push channel currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Never started, or shut down
    Idle,
    Connecting,
    Connected,
    /// Closed; the retry timer is running
    DisconnectedPendingRetry,
}

/// Inputs that move the lifecycle forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    ConnectRequested,
    Opened,
    /// The channel closed, or the attempt to open it failed
    Closed,
    RetryDue,
    Shutdown,
}

impl LifecycleState {
    /// Next state for `event`, or `None` when the event does not apply here.
    pub fn transition(self, event: LifecycleEvent) -> Option<LifecycleState> {
        use LifecycleEvent as E;
        use LifecycleState as S;

        match (self, event) {
            (_, E::Shutdown) => Some(S::Idle),
            (S::Idle, E::ConnectRequested) => Some(S::Connecting),
            (S::Connecting, E::Opened) => Some(S::Connected),
            (S::Connecting | S::Connected, E::Closed) => Some(S::DisconnectedPendingRetry),
            (S::DisconnectedPendingRetry, E::RetryDue) => Some(S::Connecting),
            _ => None,
        }
    }

    /// User-visible status for this state.
    pub fn status(self) -> ConnectionStatus {
        match self {
            LifecycleState::Connecting => ConnectionStatus::Connecting,
            LifecycleState::Connected => ConnectionStatus::Connected,
            LifecycleState::Idle | LifecycleState::DisconnectedPendingRetry => {
                ConnectionStatus::Disconnected
            }
        }
    }

    /// Whether a loop is running for this state.
    pub fn is_active(self) -> bool {
        self != LifecycleState::Idle
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Connecting => "connecting",
            LifecycleState::Connected => "connected",
            LifecycleState::DisconnectedPendingRetry => "disconnected-pending-retry",
        };
        f.write_str(name)
    }
}

/// Fixed-delay retry schedule. Retries forever; `attempts` only feeds logs.
#[derive(Debug, Clone, Copy)]
pub struct RetrySchedule {
    delay: Duration,
    attempts: u64,
}

impl RetrySchedule {
    pub fn new(delay: Duration) -> Self {
        Self { delay, attempts: 0 }
    }

    /// Called once the channel opens.
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    /// Consecutive retries since the last successful open.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Advance to the next attempt and return the delay to wait before it.
    pub fn next_delay_and_advance(&mut self) -> Duration {
        self.attempts = self.attempts.saturating_add(1);
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_and_reconnect_cycle() {
        let state = LifecycleState::Idle;
        let state = state.transition(LifecycleEvent::ConnectRequested).unwrap();
        assert_eq!(state, LifecycleState::Connecting);

        let state = state.transition(LifecycleEvent::Opened).unwrap();
        assert_eq!(state.status(), ConnectionStatus::Connected);

        let state = state.transition(LifecycleEvent::Closed).unwrap();
        assert_eq!(state, LifecycleState::DisconnectedPendingRetry);
        assert_eq!(state.status(), ConnectionStatus::Disconnected);

        let state = state.transition(LifecycleEvent::RetryDue).unwrap();
        assert_eq!(state, LifecycleState::Connecting);
    }

    #[test]
    fn test_failed_attempt_goes_to_pending_retry() {
        assert_eq!(
            LifecycleState::Connecting.transition(LifecycleEvent::Closed),
            Some(LifecycleState::DisconnectedPendingRetry)
        );
    }

    #[test]
    fn test_connect_is_only_accepted_when_idle() {
        for state in [
            LifecycleState::Connecting,
            LifecycleState::Connected,
            LifecycleState::DisconnectedPendingRetry,
        ] {
            assert_eq!(state.transition(LifecycleEvent::ConnectRequested), None);
            assert!(state.is_active());
        }
        assert!(!LifecycleState::Idle.is_active());
    }

    #[test]
    fn test_shutdown_from_anywhere_is_idle() {
        for state in [
            LifecycleState::Idle,
            LifecycleState::Connecting,
            LifecycleState::Connected,
            LifecycleState::DisconnectedPendingRetry,
        ] {
            assert_eq!(
                state.transition(LifecycleEvent::Shutdown),
                Some(LifecycleState::Idle)
            );
        }
    }

    #[test]
    fn test_retry_schedule_is_fixed_and_uncapped() {
        let mut schedule = RetrySchedule::new(Duration::from_millis(5_000));
        for n in 1..=50 {
            assert_eq!(schedule.next_delay_and_advance(), Duration::from_secs(5));
            assert_eq!(schedule.attempts(), n);
        }
        schedule.reset();
        assert_eq!(schedule.attempts(), 0);
        assert_eq!(schedule.next_delay_and_advance(), Duration::from_secs(5));
    }
}
