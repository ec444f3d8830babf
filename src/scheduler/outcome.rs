//! Scheduling outcome and failure classification.
//!
//! A run never aborts through panics or exceptions: the day/session loop
//! stops at the first fatal condition and returns the entries committed so
//! far paired with a classified error. There are exactly two fatal kinds
//! and no recoverable kinds inside the core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Schedule;

/// A fatal, terminal condition for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ScheduleError {
    /// An order has incomplete work and the simulated day has passed its
    /// effective deadline (nominal deadline minus the safety buffer).
    #[error("order '{order_id}' cannot finish by effective deadline day {effective_deadline}")]
    DeadlineUnreachable {
        /// The offending order.
        order_id: String,
        /// Its effective deadline day (may be ≤ 0 when the buffer
        /// swallows the nominal date).
        effective_deadline: i64,
    },

    /// The simulation passed the fixed day ceiling with work remaining.
    #[error("planning horizon of {horizon_days} days exhausted with work remaining")]
    HorizonExceeded {
        /// The configured ceiling.
        horizon_days: u32,
    },
}

/// Result of one scheduler invocation: the schedule built so far plus an
/// optional fatal classification.
///
/// On failure `schedule` holds the partial placement committed before the
/// fatal condition was detected — hosts surface it alongside the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Committed entries (full on success, partial on failure).
    pub schedule: Schedule,
    /// The fatal condition, if the run did not complete.
    pub error: Option<ScheduleError>,
}

impl ScheduleOutcome {
    /// A fully placed schedule.
    pub fn complete(schedule: Schedule) -> Self {
        Self {
            schedule,
            error: None,
        }
    }

    /// A partial schedule terminated by a fatal condition.
    pub fn failed(schedule: Schedule, error: ScheduleError) -> Self {
        Self {
            schedule,
            error: Some(error),
        }
    }

    /// Whether every order was fully placed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts to a `Result`, keeping the partial schedule with the error.
    pub fn into_result(self) -> Result<Schedule, (Schedule, ScheduleError)> {
        match self.error {
            None => Ok(self.schedule),
            Some(error) => Err((self.schedule, error)),
        }
    }
}
