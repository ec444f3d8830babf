//! Session calendar and planning parameters.
//!
//! The production calendar is quantized: a day holds a fixed number of
//! sessions, numbered from 1. Cooldown gates compare positions across day
//! boundaries through the global session index.
//!
//! # Time Model
//! `global_session(day, session) = (day - 1) * sessions_per_day + session`.
//! Both days and sessions are 1-based; global indices start at 1.

use serde::{Deserialize, Serialize};

/// Session arithmetic for a calendar with a fixed day capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCalendar {
    /// Sessions per day (positive).
    pub sessions_per_day: u32,
}

impl SessionCalendar {
    /// Creates a calendar with the given day capacity.
    pub fn new(sessions_per_day: u32) -> Self {
        Self { sessions_per_day }
    }

    /// Absolute position of a slot across all days.
    #[inline]
    pub fn global_session(&self, day: u32, session: u32) -> u64 {
        u64::from(day - 1) * u64::from(self.sessions_per_day) + u64::from(session)
    }

    /// Inverse of [`global_session`](Self::global_session): `(day, session)`.
    ///
    /// Global indices start at 1; zero is clamped to the first slot
    /// rather than underflowing.
    pub fn split_global(&self, global: u64) -> (u32, u32) {
        let zero_based = global.max(1) - 1;
        let spd = u64::from(self.sessions_per_day);
        let day = zero_based / spd + 1;
        let session = zero_based % spd + 1;
        (day as u32, session as u32)
    }

    /// Whether a session number is a valid slot of a day.
    #[inline]
    pub fn contains_session(&self, session: u32) -> bool {
        session >= 1 && session <= self.sessions_per_day
    }
}

/// Fixed planning constants for one scheduling run.
///
/// These are the calendar shape and safety margins the host configures
/// once and passes with every request; the scheduler treats them as
/// immutable for the duration of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningParams {
    /// Sessions per day.
    pub sessions_per_day: u32,
    /// Minimum global sessions between two units of the same step.
    pub cooldown_sessions: u32,
    /// Safety margin subtracted from nominal deadlines. A "missed"
    /// deadline is detected this many days before the stated date.
    pub deadline_buffer_days: u32,
    /// Hard ceiling on the simulated day counter. Doubles as the
    /// termination guarantee against unbounded simulation.
    pub horizon_days: u32,
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            sessions_per_day: 8,
            cooldown_sessions: 0,
            deadline_buffer_days: 1,
            horizon_days: 365,
        }
    }
}

impl PlanningParams {
    /// Sets sessions per day.
    pub fn with_sessions_per_day(mut self, sessions_per_day: u32) -> Self {
        self.sessions_per_day = sessions_per_day;
        self
    }

    /// Sets the cooldown between units of the same step.
    pub fn with_cooldown(mut self, cooldown_sessions: u32) -> Self {
        self.cooldown_sessions = cooldown_sessions;
        self
    }

    /// Sets the deadline safety buffer.
    pub fn with_deadline_buffer(mut self, buffer_days: u32) -> Self {
        self.deadline_buffer_days = buffer_days;
        self
    }

    /// Sets the simulation horizon ceiling.
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// The session calendar implied by these parameters.
    pub fn calendar(&self) -> SessionCalendar {
        SessionCalendar::new(self.sessions_per_day)
    }
}
