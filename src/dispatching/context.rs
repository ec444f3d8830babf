//! Dispatch context for rule evaluation.

use std::collections::HashMap;

/// Simulation state snapshot passed to dispatching rules.
///
/// Carries the simulated day, the deadline buffer in force, and the
/// remaining work per order in sessions, recomputed by the scheduler
/// from its working state before each contested-session ranking.
#[derive(Debug, Clone, Default)]
pub struct DispatchContext {
    /// Current simulated day (1-based).
    pub day: u32,
    /// Deadline safety buffer in days.
    pub deadline_buffer_days: u32,
    /// Remaining work per order (order_id → sessions).
    pub remaining_sessions: HashMap<String, u64>,
}

impl DispatchContext {
    /// Creates a context at the given day.
    pub fn at_day(day: u32) -> Self {
        Self {
            day,
            ..Default::default()
        }
    }

    /// Sets the deadline buffer.
    pub fn with_deadline_buffer(mut self, buffer_days: u32) -> Self {
        self.deadline_buffer_days = buffer_days;
        self
    }

    /// Sets remaining work for an order.
    pub fn with_remaining_sessions(mut self, order_id: impl Into<String>, sessions: u64) -> Self {
        self.remaining_sessions.insert(order_id.into(), sessions);
        self
    }

    /// Remaining work for an order; 0 when unknown.
    pub fn remaining_for(&self, order_id: &str) -> u64 {
        self.remaining_sessions.get(order_id).copied().unwrap_or(0)
    }
}
