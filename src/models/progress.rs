//! Remaining-work state per order step.
//!
//! Progress records are owned by the host: the intake side seeds them with
//! [`StepProgress::initial_for`], operators' completion marks are folded
//! back with [`StepProgress::mark_completed`], and the scheduler reads them
//! as the starting state of its simulation. The scheduler itself never
//! mutates the records it is given.

use serde::{Deserialize, Serialize};

use super::Order;

/// Remaining work and cooldown gate for one (order, step) pair.
///
/// An order is complete iff every one of its steps has `remaining == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    /// Owning order ID.
    pub order_id: String,
    /// Step name within the order.
    pub step_name: String,
    /// Units of this step still to produce (floor 0).
    pub remaining: u32,
    /// Earliest global session at which the next unit may start.
    /// Advances forward only.
    pub ready_at: u64,
}

impl StepProgress {
    /// Creates a progress record.
    pub fn new(
        order_id: impl Into<String>,
        step_name: impl Into<String>,
        remaining: u32,
        ready_at: u64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            step_name: step_name.into(),
            remaining,
            ready_at,
        }
    }

    /// Seeds initial progress for a freshly created order: one record per
    /// step, `remaining = quantity`, `ready_at = 0`.
    pub fn initial_for(order: &Order) -> Vec<Self> {
        order
            .steps
            .iter()
            .map(|step| Self::new(order.id.as_str(), step.name.as_str(), order.quantity, 0))
            .collect()
    }

    /// Folds one operator-confirmed completion back into this record.
    ///
    /// `start_global` is the global session at which the completed unit
    /// started. The cooldown gate advances to
    /// `start_global + duration + cooldown`, never backward.
    pub fn mark_completed(&mut self, start_global: u64, duration: u32, cooldown: u32) {
        self.remaining = self.remaining.saturating_sub(1);
        let gate = start_global + u64::from(duration) + u64::from(cooldown);
        self.ready_at = self.ready_at.max(gate);
    }

    /// Whether this step has no work left.
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// Whether every step of `order` is complete in the given progress set.
///
/// Steps with no matching record are treated as untouched (full quantity
/// remaining), so they count as incomplete for non-zero quantities.
pub fn order_complete(order: &Order, progress: &[StepProgress]) -> bool {
    order.steps.iter().all(|step| {
        progress
            .iter()
            .find(|p| p.order_id == order.id && p.step_name == step.name)
            .map(|p| p.is_done())
            .unwrap_or(order.quantity == 0)
    })
}
