//! Order (batch) model.
//!
//! An order represents a batch of identical units to be produced. Every
//! unit must pass through each of the order's named steps; a step occupies
//! a fixed number of consecutive sessions within a single day.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A named production step with a fixed duration in sessions.
///
/// Step names are unique within their order. A step's duration never
/// changes after creation and one unit of the step always occupies
/// `duration` consecutive sessions of the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step name, unique within the owning order.
    pub name: String,
    /// Fixed duration in sessions (positive).
    pub duration: u32,
}

impl Step {
    /// Creates a new step.
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// An order (batch) to be scheduled.
///
/// Contains the batch quantity, the deadline day, and the ordered list of
/// steps each unit passes through. Step order is insertion order and is
/// stable; it participates in tie-breaking during candidate selection.
///
/// # Time Representation
/// Days are 1-based calendar day numbers relative to day 1 of the plan.
/// The consumer defines what day 1 means (e.g., today, start of week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Total units required (positive, immutable once created).
    pub quantity: u32,
    /// Day number by which all units must complete.
    pub deadline_day: u32,
    /// Production steps each unit passes through (insertion order).
    pub steps: Vec<Step>,
}

impl Order {
    /// Creates a new order with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            quantity: 0,
            deadline_day: 0,
            steps: Vec::new(),
        }
    }

    /// Sets the order name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the batch quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the deadline day.
    pub fn with_deadline(mut self, deadline_day: u32) -> Self {
        self.deadline_day = deadline_day;
        self
    }

    /// Adds a production step.
    pub fn with_step(mut self, name: impl Into<String>, duration: u32) -> Self {
        self.steps.push(Step::new(name, duration));
        self
    }

    /// Looks up a step's duration by name.
    pub fn step_duration(&self, name: &str) -> Option<u32> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.duration)
    }

    /// Sessions required to produce one unit (sum of step durations).
    pub fn sessions_per_unit(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration)).sum()
    }

    /// Whether this order has any steps.
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The deadline used internally for fail-fast detection:
    /// `deadline_day - buffer`. May be zero or negative for deadlines that
    /// are already unreachable.
    pub fn effective_deadline(&self, buffer_days: u32) -> i64 {
        i64::from(self.deadline_day) - i64::from(buffer_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_builder() {
        let order = Order::new("B1")
            .with_name("Bracket batch")
            .with_quantity(10)
            .with_deadline(14)
            .with_step("cut", 1)
            .with_step("weld", 3);

        assert_eq!(order.id, "B1");
        assert_eq!(order.name, "Bracket batch");
        assert_eq!(order.quantity, 10);
        assert_eq!(order.deadline_day, 14);
        assert_eq!(order.step_count(), 2);
        assert!(order.has_steps());
    }

    #[test]
    fn test_step_lookup_and_per_unit_sessions() {
        let order = Order::new("B1")
            .with_step("cut", 1)
            .with_step("weld", 3)
            .with_step("paint", 2);

        assert_eq!(order.step_duration("weld"), Some(3));
        assert_eq!(order.step_duration("polish"), None);
        assert_eq!(order.sessions_per_unit(), 6);
    }

    #[test]
    fn test_step_insertion_order_is_stable() {
        let order = Order::new("B1")
            .with_step("b", 2)
            .with_step("a", 2)
            .with_step("c", 2);

        let names: Vec<&str> = order.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_effective_deadline() {
        let order = Order::new("B1").with_deadline(5);
        assert_eq!(order.effective_deadline(1), 4);
        assert_eq!(order.effective_deadline(5), 0);
        assert_eq!(order.effective_deadline(7), -2);
    }

    #[test]
    fn test_order_empty() {
        let order = Order::new("empty");
        assert!(!order.has_steps());
        assert_eq!(order.sessions_per_unit(), 0);
    }
}
