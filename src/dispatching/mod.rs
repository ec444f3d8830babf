//! Dispatching rules for contested-session ranking.
//!
//! When several incomplete orders can start a unit in the same session,
//! a dispatching rule decides which one gets it. The default rule is
//! [`rules::CriticalLoad`], remaining work over days left to the
//! effective deadline.
//!
//! # Usage
//!
//! ```
//! use sessionplan::dispatching::{rules, DispatchContext, DispatchingRule};
//! use sessionplan::models::Order;
//!
//! let order = Order::new("B1").with_quantity(2).with_deadline(5).with_step("cut", 2);
//! let ctx = DispatchContext::at_day(1).with_remaining_sessions("B1", 4);
//! let score = rules::CriticalLoad.evaluate(&order, &ctx);
//! assert!(score < 0.0); // urgent orders score low
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
pub mod rules;

pub use context::DispatchContext;

use crate::models::Order;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (wins the contested session).
/// This follows the academic convention where SPT = shortest processing time first.
pub type RuleScore = f64;

/// A dispatching rule that ranks orders contending for a session.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for orders that should be placed first.
///
/// # Reference
/// Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "CRITLOAD", "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an order in the current dispatch context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, order: &Order, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
