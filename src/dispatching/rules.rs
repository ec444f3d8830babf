//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher-priority orders.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Order;

/// Floor for the days-left denominator, so an order ranked on its
/// effective deadline day still yields a finite urgency.
const MIN_DAYS_LEFT: f64 = 1e-6;

/// Critical load: remaining work in sessions over days left to the
/// effective deadline. The default rule.
///
/// This is the inverse of the classic Critical Ratio — load per remaining
/// day rather than slack per unit of work — so orders that are both heavy
/// and close to their deadline dominate contested sessions.
///
/// # Reference
/// Pinedo (2016), Ch. 4 (CR family of due-date rules).
#[derive(Debug, Clone, Copy)]
pub struct CriticalLoad;

impl DispatchingRule for CriticalLoad {
    fn name(&self) -> &'static str {
        "CRITLOAD"
    }

    fn evaluate(&self, order: &Order, context: &DispatchContext) -> RuleScore {
        let remaining = context.remaining_for(&order.id);
        if remaining == 0 {
            return f64::MAX; // Already done
        }

        let effective = order.effective_deadline(context.deadline_buffer_days);
        let days_left = (effective - i64::from(context.day - 1)) as f64;
        let urgency = remaining as f64 / days_left.max(MIN_DAYS_LEFT);
        -urgency // Higher urgency = higher priority → negate
    }

    fn description(&self) -> &'static str {
        "Critical Load (remaining sessions / days to effective deadline)"
    }
}

/// Earliest Due Date, against the effective deadline.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, order: &Order, context: &DispatchContext) -> RuleScore {
        order.effective_deadline(context.deadline_buffer_days) as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Most Work Remaining.
///
/// Prioritizes the heaviest orders regardless of deadlines. Prevents
/// starvation of large batches.
#[derive(Debug, Clone, Copy)]
pub struct Mwkr;

impl DispatchingRule for Mwkr {
    fn name(&self) -> &'static str {
        "MWKR"
    }

    fn evaluate(&self, order: &Order, context: &DispatchContext) -> RuleScore {
        -(context.remaining_for(&order.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Most Work Remaining"
    }
}
