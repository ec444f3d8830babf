//! Greedy session scheduler, outcome types, and KPI evaluation.
//!
//! # Algorithm
//!
//! `SessionScheduler` is a single-pass, day-major/session-minor greedy
//! placer. It is not optimal: contested sessions go to the order ranked
//! most urgent by the dispatching rule, and the run terminates at the
//! first provably missed deadline or at the horizon ceiling.
//!
//! # KPI
//!
//! `PlanKpi` computes presentation metrics from a produced schedule:
//! makespan in days, lateness, on-time rate, and per-day load.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod greedy;
mod kpi;
mod outcome;

pub use greedy::{ScheduleRequest, SessionScheduler};
pub use kpi::PlanKpi;
pub use outcome::{ScheduleError, ScheduleOutcome};
