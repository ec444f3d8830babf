//! Session-quantized production scheduling.
//!
//! Assigns batches of manufactured units to a calendar of fixed-size
//! session slots, honoring per-step cooldowns, per-day capacity, manual
//! session blocks, and per-order deadlines. The scheduler is a pure
//! function over its request: the host owns persistence, completion
//! bookkeeping, and presentation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Order`, `Step`, `StepProgress`,
//!   `Schedule`, `ScheduleEntry`, `UnitOccupation`, `SessionCalendar`,
//!   `PlanningParams`
//! - **`dispatching`**: Priority rules for contested sessions
//!   (`CriticalLoad`, `Edd`, `Mwkr`)
//! - **`scheduler`**: The greedy placer, its outcome/error types, and KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   progress rows, oversized steps)
//!
//! # Failure Model
//!
//! A run ends in exactly one of three ways: complete, `DeadlineUnreachable`
//! (an incomplete order's effective deadline passed), or `HorizonExceeded`
//! (the day ceiling hit with work remaining). Failures carry the partial
//! schedule; there is no internal retry or backtracking.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
