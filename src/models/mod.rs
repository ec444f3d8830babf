//! Scheduling domain models.
//!
//! Provides the core data types for the session-quantized production
//! calendar: orders and their steps, remaining-work state, the produced
//! schedule, and the calendar/parameter records shared by every
//! scheduler invocation.
//!
//! # Ownership
//!
//! | Type | Created by | Mutated by |
//! |------|-----------|------------|
//! | `Order` | host (intake) | nobody after creation |
//! | `StepProgress` | host (intake) | host (completion fold-back) |
//! | `Schedule` | scheduler | nobody — regenerated per call |
//! | `PlanningParams` | host (configuration) | host |

mod calendar;
mod entry;
mod order;
mod progress;

pub use calendar::{PlanningParams, SessionCalendar};
pub use entry::{Schedule, ScheduleEntry, UnitOccupation};
pub use order::{Order, Step};
pub use progress::{order_complete, StepProgress};
