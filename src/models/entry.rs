//! Schedule (solution) model.
//!
//! A schedule is the artifact produced by one scheduler invocation: an
//! ordered list of session assignments from the start day forward. It is
//! discarded and regenerated on every call — the host never edits it.
//!
//! # Grid Invariant
//! At most one entry exists per `(day, session)` pair. Every committed
//! unit covers a contiguous window within one day whose length equals the
//! step's duration; [`Schedule::occupations`] recovers those windows.

use serde::{Deserialize, Serialize};

use super::Order;

/// One occupied session slot in the production calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day number (1-based).
    pub day: u32,
    /// Session within the day, in `[1, sessions_per_day]`.
    pub session: u32,
    /// Order occupying the slot.
    pub order_id: String,
    /// Step occupying the slot.
    pub step_name: String,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        day: u32,
        session: u32,
        order_id: impl Into<String>,
        step_name: impl Into<String>,
    ) -> Self {
        Self {
            day,
            session,
            order_id: order_id.into(),
            step_name: step_name.into(),
        }
    }
}

/// A contiguous block of sessions produced by a single unit of a step.
///
/// Never spans a day boundary; `length` equals the step's configured
/// duration. This is the unit the shift-advance collaborator presents to
/// operators for completion marking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOccupation {
    /// Owning order ID.
    pub order_id: String,
    /// Step name.
    pub step_name: String,
    /// Day of the occupation.
    pub day: u32,
    /// First occupied session.
    pub start_session: u32,
    /// Number of occupied sessions.
    pub length: u32,
}

impl UnitOccupation {
    /// Global session index of the occupation's first slot.
    pub fn start_global(&self, sessions_per_day: u32) -> u64 {
        u64::from(self.day - 1) * u64::from(sessions_per_day) + u64::from(self.start_session)
    }
}

/// A produced schedule: session assignments in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Session assignments, in the order the scheduler committed them.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry at a specific slot, if occupied.
    pub fn entry_at(&self, day: u32, session: u32) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.session == session)
    }

    /// All entries for a given day, in session order.
    pub fn entries_for_day(&self, day: u32) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> =
            self.entries.iter().filter(|e| e.day == day).collect();
        entries.sort_by_key(|e| e.session);
        entries
    }

    /// All entries for a given order.
    pub fn entries_for_order(&self, order_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.order_id == order_id)
            .collect()
    }

    /// Latest day carrying an entry (makespan in days). 0 when empty.
    pub fn last_day(&self) -> u32 {
        self.entries.iter().map(|e| e.day).max().unwrap_or(0)
    }

    /// Day of the last entry for a given order, if any.
    pub fn completion_day(&self, order_id: &str) -> Option<u32> {
        self.entries
            .iter()
            .filter(|e| e.order_id == order_id)
            .map(|e| e.day)
            .max()
    }

    /// Groups entries into atomic unit-step occupations.
    ///
    /// For each day, maximal runs of consecutive sessions assigned to the
    /// same `(order, step)` are located and then chunked into pieces of
    /// the step's configured duration, so two units of the same step
    /// placed back-to-back (a zero cooldown makes this routine) stay
    /// distinct. A gap in session numbering also ends a run. Runs whose
    /// step is not found in `orders` are kept whole.
    pub fn occupations(&self, orders: &[Order]) -> Vec<UnitOccupation> {
        let mut days: Vec<u32> = self.entries.iter().map(|e| e.day).collect();
        days.sort_unstable();
        days.dedup();

        let mut runs = Vec::new();
        for day in days {
            let entries = self.entries_for_day(day);
            let mut run: Option<UnitOccupation> = None;
            for entry in entries {
                let extends = run.as_ref().is_some_and(|r| {
                    r.order_id == entry.order_id
                        && r.step_name == entry.step_name
                        && r.start_session + r.length == entry.session
                });
                if extends {
                    if let Some(r) = run.as_mut() {
                        r.length += 1;
                    }
                } else {
                    if let Some(done) = run.take() {
                        runs.push(done);
                    }
                    run = Some(UnitOccupation {
                        order_id: entry.order_id.clone(),
                        step_name: entry.step_name.clone(),
                        day,
                        start_session: entry.session,
                        length: 1,
                    });
                }
            }
            if let Some(done) = run.take() {
                runs.push(done);
            }
        }

        // Adjacent units of the same step form one run; the configured
        // duration is what tells them apart.
        let mut occupations = Vec::new();
        for r in runs {
            let duration = orders
                .iter()
                .find(|o| o.id == r.order_id)
                .and_then(|o| o.step_duration(&r.step_name))
                .unwrap_or(0);
            if duration == 0 || duration >= r.length {
                occupations.push(r);
                continue;
            }
            let mut start = r.start_session;
            let mut left = r.length;
            while left > 0 {
                let piece = left.min(duration);
                occupations.push(UnitOccupation {
                    order_id: r.order_id.clone(),
                    step_name: r.step_name.clone(),
                    day: r.day,
                    start_session: start,
                    length: piece,
                });
                start += piece;
                left -= piece;
            }
        }
        occupations
    }
}
