//! Greedy session-placement scheduler.
//!
//! # Algorithm
//!
//! Day-major, session-minor, single pass:
//!
//! 1. Copy remaining/ready-at state per (order, step) from the request.
//! 2. For each day from the start day, pre-occupy manual blocks (start day
//!    only), then walk sessions in order.
//! 3. For each free session, collect orders with at least one eligible
//!    step, rank them with the dispatching rule, and commit one unit of
//!    the winner's longest eligible step.
//! 4. Stop when all orders are complete, a deadline is provably missed,
//!    or the day counter passes the horizon ceiling.
//!
//! No backtracking and no alternate heuristic on failure: the first fatal
//! condition terminates the run with the partial schedule.
//!
//! # Complexity
//! O(days * sessions * orders * steps) per call.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dispatching::{rules, DispatchContext, DispatchingRule};
use crate::models::{Order, PlanningParams, Schedule, ScheduleEntry, Step, StepProgress};

use super::outcome::{ScheduleError, ScheduleOutcome};

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Orders to place.
    pub orders: Vec<Order>,
    /// Remaining-work state, one record per (order, step). Steps with no
    /// record start untouched (`remaining = quantity`, `ready_at = 0`).
    pub progress: Vec<StepProgress>,
    /// First simulated day (1-based).
    pub start_day: u32,
    /// Manually blocked sessions. Apply to the start day only — they
    /// represent today's known downtime, not a recurring constraint.
    pub blocked_sessions: BTreeSet<u32>,
    /// Calendar shape and safety margins.
    pub params: PlanningParams,
}

impl ScheduleRequest {
    /// Creates a request starting at day 1 with default parameters.
    pub fn new(orders: Vec<Order>, progress: Vec<StepProgress>) -> Self {
        Self {
            orders,
            progress,
            start_day: 1,
            blocked_sessions: BTreeSet::new(),
            params: PlanningParams::default(),
        }
    }

    /// Sets the start day.
    pub fn with_start_day(mut self, start_day: u32) -> Self {
        self.start_day = start_day;
        self
    }

    /// Blocks a session on the start day.
    pub fn with_blocked_session(mut self, session: u32) -> Self {
        self.blocked_sessions.insert(session);
        self
    }

    /// Blocks several sessions on the start day.
    pub fn with_blocked_sessions(mut self, sessions: impl IntoIterator<Item = u32>) -> Self {
        self.blocked_sessions.extend(sessions);
        self
    }

    /// Sets the planning parameters.
    pub fn with_params(mut self, params: PlanningParams) -> Self {
        self.params = params;
        self
    }
}

/// Scheduler-local working copy of one step's state.
///
/// Built at call entry, mutated during the simulation, discarded at call
/// exit. Never aliases the caller's [`StepProgress`] records.
#[derive(Debug, Clone, Copy)]
struct StepState {
    remaining: u32,
    ready_at: u64,
}

/// Greedy session-placement scheduler.
///
/// Pure and synchronous: one call runs to completion (or to the horizon
/// ceiling) on copied state, holds no locks, and shares nothing with the
/// caller. Concurrent callers with separate input snapshots need no
/// coordination.
///
/// # Example
///
/// ```
/// use sessionplan::models::{Order, StepProgress};
/// use sessionplan::scheduler::{ScheduleRequest, SessionScheduler};
///
/// let order = Order::new("B1").with_quantity(1).with_deadline(5).with_step("cut", 2);
/// let progress = StepProgress::initial_for(&order);
/// let request = ScheduleRequest::new(vec![order], progress);
///
/// let outcome = SessionScheduler::new().schedule(&request);
/// assert!(outcome.is_complete());
/// assert_eq!(outcome.schedule.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SessionScheduler {
    rule: Arc<dyn DispatchingRule>,
}

impl SessionScheduler {
    /// Creates a scheduler ranking with [`rules::CriticalLoad`].
    pub fn new() -> Self {
        Self {
            rule: Arc::new(rules::CriticalLoad),
        }
    }

    /// Replaces the dispatching rule used for contested sessions.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// Runs the simulation from the request's start day until every order
    /// is complete or a fatal condition is detected.
    ///
    /// On failure the outcome carries the entries committed before the
    /// fatal condition, plus the classification. The request is not
    /// mutated; all working state is copied in at entry.
    pub fn schedule(&self, request: &ScheduleRequest) -> ScheduleOutcome {
        let params = request.params;
        let cal = params.calendar();
        let cooldown = u64::from(params.cooldown_sessions);
        let start_day = request.start_day.max(1);

        let mut work = build_working_state(&request.orders, &request.progress);
        let mut schedule = Schedule::new();

        debug!(
            rule = self.rule.name(),
            orders = request.orders.len(),
            start_day,
            "scheduling run started"
        );

        if all_done(&work) {
            return ScheduleOutcome::complete(schedule);
        }

        let mut day = start_day;
        loop {
            if day > params.horizon_days {
                debug!(
                    horizon_days = params.horizon_days,
                    entries = schedule.len(),
                    "horizon exhausted with work remaining"
                );
                return ScheduleOutcome::failed(
                    schedule,
                    ScheduleError::HorizonExceeded {
                        horizon_days: params.horizon_days,
                    },
                );
            }

            // Fail-fast: an incomplete order past its effective deadline is
            // unrecoverable for this run.
            for (idx, order) in request.orders.iter().enumerate() {
                if order_done(&work[idx]) {
                    continue;
                }
                let effective = order.effective_deadline(params.deadline_buffer_days);
                if i64::from(day) > effective {
                    debug!(
                        order_id = %order.id,
                        effective_deadline = effective,
                        day,
                        "deadline unreachable"
                    );
                    return ScheduleOutcome::failed(
                        schedule,
                        ScheduleError::DeadlineUnreachable {
                            order_id: order.id.clone(),
                            effective_deadline: effective,
                        },
                    );
                }
            }

            let mut occupied = vec![false; params.sessions_per_day as usize];
            if day == start_day {
                for &session in &request.blocked_sessions {
                    if cal.contains_session(session) {
                        occupied[(session - 1) as usize] = true;
                    }
                }
            }

            for session in 1..=params.sessions_per_day {
                if occupied[(session - 1) as usize] {
                    continue;
                }
                let global = cal.global_session(day, session);

                // Orders with at least one eligible step, in input order.
                let mut candidates: Vec<(usize, Vec<usize>)> = Vec::new();
                for (idx, order) in request.orders.iter().enumerate() {
                    if order_done(&work[idx]) {
                        continue;
                    }
                    let eligible: Vec<usize> = order
                        .steps
                        .iter()
                        .enumerate()
                        .filter(|(j, step)| {
                            step_eligible(
                                &work[idx][*j],
                                step,
                                session,
                                global,
                                &occupied,
                                params.sessions_per_day,
                            )
                        })
                        .map(|(j, _)| j)
                        .collect();
                    if !eligible.is_empty() {
                        candidates.push((idx, eligible));
                    }
                }
                if candidates.is_empty() {
                    continue;
                }

                let mut context =
                    DispatchContext::at_day(day).with_deadline_buffer(params.deadline_buffer_days);
                for (idx, _) in &candidates {
                    let order = &request.orders[*idx];
                    context = context.with_remaining_sessions(
                        order.id.as_str(),
                        remaining_sessions(order, &work[*idx]),
                    );
                }

                // Lowest score wins; strict comparison keeps ties on the
                // earliest candidate in input order.
                let mut winner = 0usize;
                let mut best = self
                    .rule
                    .evaluate(&request.orders[candidates[0].0], &context);
                for (i, (idx, _)) in candidates.iter().enumerate().skip(1) {
                    let score = self.rule.evaluate(&request.orders[*idx], &context);
                    if score < best {
                        best = score;
                        winner = i;
                    }
                }
                let (order_idx, eligible) = &candidates[winner];
                let order = &request.orders[*order_idx];

                // Longest eligible step first, reducing day-end
                // fragmentation; ties keep the earliest step.
                let mut pick = eligible[0];
                for &j in &eligible[1..] {
                    if order.steps[j].duration > order.steps[pick].duration {
                        pick = j;
                    }
                }
                let step = &order.steps[pick];

                let state = &mut work[*order_idx][pick];
                state.remaining -= 1;
                state.ready_at = global + u64::from(step.duration) + cooldown;
                for offset in 0..step.duration {
                    occupied[(session - 1 + offset) as usize] = true;
                    schedule.add_entry(ScheduleEntry::new(
                        day,
                        session + offset,
                        order.id.as_str(),
                        step.name.as_str(),
                    ));
                }
                trace!(
                    order_id = %order.id,
                    step = %step.name,
                    day,
                    session,
                    duration = step.duration,
                    remaining = state.remaining,
                    "unit committed"
                );
            }

            if all_done(&work) {
                debug!(
                    entries = schedule.len(),
                    last_day = schedule.last_day(),
                    "scheduling run complete"
                );
                return ScheduleOutcome::complete(schedule);
            }
            day += 1;
        }
    }
}

impl Default for SessionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies remaining/ready-at state out of the request, one row per order
/// aligned with its step list. Progress rows matching no (order, step)
/// pair are ignored; steps with no row start untouched.
fn build_working_state(orders: &[Order], progress: &[StepProgress]) -> Vec<Vec<StepState>> {
    orders
        .iter()
        .map(|order| {
            order
                .steps
                .iter()
                .map(|step| {
                    progress
                        .iter()
                        .find(|p| p.order_id == order.id && p.step_name == step.name)
                        .map(|p| StepState {
                            remaining: p.remaining,
                            ready_at: p.ready_at,
                        })
                        .unwrap_or(StepState {
                            remaining: order.quantity,
                            ready_at: 0,
                        })
                })
                .collect()
        })
        .collect()
}

fn order_done(steps: &[StepState]) -> bool {
    steps.iter().all(|s| s.remaining == 0)
}

fn all_done(work: &[Vec<StepState>]) -> bool {
    work.iter().all(|steps| order_done(steps))
}

/// Remaining work for one order in sessions: Σ remaining × duration.
fn remaining_sessions(order: &Order, states: &[StepState]) -> u64 {
    order
        .steps
        .iter()
        .zip(states)
        .map(|(step, state)| u64::from(state.remaining) * u64::from(step.duration))
        .sum()
}

/// Whether one unit of `step` can start at `session` of the current day:
/// work remains, the cooldown gate has passed, the full duration fits
/// before day end, and every session in the window is free.
fn step_eligible(
    state: &StepState,
    step: &Step,
    session: u32,
    global: u64,
    occupied: &[bool],
    sessions_per_day: u32,
) -> bool {
    if state.remaining == 0 || state.ready_at > global {
        return false;
    }
    // Zero-duration steps can never place; validation reports them.
    if step.duration == 0 {
        return false;
    }
    let end = session + step.duration - 1;
    if end > sessions_per_day {
        return false;
    }
    (session..=end).all(|s| !occupied[(s - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionCalendar;

    fn single_step_order(id: &str, quantity: u32, duration: u32, deadline: u32) -> Order {
        Order::new(id)
            .with_name(format!("{id} batch"))
            .with_quantity(quantity)
            .with_deadline(deadline)
            .with_step("main", duration)
    }

    fn request_for(orders: Vec<Order>) -> ScheduleRequest {
        let progress = orders.iter().flat_map(StepProgress::initial_for).collect();
        ScheduleRequest::new(orders, progress)
    }

    #[test]
    fn scenario_a_single_unit_two_sessions() {
        // One order, quantity 1, one step of duration 2, deadline day 5.
        let request = request_for(vec![single_step_order("B1", 1, 2, 5)]);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.len(), 2);
        assert_eq!(
            outcome.schedule.entries[0],
            ScheduleEntry::new(1, 1, "B1", "main")
        );
        assert_eq!(
            outcome.schedule.entries[1],
            ScheduleEntry::new(1, 2, "B1", "main")
        );
    }

    #[test]
    fn scenario_b_unreachable_deadline_fails_fast() {
        // Deadline day 1 with the default buffer → effective deadline 0,
        // already passed on day 1.
        let request = request_for(vec![single_step_order("B1", 1, 3, 1)]);
        let outcome = SessionScheduler::new().schedule(&request);

        assert_eq!(
            outcome.error,
            Some(ScheduleError::DeadlineUnreachable {
                order_id: "B1".into(),
                effective_deadline: 0,
            })
        );
        assert!(outcome.schedule.is_empty());
    }

    #[test]
    fn scenario_c_cooldown_pushes_second_unit_to_next_day() {
        let params = PlanningParams::default()
            .with_sessions_per_day(4)
            .with_cooldown(3);
        let request =
            request_for(vec![single_step_order("B1", 2, 1, 10)]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.len(), 2);

        let cal = SessionCalendar::new(4);
        let first = &outcome.schedule.entries[0];
        let second = &outcome.schedule.entries[1];
        assert_eq!((first.day, first.session), (1, 1));
        // Gate = start(1) + duration(1) + cooldown(3) = 5 → day 2, session 1.
        assert_eq!((second.day, second.session), (2, 1));
        assert!(cal.global_session(second.day, second.session) >= 5);
    }

    #[test]
    fn scenario_d_higher_load_ratio_wins_contested_sessions() {
        // B1: 4 sessions of work, 2 days to effective deadline → ratio ≥ 0.5
        // B2: 8 sessions of work, 19 days → ratio ≈ 0.42 throughout day 1.
        let params = PlanningParams::default().with_sessions_per_day(4);
        let request = request_for(vec![
            single_step_order("B2", 8, 1, 20),
            single_step_order("B1", 4, 1, 3),
        ])
        .with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        for entry in outcome.schedule.entries_for_day(1) {
            assert_eq!(entry.order_id, "B1", "B1 must win every day-1 session");
        }
    }

    #[test]
    fn scenario_e_blocked_session_is_never_occupied() {
        let params = PlanningParams::default().with_sessions_per_day(4);
        let request = request_for(vec![single_step_order("B1", 1, 1, 5)])
            .with_params(params)
            .with_blocked_session(3);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert!(outcome.schedule.entry_at(1, 3).is_none());
        let entry = &outcome.schedule.entries[0];
        assert_eq!(entry.day, 1);
        assert!(matches!(entry.session, 1 | 2 | 4));
    }

    #[test]
    fn blocked_sessions_apply_to_start_day_only() {
        let params = PlanningParams::default().with_sessions_per_day(2);
        let request = request_for(vec![single_step_order("B1", 3, 1, 10)])
            .with_params(params)
            .with_blocked_sessions([1, 2]);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert!(outcome.schedule.entries_for_day(1).is_empty());
        // Day 2 is unblocked and fills normally.
        assert_eq!(outcome.schedule.entries_for_day(2).len(), 2);
        assert_eq!(outcome.schedule.entries_for_day(3).len(), 1);
    }

    #[test]
    fn blocked_sessions_follow_a_later_start_day() {
        let request = request_for(vec![single_step_order("B1", 1, 1, 10)])
            .with_start_day(3)
            .with_blocked_session(1);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.entries[0], ScheduleEntry::new(3, 2, "B1", "main"));
    }

    #[test]
    fn horizon_fires_before_out_of_range_deadline() {
        // Effective deadline (day 99) lies beyond the 2-day horizon: the
        // ceiling check classifies the failure, not the deadline check.
        let params = PlanningParams::default()
            .with_sessions_per_day(2)
            .with_horizon(2);
        let request =
            request_for(vec![single_step_order("B1", 10, 1, 100)]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert_eq!(
            outcome.error,
            Some(ScheduleError::HorizonExceeded { horizon_days: 2 })
        );
        // Two days of two sessions committed before the ceiling.
        assert_eq!(outcome.schedule.len(), 4);
    }

    #[test]
    fn deadline_failure_keeps_partial_schedule() {
        let params = PlanningParams::default().with_sessions_per_day(2);
        let request =
            request_for(vec![single_step_order("B1", 5, 1, 2)]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        // Day 1 places two units; day 2 exceeds the effective deadline (1).
        assert_eq!(
            outcome.error,
            Some(ScheduleError::DeadlineUnreachable {
                order_id: "B1".into(),
                effective_deadline: 1,
            })
        );
        assert_eq!(outcome.schedule.len(), 2);
        assert_eq!(outcome.schedule.last_day(), 1);
    }

    #[test]
    fn longest_eligible_step_is_packed_first() {
        let params = PlanningParams::default().with_sessions_per_day(4);
        let order = Order::new("B1")
            .with_quantity(1)
            .with_deadline(10)
            .with_step("trim", 1)
            .with_step("weld", 3);
        let request = request_for(vec![order]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        // weld (3) beats trim (1) at session 1; trim takes session 4.
        let occ = outcome.schedule.occupations(&request.orders);
        assert_eq!(occ[0].step_name, "weld");
        assert_eq!(occ[0].start_session, 1);
        assert_eq!(occ[0].length, 3);
        assert_eq!(occ[1].step_name, "trim");
        assert_eq!(occ[1].start_session, 4);
    }

    #[test]
    fn unit_never_splits_across_day_boundary() {
        // Duration 3 with 4 sessions/day: after one unit, 1 free session
        // remains — the next unit waits for day 2 rather than splitting.
        let params = PlanningParams::default().with_sessions_per_day(4);
        let request =
            request_for(vec![single_step_order("B1", 2, 3, 10)]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        let occ = outcome.schedule.occupations(&request.orders);
        assert_eq!(occ.len(), 2);
        for o in &occ {
            assert_eq!(o.length, 3);
            assert!(o.start_session + o.length - 1 <= 4);
        }
        assert_eq!(occ[0].day, 1);
        assert_eq!(occ[1].day, 2);
    }

    #[test]
    fn back_to_back_units_of_same_step_stay_distinct() {
        // Zero cooldown lets the second unit start the session after the
        // first ends: one contiguous run, two produced units.
        let request = request_for(vec![single_step_order("B1", 2, 2, 9)]);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.len(), 4);
        let occ = outcome.schedule.occupations(&request.orders);
        assert_eq!(occ.len(), 2);
        assert_eq!((occ[0].start_session, occ[0].length), (1, 2));
        assert_eq!((occ[1].start_session, occ[1].length), (3, 2));
    }

    #[test]
    fn ties_break_by_input_order() {
        // Identical urgency: the earlier order in the input wins.
        let params = PlanningParams::default().with_sessions_per_day(2);
        let request = request_for(vec![
            single_step_order("second", 1, 1, 5),
            single_step_order("first", 1, 1, 5),
        ])
        .with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.entries[0].order_id, "second");
        assert_eq!(outcome.schedule.entries[1].order_id, "first");
    }

    #[test]
    fn alternate_rule_changes_the_winner() {
        // Under MWKR the heavier order wins day 1 even with a far deadline.
        let params = PlanningParams::default().with_sessions_per_day(4);
        let request = request_for(vec![
            single_step_order("light", 2, 1, 3),
            single_step_order("heavy", 8, 1, 20),
        ])
        .with_params(params);

        let outcome = SessionScheduler::new()
            .with_rule(rules::Mwkr)
            .schedule(&request);
        assert_eq!(outcome.schedule.entries[0].order_id, "heavy");

        let outcome = SessionScheduler::new().schedule(&request);
        assert_eq!(outcome.schedule.entries[0].order_id, "light");
    }

    #[test]
    fn partially_complete_progress_is_respected() {
        let order = single_step_order("B1", 3, 1, 10);
        let progress = vec![StepProgress::new("B1", "main", 1, 0)];
        let request = ScheduleRequest::new(vec![order], progress);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.len(), 1);
    }

    #[test]
    fn ready_at_gate_from_progress_delays_first_unit() {
        // Gate at global session 3 → first unit lands at session 3.
        let order = single_step_order("B1", 1, 1, 10);
        let progress = vec![StepProgress::new("B1", "main", 1, 3)];
        let request = ScheduleRequest::new(vec![order], progress);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert_eq!(outcome.schedule.entries[0], ScheduleEntry::new(1, 3, "B1", "main"));
    }

    #[test]
    fn empty_input_completes_immediately() {
        let outcome = SessionScheduler::new().schedule(&ScheduleRequest::new(vec![], vec![]));
        assert!(outcome.is_complete());
        assert!(outcome.schedule.is_empty());
    }

    #[test]
    fn already_complete_progress_completes_immediately() {
        let order = single_step_order("B1", 2, 1, 10);
        let progress = vec![StepProgress::new("B1", "main", 0, 20)];
        let request = ScheduleRequest::new(vec![order], progress);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        assert!(outcome.schedule.is_empty());
    }

    #[test]
    fn request_progress_is_not_mutated() {
        let orders = vec![single_step_order("B1", 2, 1, 10)];
        let progress: Vec<StepProgress> =
            orders.iter().flat_map(StepProgress::initial_for).collect();
        let request = ScheduleRequest::new(orders, progress.clone());

        let _ = SessionScheduler::new().schedule(&request);
        assert_eq!(request.progress, progress);
    }

    #[test]
    fn no_double_booking_across_busy_plan() {
        let params = PlanningParams::default()
            .with_sessions_per_day(4)
            .with_cooldown(1);
        let orders = vec![
            Order::new("B1")
                .with_quantity(3)
                .with_deadline(15)
                .with_step("cut", 1)
                .with_step("weld", 2),
            Order::new("B2")
                .with_quantity(2)
                .with_deadline(10)
                .with_step("press", 3),
        ];
        let request = request_for(orders).with_params(params).with_blocked_session(2);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        let mut slots: Vec<(u32, u32)> = outcome
            .schedule
            .entries
            .iter()
            .map(|e| (e.day, e.session))
            .collect();
        let total = slots.len();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), total, "no two entries share a (day, session)");

        // Capacity and block respected.
        for entry in &outcome.schedule.entries {
            assert!(entry.session >= 1 && entry.session <= 4);
        }
        assert!(outcome.schedule.entry_at(1, 2).is_none());
    }

    #[test]
    fn atomicity_occupation_lengths_match_durations() {
        let params = PlanningParams::default().with_sessions_per_day(5);
        let orders = vec![Order::new("B1")
            .with_quantity(4)
            .with_deadline(20)
            .with_step("cut", 2)
            .with_step("polish", 3)];
        let request = request_for(orders).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        for occ in outcome.schedule.occupations(&request.orders) {
            let expected = match occ.step_name.as_str() {
                "cut" => 2,
                "polish" => 3,
                other => panic!("unexpected step {other}"),
            };
            assert_eq!(occ.length, expected);
            assert!(occ.start_session + occ.length - 1 <= 5);
        }
    }

    #[test]
    fn cooldown_gap_holds_between_consecutive_units() {
        let params = PlanningParams::default()
            .with_sessions_per_day(6)
            .with_cooldown(2);
        let request =
            request_for(vec![single_step_order("B1", 4, 2, 30)]).with_params(params);
        let outcome = SessionScheduler::new().schedule(&request);

        assert!(outcome.is_complete());
        let mut starts: Vec<u64> = outcome
            .schedule
            .occupations(&request.orders)
            .iter()
            .map(|o| o.start_global(6))
            .collect();
        starts.sort_unstable();
        for pair in starts.windows(2) {
            // Next start ≥ previous start + duration + cooldown.
            assert!(pair[1] >= pair[0] + 2 + 2);
        }
    }

    #[test]
    fn identical_inputs_produce_identical_schedules() {
        let params = PlanningParams::default()
            .with_sessions_per_day(4)
            .with_cooldown(1);
        let orders = vec![
            single_step_order("B1", 3, 2, 12),
            single_step_order("B2", 2, 1, 6),
            single_step_order("B3", 4, 1, 9),
        ];
        let request = request_for(orders).with_params(params);

        let scheduler = SessionScheduler::new();
        let first = scheduler.schedule(&request);
        let second = scheduler.schedule(&request);
        assert_eq!(first, second);
    }
}
