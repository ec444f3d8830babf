//! Plan quality metrics (KPIs).
//!
//! Computes presentation-side indicators from a produced schedule and its
//! input orders. Read-only: KPIs never feed decisions back into the core.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Last Day | Latest day carrying an entry (makespan in days) |
//! | Total Late Days | Sum of max(0, completion − nominal deadline) |
//! | Max Late Days | Largest single overrun |
//! | On-Time Rate | Fraction of placed orders meeting the nominal deadline |
//! | Avg Utilization | Mean per-day session load over the plan span |
//!
//! Lateness is measured against the NOMINAL deadline — the safety buffer
//! is a detection margin of the core, not a presentation concept.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{Order, PlanningParams, Schedule};

/// Plan performance indicators. All day values are calendar day numbers.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Latest day carrying an entry; 0 for an empty schedule.
    pub last_day: u32,
    /// Sum of per-order overruns past the nominal deadline, in days.
    pub total_late_days: u32,
    /// Largest single overrun, in days.
    pub max_late_days: u32,
    /// Fraction of placed orders finishing on or before their nominal
    /// deadline (0.0..1.0). 1.0 when nothing is placed.
    pub on_time_rate: f64,
    /// Mean session load across the plan span (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-day session load (day → used / sessions_per_day).
    pub load_by_day: HashMap<u32, f64>,
    /// Completion day per placed order.
    pub completion_by_order: HashMap<String, u32>,
}

impl PlanKpi {
    /// Computes KPIs from a schedule and its input orders.
    pub fn calculate(schedule: &Schedule, orders: &[Order], params: &PlanningParams) -> Self {
        let last_day = schedule.last_day();
        let mut total_late: u32 = 0;
        let mut max_late: u32 = 0;
        let mut on_time: usize = 0;
        let mut placed: usize = 0;
        let mut completion_by_order = HashMap::new();

        for order in orders {
            if let Some(completion) = schedule.completion_day(&order.id) {
                placed += 1;
                completion_by_order.insert(order.id.clone(), completion);
                if completion > order.deadline_day {
                    let late = completion - order.deadline_day;
                    total_late += late;
                    max_late = max_late.max(late);
                } else {
                    on_time += 1;
                }
            }
        }

        let mut used_by_day: HashMap<u32, u32> = HashMap::new();
        for entry in &schedule.entries {
            *used_by_day.entry(entry.day).or_insert(0) += 1;
        }
        let spd = params.sessions_per_day.max(1) as f64;
        let load_by_day: HashMap<u32, f64> = used_by_day
            .into_iter()
            .map(|(day, used)| (day, f64::from(used) / spd))
            .collect();
        let avg_utilization = if load_by_day.is_empty() {
            0.0
        } else {
            let first_day = schedule.entries.iter().map(|e| e.day).min().unwrap_or(1);
            let span = f64::from(last_day - first_day + 1);
            schedule.len() as f64 / (span * spd)
        };

        let on_time_rate = if placed == 0 {
            1.0
        } else {
            on_time as f64 / placed as f64
        };

        Self {
            last_day,
            total_late_days: total_late,
            max_late_days: max_late,
            on_time_rate,
            avg_utilization,
            load_by_day,
            completion_by_order,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_late_days: u32, min_utilization: f64) -> bool {
        self.max_late_days <= max_late_days && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn order(id: &str, deadline: u32) -> Order {
        Order::new(id)
            .with_quantity(1)
            .with_deadline(deadline)
            .with_step("main", 1)
    }

    fn params() -> PlanningParams {
        PlanningParams::default().with_sessions_per_day(4)
    }

    #[test]
    fn test_kpi_basic() {
        let orders = vec![order("B1", 2), order("B2", 2)];
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new(1, 1, "B1", "main"));
        schedule.add_entry(ScheduleEntry::new(1, 2, "B2", "main"));

        let kpi = PlanKpi::calculate(&schedule, &orders, &params());
        assert_eq!(kpi.last_day, 1);
        assert_eq!(kpi.total_late_days, 0);
        assert_eq!(kpi.max_late_days, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.completion_by_order["B1"], 1);
    }

    #[test]
    fn test_kpi_lateness() {
        let orders = vec![order("B1", 1), order("B2", 5)];
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new(3, 1, "B1", "main")); // 2 days late
        schedule.add_entry(ScheduleEntry::new(3, 2, "B2", "main")); // on time

        let kpi = PlanKpi::calculate(&schedule, &orders, &params());
        assert_eq!(kpi.total_late_days, 2);
        assert_eq!(kpi.max_late_days, 2);
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_load_and_utilization() {
        let orders = vec![order("B1", 9)];
        let mut schedule = Schedule::new();
        for session in 1..=4 {
            schedule.add_entry(ScheduleEntry::new(1, session, "B1", "main"));
        }
        schedule.add_entry(ScheduleEntry::new(2, 1, "B1", "main"));

        let kpi = PlanKpi::calculate(&schedule, &orders, &params());
        assert!((kpi.load_by_day[&1] - 1.0).abs() < 1e-10);
        assert!((kpi.load_by_day[&2] - 0.25).abs() < 1e-10);
        // 5 entries over 2 days of 4 sessions.
        assert!((kpi.avg_utilization - 0.625).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unplaced_order_not_counted() {
        let orders = vec![order("B1", 2), order("B9", 2)];
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new(1, 1, "B1", "main"));

        let kpi = PlanKpi::calculate(&schedule, &orders, &params());
        assert_eq!(kpi.completion_by_order.len(), 1);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlanKpi::calculate(&Schedule::new(), &[], &params());
        assert_eq!(kpi.last_day, 0);
        assert_eq!(kpi.total_late_days, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
        assert!(kpi.load_by_day.is_empty());
    }

    #[test]
    fn test_meets_thresholds() {
        let orders = vec![order("B1", 1)];
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new(2, 1, "B1", "main")); // 1 day late

        let kpi = PlanKpi::calculate(&schedule, &orders, &params());
        assert!(kpi.meets_thresholds(1, 0.0));
        assert!(!kpi.meets_thresholds(0, 0.0));
        assert!(!kpi.meets_thresholds(1, 0.9)); // one of four sessions used
    }
}
