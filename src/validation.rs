//! Input validation for scheduling requests.
//!
//! Checks structural integrity of orders, progress records, and request
//! parameters before scheduling. Detects:
//! - Duplicate IDs (orders, step names, progress rows)
//! - Orders with no steps, zero quantities, zero-duration steps
//! - Steps too long to ever fit inside a day
//! - Progress rows referencing unknown orders or steps
//! - Remaining counts above the order quantity
//! - Blocked sessions outside the day's session range
//!
//! The core tolerates all of these (dangling progress rows are ignored,
//! oversized steps simply never place); validation exists so hosts can
//! diagnose them before a run instead of reading an infeasible result.

use std::collections::HashSet;

use crate::models::{Order, PlanningParams, StepProgress};
use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identity.
    DuplicateId,
    /// An order has no steps.
    EmptyOrder,
    /// An order has a zero quantity.
    ZeroQuantity,
    /// A step has a zero duration.
    ZeroDuration,
    /// A step's duration exceeds the sessions in a day.
    OversizedStep,
    /// A progress row references an unknown order or step.
    UnknownReference,
    /// A progress row's remaining count exceeds the order quantity.
    ExcessRemaining,
    /// A blocked session lies outside `[1, sessions_per_day]`.
    InvalidBlockedSession,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates orders and progress against the planning parameters.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    orders: &[Order],
    progress: &[StepProgress],
    params: &PlanningParams,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut order_ids = HashSet::new();
    for order in orders {
        if !order_ids.insert(order.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate order ID: {}", order.id),
            ));
        }

        if order.steps.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyOrder,
                format!("Order '{}' has no steps", order.id),
            ));
        }

        if order.quantity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantity,
                format!("Order '{}' has zero quantity", order.id),
            ));
        }

        let mut step_names = HashSet::new();
        for step in &order.steps {
            if !step_names.insert(step.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Order '{}' has duplicate step '{}'", order.id, step.name),
                ));
            }
            if step.duration == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ZeroDuration,
                    format!("Step '{}' of order '{}' has zero duration", step.name, order.id),
                ));
            } else if step.duration > params.sessions_per_day {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OversizedStep,
                    format!(
                        "Step '{}' of order '{}' needs {} sessions but a day has {}",
                        step.name, order.id, step.duration, params.sessions_per_day
                    ),
                ));
            }
        }
    }

    let mut progress_keys = HashSet::new();
    for row in progress {
        if !progress_keys.insert((row.order_id.as_str(), row.step_name.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!(
                    "Duplicate progress row for order '{}' step '{}'",
                    row.order_id, row.step_name
                ),
            ));
        }

        match orders.iter().find(|o| o.id == row.order_id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Progress row references unknown order '{}'", row.order_id),
            )),
            Some(order) => {
                if order.step_duration(&row.step_name).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownReference,
                        format!(
                            "Progress row references unknown step '{}' of order '{}'",
                            row.step_name, row.order_id
                        ),
                    ));
                }
                if row.remaining > order.quantity {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ExcessRemaining,
                        format!(
                            "Progress row for order '{}' step '{}' has remaining {} above quantity {}",
                            row.order_id, row.step_name, row.remaining, order.quantity
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a complete scheduling request: input checks plus the
/// blocked-session range.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = match validate_input(&request.orders, &request.progress, &request.params) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    let calendar = request.params.calendar();
    for &session in &request.blocked_sessions {
        if !calendar.contains_session(session) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBlockedSession,
                format!(
                    "Blocked session {} outside [1, {}]",
                    session, request.params.sessions_per_day
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
