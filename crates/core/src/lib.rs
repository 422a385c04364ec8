// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use focus_course_domain::{DayId, DomainError, WeekId};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{CourseState, TransitionResult, ViewCursor};

/// Validates that a week exists in the curriculum.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `state` - The course state to check
/// * `week` - The week to validate
///
/// # Returns
///
/// * `Ok(())` if the week exists
/// * `Err(DomainError::WeekNotFound)` if it does not
///
/// # Errors
///
/// Returns an error if the week is not part of the curriculum.
pub fn validate_week_exists(state: &CourseState, week: WeekId) -> Result<(), DomainError> {
    if state.week(week).is_none() {
        return Err(DomainError::WeekNotFound(week));
    }
    Ok(())
}

/// Validates that a day exists in the specified week.
///
/// This is a read-only validation that does not create audit events.
/// The overview sentinel (day 0) counts as existing for any valid week.
///
/// # Arguments
///
/// * `state` - The course state to check
/// * `week` - The week to check within
/// * `day` - The day to validate
///
/// # Returns
///
/// * `Ok(())` if both the week and day exist
/// * `Err(DomainError::WeekNotFound)` if the week does not exist
/// * `Err(DomainError::DayNotFound)` if the day does not exist in it
///
/// # Errors
///
/// Returns an error if:
/// - The week is not part of the curriculum
/// - The day is neither the overview sentinel nor a lesson day of the week
pub fn validate_day_exists(
    state: &CourseState,
    week: WeekId,
    day: DayId,
) -> Result<(), DomainError> {
    validate_week_exists(state, week)?;

    if day.is_overview() {
        return Ok(());
    }
    if state.week(week).and_then(|w| w.day(day)).is_none() {
        return Err(DomainError::DayNotFound { week, day });
    }
    Ok(())
}
