// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::payload::{AttentionLogEntry, DistractionItem, RitualStep};

/// Validates an attention-log entry's field constraints.
///
/// The time component is validated at construction (`LogTime` cannot hold
/// an out-of-range value), so this checks the remaining required fields.
///
/// # Arguments
///
/// * `entry` - The entry to validate
///
/// # Returns
///
/// * `Ok(())` if the entry's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The activity, interruption, or trigger is empty
/// - The duration is zero minutes
pub fn validate_log_entry(entry: &AttentionLogEntry) -> Result<(), DomainError> {
    if entry.activity.trim().is_empty() {
        return Err(DomainError::EmptyField("activity"));
    }
    if entry.interruption.trim().is_empty() {
        return Err(DomainError::EmptyField("interruption"));
    }
    if entry.trigger.trim().is_empty() {
        return Err(DomainError::EmptyField("trigger"));
    }
    if entry.duration_minutes == 0 {
        return Err(DomainError::InvalidDuration(entry.duration_minutes));
    }
    Ok(())
}

/// Validates a distraction item's field constraints.
///
/// Category, frequency, damage, and quadrant are enumerated types and
/// cannot hold invalid values; only the name needs checking.
///
/// # Errors
///
/// Returns an error if the name is empty.
pub fn validate_distraction(item: &DistractionItem) -> Result<(), DomainError> {
    if item.name.trim().is_empty() {
        return Err(DomainError::EmptyField("name"));
    }
    Ok(())
}

/// Validates a ritual step's field constraints.
///
/// # Errors
///
/// Returns an error if the step name is empty.
pub fn validate_ritual_step(step: &RitualStep) -> Result<(), DomainError> {
    if step.name.trim().is_empty() {
        return Err(DomainError::EmptyField("name"));
    }
    Ok(())
}
