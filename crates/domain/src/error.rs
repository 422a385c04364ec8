// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DayId, WeekId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Week does not exist in the curriculum.
    WeekNotFound(WeekId),
    /// Day does not exist within the specified week.
    DayNotFound {
        /// The week that was searched.
        week: WeekId,
        /// The day identifier that was not found.
        day: DayId,
    },
    /// A required text field was empty.
    EmptyField(&'static str),
    /// A log time string could not be parsed as 24-hour `HH:MM`.
    InvalidTime(String),
    /// A duration was zero or otherwise unusable.
    InvalidDuration(u16),
    /// A scorecard rating was outside the 1-5 range.
    InvalidRating(u8),
    /// A distraction category string was not recognized.
    InvalidCategory(String),
    /// A severity string was not recognized.
    InvalidSeverity(String),
    /// A heatmap quadrant string was not recognized.
    InvalidQuadrant(String),
    /// A ritual phase string was not recognized.
    InvalidRitualPhase(String),
    /// A distraction-checklist key string was not recognized.
    InvalidChecklistKey(String),
    /// The week-overview sentinel (day 0) cannot be marked complete.
    OverviewNotCompletable(WeekId),
    /// The lesson's completion requirement has not been satisfied.
    CompletionRequirementNotMet {
        /// The week of the lesson being completed.
        week: WeekId,
        /// The day of the lesson being completed.
        day: DayId,
        /// Human-readable description of the unmet requirement.
        requirement: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeekNotFound(week) => write!(f, "Week {week} not found"),
            Self::DayNotFound { week, day } => {
                write!(f, "Day {day} not found in week {week}")
            }
            Self::EmptyField(field) => write!(f, "Field '{field}' cannot be empty"),
            Self::InvalidTime(value) => {
                write!(f, "Invalid time '{value}': expected 24-hour HH:MM")
            }
            Self::InvalidDuration(minutes) => {
                write!(f, "Invalid duration: {minutes} minutes")
            }
            Self::InvalidRating(value) => {
                write!(f, "Invalid rating: {value}. Must be between 1 and 5")
            }
            Self::InvalidCategory(value) => write!(f, "Invalid distraction category: '{value}'"),
            Self::InvalidSeverity(value) => write!(f, "Invalid severity: '{value}'"),
            Self::InvalidQuadrant(value) => write!(f, "Invalid quadrant: '{value}'"),
            Self::InvalidRitualPhase(value) => write!(f, "Invalid ritual phase: '{value}'"),
            Self::InvalidChecklistKey(value) => write!(f, "Invalid checklist key: '{value}'"),
            Self::OverviewNotCompletable(week) => {
                write!(f, "The overview of week {week} is not a completable lesson")
            }
            Self::CompletionRequirementNotMet {
                week,
                day,
                requirement,
            } => {
                write!(
                    f,
                    "Cannot complete day {day} of week {week}: {requirement}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
