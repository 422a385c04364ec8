// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focus_course_domain::{DayId, DomainError, WeekId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Navigation targeted content in a still-locked week.
    ///
    /// Locking is enforced here, at the transition boundary, rather than
    /// by the caller declining to ask.
    LockedContent {
        /// The locked week.
        week: WeekId,
        /// The requested day within it.
        day: DayId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::LockedContent { week, day } => {
                write!(
                    f,
                    "Day {day} of week {week} is locked; complete the previous week first"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
