// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Identifies a week within the course curriculum.
///
/// Week identifiers are 1-based and sequential; week N+1 is unlocked only
/// once week N is fully complete.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WeekId(u8);

impl WeekId {
    /// Creates a new `WeekId`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the identifier of the immediately preceding week, if any.
    ///
    /// Week 1 has no predecessor.
    #[must_use]
    pub const fn predecessor(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }
}

impl std::fmt::Display for WeekId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a day within a week.
///
/// Day identifiers are 1-based and unique within their week. Day 0 is the
/// reserved overview sentinel: a valid navigation target that shows the
/// week overview, never a lesson.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DayId(u8);

impl DayId {
    /// The reserved sentinel meaning "show the week overview".
    pub const OVERVIEW: Self = Self(0);

    /// Creates a new `DayId`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns true if this is the week-overview sentinel.
    #[must_use]
    pub const fn is_overview(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for DayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite identity of a day within the course: the ledger key.
///
/// Displayed as `"W-D"`, which is also the key format used by the original
/// completion record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DayKey {
    /// The week component.
    pub week: WeekId,
    /// The day component.
    pub day: DayId,
}

impl DayKey {
    /// Creates a new `DayKey`.
    #[must_use]
    pub const fn new(week: WeekId, day: DayId) -> Self {
        Self { week, day }
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.week, self.day)
    }
}

/// The per-day lifecycle phase.
///
/// A day moves `Locked` → `Unlocked` → `Complete`. `Complete` is terminal:
/// there is no reset within a session. `Locked` → `Unlocked` happens only
/// at week granularity, batch-applied by the unlock gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    /// The owning week has not been unlocked yet.
    Locked,
    /// Accessible but not yet marked complete.
    Unlocked,
    /// Marked complete. Terminal.
    Complete,
}

impl DayPhase {
    /// Checks if a transition from this phase to another is valid.
    ///
    /// Valid transitions are:
    /// - `Locked` → `Unlocked`
    /// - `Unlocked` → `Complete`
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Locked, Self::Unlocked) | (Self::Unlocked, Self::Complete)
        )
    }
}

impl std::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            Self::Locked => "Locked",
            Self::Unlocked => "Unlocked",
            Self::Complete => "Complete",
        };
        write!(f, "{label}")
    }
}

/// A single lesson day within a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The day identifier, unique within the owning week.
    pub id: DayId,
    /// The lesson title.
    pub title: String,
    /// The short lesson description.
    pub description: String,
    /// Whether the day has been marked complete. Set at most once.
    pub is_complete: bool,
    /// Whether the day is locked. Derived from the owning week's lock
    /// state at unlock time.
    pub is_locked: bool,
}

impl Day {
    /// Creates a new day in the given lock state.
    #[must_use]
    pub fn new(id: DayId, title: &str, description: &str, is_locked: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            is_complete: false,
            is_locked,
        }
    }

    /// Returns the lifecycle phase derived from the stored flags.
    #[must_use]
    pub const fn phase(&self) -> DayPhase {
        if self.is_complete {
            DayPhase::Complete
        } else if self.is_locked {
            DayPhase::Locked
        } else {
            DayPhase::Unlocked
        }
    }
}

/// A week of the course curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// The week identifier.
    pub id: WeekId,
    /// The week title (e.g., "Week 1").
    pub title: String,
    /// The week theme.
    pub theme: String,
    /// The week description.
    pub description: String,
    /// Whether the week is locked. Week 1 is never locked.
    pub is_locked: bool,
    /// Whether every day in the week is complete.
    pub is_complete: bool,
    /// The ordered lesson days.
    pub days: Vec<Day>,
}

impl Week {
    /// Looks up a day by identifier.
    #[must_use]
    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Returns true if every day in the week is complete.
    ///
    /// This is the derivation behind the `is_complete` flag; the two must
    /// agree after every ledger mutation.
    #[must_use]
    pub fn all_days_complete(&self) -> bool {
        self.days.iter().all(|d| d.is_complete)
    }

    /// Counts the completed days in this week.
    #[must_use]
    pub fn completed_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_complete).count()
    }
}
