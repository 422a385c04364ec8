// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focus_course_audit::{AuditEvent, StateSnapshot};
use focus_course_domain::{
    AttentionLogEntry, ChecklistKey, Day, DayId, DayKey, DistractionItem, FocusScorecard,
    ReflectionEntry, Ritual, Week, WeekId, initial_weeks,
};
use std::collections::{BTreeMap, BTreeSet};

/// The navigation cursor: which week/day the participant is viewing.
///
/// `day == DayId::OVERVIEW` means the week overview is shown rather than
/// a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCursor {
    /// The week currently in view.
    pub week: WeekId,
    /// The day currently in view, or the overview sentinel.
    pub day: DayId,
}

impl ViewCursor {
    /// Creates a cursor at the given coordinates.
    #[must_use]
    pub const fn new(week: WeekId, day: DayId) -> Self {
        Self { week, day }
    }
}

/// The complete course session state.
///
/// Single-threaded, single-writer UI state: every mutation is a discrete
/// synchronous transition applied by `apply()`. The ledger invariant
/// holds throughout: `completed_days` contains a key iff the matching
/// day's `is_complete` flag is set; both change inside one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseState {
    /// The curriculum weeks, seeded from the fixed template.
    pub weeks: Vec<Week>,
    /// The navigation cursor.
    pub cursor: ViewCursor,
    /// The completion ledger.
    pub completed_days: BTreeSet<DayKey>,
    /// Attention-audit log entries, course-wide.
    pub attention_log: Vec<AttentionLogEntry>,
    /// Cataloged distractions, course-wide.
    pub distractions: Vec<DistractionItem>,
    /// The current focus scorecard. Overwrite semantics, no history.
    pub focus_scorecard: Option<FocusScorecard>,
    /// The baseline focus scorecard. Overwrite semantics, no history.
    pub baseline_scorecard: Option<FocusScorecard>,
    /// The pattern-review reflection. Overwrite semantics.
    pub reflections: Option<ReflectionEntry>,
    /// The participant's ritual sequences.
    pub rituals: Ritual,
    /// The distraction-removal checklist flags.
    pub distraction_checklist: BTreeMap<ChecklistKey, bool>,
}

impl CourseState {
    /// Creates a fresh session: template weeks, cursor at the week 1
    /// overview, every payload collection empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weeks: initial_weeks(),
            cursor: ViewCursor::new(WeekId::new(1), DayId::OVERVIEW),
            completed_days: BTreeSet::new(),
            attention_log: Vec::new(),
            distractions: Vec::new(),
            focus_scorecard: None,
            baseline_scorecard: None,
            reflections: None,
            rituals: Ritual::default(),
            distraction_checklist: BTreeMap::new(),
        }
    }

    /// Looks up a week by identifier.
    #[must_use]
    pub fn week(&self, id: WeekId) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id == id)
    }

    /// Looks up a day by its composite key.
    #[must_use]
    pub fn day(&self, key: DayKey) -> Option<&Day> {
        self.week(key.week).and_then(|w| w.day(key.day))
    }

    /// Returns true if the day is recorded complete in the ledger.
    #[must_use]
    pub fn is_day_complete(&self, key: DayKey) -> bool {
        self.completed_days.contains(&key)
    }

    /// Total number of lesson days across all weeks.
    #[must_use]
    pub fn total_day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "view={}-{},completed={}/{},log={},distractions={},checklist={}",
            self.cursor.week,
            self.cursor.day,
            self.completed_days.len(),
            self.total_day_count(),
            self.attention_log.len(),
            self.distractions.len(),
            self.distraction_checklist.values().filter(|v| **v).count(),
        ))
    }
}

impl Default for CourseState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: CourseState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
