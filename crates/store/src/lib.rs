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

//! The session facade the UI layer consumes.
//!
//! [`CourseStore`] owns the canonical [`CourseState`] and its audit trail
//! and exposes one named operation per command, plus read accessors. All
//! state changes flow through [`focus_course::apply`]; the store commits
//! the resulting state, appends the audit event, and traces the outcome.
//!
//! The crate also carries the file-backed lesson stash ([`LessonStash`])
//! and the scheduled-task abstractions ([`FocusTimer`], [`Debouncer`]).

mod stash;
mod timer;

pub use stash::{LessonStash, StashError, lesson_key};
pub use timer::{Debouncer, FocusTimer, TimerEvent};

use focus_course::{Command, CoreError, CourseState, ViewCursor, apply};
use focus_course_audit::{Actor, AuditEvent, Cause};
use focus_course_domain::{
    AttentionLogEntry, AttentionLogPatch, ChecklistKey, DayId, DayKey, DistractionItem,
    DistractionPatch, EntryId, FocusScorecard, ReflectionEntry, Ritual, Week, WeekId,
    overall_progress, week_progress,
};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by the store boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A command was rejected by the state engine.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

/// The owned session store.
///
/// Holds the current course state, the session participant actor, and an
/// append-only audit trail. There is exactly one writer: every mutation
/// is a synchronous, atomic transition, so a rejected operation leaves
/// the store untouched.
#[derive(Debug)]
pub struct CourseStore {
    state: CourseState,
    actor: Actor,
    trail: Vec<AuditEvent>,
    operation_count: u64,
}

impl CourseStore {
    /// Creates a fresh session store for the given participant session.
    #[must_use]
    pub fn new(session_id: &str) -> Self {
        Self {
            state: CourseState::new(),
            actor: Actor::participant(session_id),
            trail: Vec::new(),
            operation_count: 0,
        }
    }

    /// Applies a command, committing the new state and audit event on
    /// success. The cause records the ordinal of the operation within
    /// this session.
    fn dispatch(&mut self, command: Command, description: &str) -> Result<(), StoreError> {
        self.operation_count += 1;
        let cause: Cause = Cause::new(
            format!("op-{}", self.operation_count),
            String::from(description),
        );
        let name: &'static str = command.name();

        match apply(&self.state, command, self.actor.clone(), cause) {
            Ok(result) => {
                info!(
                    action = name,
                    after = %result.audit_event.after.data,
                    "Applied transition"
                );
                self.state = result.new_state;
                self.trail.push(result.audit_event);
                Ok(())
            }
            Err(e) => {
                warn!(action = name, error = %e, "Rejected command");
                Err(StoreError::Rejected(e))
            }
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Marks a lesson day complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are unknown, the day is the
    /// overview sentinel or still locked, or the lesson's completion
    /// requirement is unmet.
    pub fn mark_day_complete(&mut self, week: WeekId, day: DayId) -> Result<(), StoreError> {
        self.dispatch(
            Command::MarkDayComplete { week, day },
            "Complete-day control",
        )
    }

    /// Moves the navigation cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are unknown or the target
    /// lesson day sits in a locked week.
    pub fn set_current_view(&mut self, week: WeekId, day: DayId) -> Result<(), StoreError> {
        self.dispatch(Command::SetCurrentView { week, day }, "Navigation control")
    }

    /// Unlocks every week whose predecessor is complete. A no-op when
    /// nothing is eligible.
    ///
    /// # Errors
    ///
    /// Never fails on an unmet precondition; the `Result` exists for
    /// uniformity with the other operations.
    pub fn unlock_next_week(&mut self) -> Result<(), StoreError> {
        self.dispatch(Command::UnlockNextWeek, "Unlock control")
    }

    /// Records a new attention-log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails field validation.
    pub fn add_attention_log_entry(&mut self, entry: AttentionLogEntry) -> Result<(), StoreError> {
        self.dispatch(
            Command::AddAttentionLogEntry { entry },
            "Attention log form",
        )
    }

    /// Merges a patch over the attention-log entry with the given id.
    /// A missing id leaves the log unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged entry fails field validation.
    pub fn update_attention_log_entry(
        &mut self,
        id: EntryId,
        patch: AttentionLogPatch,
    ) -> Result<(), StoreError> {
        self.dispatch(
            Command::UpdateAttentionLogEntry { id, patch },
            "Attention log edit",
        )
    }

    /// Deletes the attention-log entry with the given id, if present.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` exists for uniformity.
    pub fn delete_attention_log_entry(&mut self, id: EntryId) -> Result<(), StoreError> {
        self.dispatch(
            Command::DeleteAttentionLogEntry { id },
            "Attention log delete",
        )
    }

    /// Catalogs a new distraction item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item fails field validation.
    pub fn add_distraction(&mut self, item: DistractionItem) -> Result<(), StoreError> {
        self.dispatch(Command::AddDistraction { item }, "Distraction form")
    }

    /// Merges a patch over the distraction with the given id (including
    /// quadrant assignment). A missing id leaves the catalog unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged item fails field validation.
    pub fn update_distraction(
        &mut self,
        id: EntryId,
        patch: DistractionPatch,
    ) -> Result<(), StoreError> {
        self.dispatch(Command::UpdateDistraction { id, patch }, "Distraction edit")
    }

    /// Saves the current focus scorecard, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` exists for uniformity.
    pub fn save_focus_scorecard(&mut self, scorecard: FocusScorecard) -> Result<(), StoreError> {
        self.dispatch(Command::SaveFocusScorecard { scorecard }, "Scorecard form")
    }

    /// Saves the baseline focus scorecard, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` exists for uniformity.
    pub fn save_baseline_scorecard(&mut self, scorecard: FocusScorecard) -> Result<(), StoreError> {
        self.dispatch(
            Command::SaveBaselineScorecard { scorecard },
            "Baseline scorecard form",
        )
    }

    /// Saves the pattern-review reflection, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` exists for uniformity.
    pub fn save_reflections(&mut self, entry: ReflectionEntry) -> Result<(), StoreError> {
        self.dispatch(Command::SaveReflections { entry }, "Reflection form")
    }

    /// Sets one distraction-checklist flag.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` exists for uniformity.
    pub fn set_checklist_item(&mut self, key: ChecklistKey, done: bool) -> Result<(), StoreError> {
        self.dispatch(Command::SetChecklistItem { key, done }, "Checklist toggle")
    }

    /// Saves the ritual sequences, replacing all three phases.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails field validation.
    pub fn save_rituals(&mut self, ritual: Ritual) -> Result<(), StoreError> {
        self.dispatch(Command::SaveRituals { ritual }, "Ritual builder")
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The curriculum weeks with their current lock/completion flags.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.state.weeks
    }

    /// The navigation cursor.
    #[must_use]
    pub const fn cursor(&self) -> ViewCursor {
        self.state.cursor
    }

    /// The attention-log entries, in insertion order.
    #[must_use]
    pub fn attention_log(&self) -> &[AttentionLogEntry] {
        &self.state.attention_log
    }

    /// The cataloged distractions, in insertion order.
    #[must_use]
    pub fn distractions(&self) -> &[DistractionItem] {
        &self.state.distractions
    }

    /// The current focus scorecard, if one has been saved.
    #[must_use]
    pub const fn focus_scorecard(&self) -> Option<&FocusScorecard> {
        self.state.focus_scorecard.as_ref()
    }

    /// The baseline focus scorecard, if one has been saved.
    #[must_use]
    pub const fn baseline_scorecard(&self) -> Option<&FocusScorecard> {
        self.state.baseline_scorecard.as_ref()
    }

    /// The saved reflection, if any.
    #[must_use]
    pub const fn reflections(&self) -> Option<&ReflectionEntry> {
        self.state.reflections.as_ref()
    }

    /// The ritual sequences.
    #[must_use]
    pub const fn rituals(&self) -> &Ritual {
        &self.state.rituals
    }

    /// The distraction-checklist flags.
    #[must_use]
    pub const fn distraction_checklist(&self) -> &BTreeMap<ChecklistKey, bool> {
        &self.state.distraction_checklist
    }

    /// Course-wide completion percentage, computed on demand.
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        overall_progress(&self.state.weeks, self.state.completed_days.len())
    }

    /// Per-week completion percentage; `0` for an unknown week.
    #[must_use]
    pub fn week_progress(&self, week: WeekId) -> u8 {
        week_progress(&self.state.weeks, week)
    }

    /// True if the day is recorded complete in the ledger.
    #[must_use]
    pub fn is_day_complete(&self, key: DayKey) -> bool {
        self.state.is_day_complete(key)
    }

    /// The append-only audit trail, oldest first.
    #[must_use]
    pub fn audit_trail(&self) -> &[AuditEvent] {
        &self.trail
    }
}
