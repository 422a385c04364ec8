// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focus_course_domain::{
    AttentionLogEntry, AttentionLogPatch, ChecklistKey, DayId, DistractionItem, DistractionPatch,
    EntryId, FocusScorecard, ReflectionEntry, Ritual, WeekId,
};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark a lesson day complete and record it in the ledger.
    ///
    /// Idempotent: re-applying to an already-complete day changes nothing.
    /// There is no inverse command.
    MarkDayComplete {
        /// The week containing the day.
        week: WeekId,
        /// The day to complete.
        day: DayId,
    },
    /// Move the navigation cursor to a week/day pair.
    ///
    /// Day 0 is the overview sentinel and is always a valid target for an
    /// unlocked (or any existing) week's overview.
    SetCurrentView {
        /// The week to view.
        week: WeekId,
        /// The day to view, or `DayId::OVERVIEW`.
        day: DayId,
    },
    /// Unlock every still-locked week whose predecessor is complete.
    ///
    /// A no-op (not an error) when no week is eligible.
    UnlockNextWeek,
    /// Append an attention-log entry.
    AddAttentionLogEntry {
        /// The entry to append.
        entry: AttentionLogEntry,
    },
    /// Merge a partial update over the attention-log entry with this id.
    UpdateAttentionLogEntry {
        /// The entry to update.
        id: EntryId,
        /// The fields to replace.
        patch: AttentionLogPatch,
    },
    /// Remove the attention-log entry with this id, if present.
    DeleteAttentionLogEntry {
        /// The entry to remove.
        id: EntryId,
    },
    /// Append a distraction item.
    AddDistraction {
        /// The item to append.
        item: DistractionItem,
    },
    /// Merge a partial update over the distraction item with this id.
    ///
    /// Also carries quadrant assignment from the heatmap drag-drop.
    UpdateDistraction {
        /// The item to update.
        id: EntryId,
        /// The fields to replace.
        patch: DistractionPatch,
    },
    /// Overwrite the current focus scorecard.
    SaveFocusScorecard {
        /// The scorecard to store.
        scorecard: FocusScorecard,
    },
    /// Overwrite the baseline focus scorecard.
    SaveBaselineScorecard {
        /// The scorecard to store.
        scorecard: FocusScorecard,
    },
    /// Overwrite the pattern-review reflection.
    SaveReflections {
        /// The reflection to store.
        entry: ReflectionEntry,
    },
    /// Set one distraction-checklist flag.
    SetChecklistItem {
        /// The fixed checklist key.
        key: ChecklistKey,
        /// The new done flag.
        done: bool,
    },
    /// Overwrite all three ritual sequences.
    SaveRituals {
        /// The rituals to store.
        ritual: Ritual,
    },
}

impl Command {
    /// The action name recorded on this command's audit event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MarkDayComplete { .. } => "MarkDayComplete",
            Self::SetCurrentView { .. } => "SetCurrentView",
            Self::UnlockNextWeek => "UnlockNextWeek",
            Self::AddAttentionLogEntry { .. } => "AddAttentionLogEntry",
            Self::UpdateAttentionLogEntry { .. } => "UpdateAttentionLogEntry",
            Self::DeleteAttentionLogEntry { .. } => "DeleteAttentionLogEntry",
            Self::AddDistraction { .. } => "AddDistraction",
            Self::UpdateDistraction { .. } => "UpdateDistraction",
            Self::SaveFocusScorecard { .. } => "SaveFocusScorecard",
            Self::SaveBaselineScorecard { .. } => "SaveBaselineScorecard",
            Self::SaveReflections { .. } => "SaveReflections",
            Self::SetChecklistItem { .. } => "SetChecklistItem",
            Self::SaveRituals { .. } => "SaveRituals",
        }
    }
}
