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

mod curriculum;
mod error;
mod payload;
mod progress;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use curriculum::{CompletionRequirement, Lesson, completion_requirement, initial_weeks, lesson_for};
pub use error::DomainError;
pub use payload::{
    AttentionLogEntry, AttentionLogPatch, ChecklistKey, DistractionCategory, DistractionItem,
    DistractionPatch, EntryId, FocusScorecard, LogTime, Quadrant, Rating, ReflectionEntry, Ritual,
    RitualPhase, RitualStep, Severity,
};
pub use progress::{overall_progress, week_progress};
pub use types::{Day, DayId, DayKey, DayPhase, Week, WeekId};
pub use validation::{validate_distraction, validate_log_entry, validate_ritual_step};
