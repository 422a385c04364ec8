// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed Focus Rebuild curriculum: the week/day template the course
//! state is seeded from, and the registry mapping day coordinates to
//! lesson units and their completion requirements.

use crate::types::{Day, DayId, DayKey, Week, WeekId};

/// A renderable lesson unit, one per curriculum day.
///
/// Day 0 of any week is the overview sentinel and maps to no lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// Week 1, day 1: track attention leaks.
    AttentionAwareness,
    /// Week 1, day 2: categorize and place distractions.
    DistractionHeatmap,
    /// Week 1, day 3: measure current focus capacity.
    BaselineFocusTest,
    /// Week 1, day 4: remove the top distractions.
    DistractionRemovalSprint,
    /// Week 1, day 5: rebuild mono-tasking ability.
    SingleTaskTraining,
    /// Week 1, day 6: identify patterns and leverage points.
    ReflectionPatternReview,
    /// Week 1, day 7: lock in progress and set intentions.
    FoundationResetRitual,
    /// Week 2, day 1: assess the physical workspace.
    EnvironmentAudit,
    /// Week 2, day 2: transform the work environment.
    WorkspaceRedesign,
    /// Week 2, day 3: clean up the digital life.
    DigitalHygieneReset,
    /// Week 2, day 4: create personal focus rituals.
    FocusRitualDesign,
    /// Week 2, day 5: extend focus capacity to 60 minutes.
    DeepWorkTraining,
    /// Week 2, day 6: eliminate remaining friction.
    FrictionRemoval,
    /// Week 2, day 7: finalize the focus architecture.
    EnvironmentLockIn,
}

/// What must already be recorded before a lesson's day can be completed.
///
/// Requirements are declared here as registry data and enforced centrally
/// when a completion is applied, so no lesson can drift out of sync with
/// its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionRequirement {
    /// No precondition; the day completes on request.
    None,
    /// At least one attention-log entry must exist.
    AttentionLogEntryRecorded,
    /// At least one distraction item must be cataloged.
    DistractionCataloged,
    /// The baseline scorecard must have been saved.
    BaselineScorecardSaved,
    /// The pattern-review reflection must have been saved.
    ReflectionSaved,
}

impl CompletionRequirement {
    /// Human-readable description of the unmet requirement, used in
    /// rejection errors.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "no requirement",
            Self::AttentionLogEntryRecorded => "at least one attention-log entry is required",
            Self::DistractionCataloged => "at least one distraction must be cataloged",
            Self::BaselineScorecardSaved => "the baseline scorecard must be saved first",
            Self::ReflectionSaved => "the reflection must be saved first",
        }
    }
}

/// Looks up the lesson unit for a day coordinate.
///
/// Returns `None` for the overview sentinel (day 0) and for coordinates
/// outside the curriculum.
#[must_use]
pub const fn lesson_for(key: DayKey) -> Option<Lesson> {
    match (key.week.value(), key.day.value()) {
        (1, 1) => Some(Lesson::AttentionAwareness),
        (1, 2) => Some(Lesson::DistractionHeatmap),
        (1, 3) => Some(Lesson::BaselineFocusTest),
        (1, 4) => Some(Lesson::DistractionRemovalSprint),
        (1, 5) => Some(Lesson::SingleTaskTraining),
        (1, 6) => Some(Lesson::ReflectionPatternReview),
        (1, 7) => Some(Lesson::FoundationResetRitual),
        (2, 1) => Some(Lesson::EnvironmentAudit),
        (2, 2) => Some(Lesson::WorkspaceRedesign),
        (2, 3) => Some(Lesson::DigitalHygieneReset),
        (2, 4) => Some(Lesson::FocusRitualDesign),
        (2, 5) => Some(Lesson::DeepWorkTraining),
        (2, 6) => Some(Lesson::FrictionRemoval),
        (2, 7) => Some(Lesson::EnvironmentLockIn),
        _ => None,
    }
}

/// Returns the completion requirement for a lesson.
#[must_use]
pub const fn completion_requirement(lesson: Lesson) -> CompletionRequirement {
    match lesson {
        Lesson::AttentionAwareness => CompletionRequirement::AttentionLogEntryRecorded,
        Lesson::DistractionHeatmap => CompletionRequirement::DistractionCataloged,
        Lesson::BaselineFocusTest => CompletionRequirement::BaselineScorecardSaved,
        Lesson::ReflectionPatternReview => CompletionRequirement::ReflectionSaved,
        Lesson::DistractionRemovalSprint
        | Lesson::SingleTaskTraining
        | Lesson::FoundationResetRitual
        | Lesson::EnvironmentAudit
        | Lesson::WorkspaceRedesign
        | Lesson::DigitalHygieneReset
        | Lesson::FocusRitualDesign
        | Lesson::DeepWorkTraining
        | Lesson::FrictionRemoval
        | Lesson::EnvironmentLockIn => CompletionRequirement::None,
    }
}

fn week_one() -> Week {
    let days: Vec<Day> = vec![
        Day::new(
            DayId::new(1),
            "Attention Awareness",
            "Track your attention leaks and discover patterns",
            false,
        ),
        Day::new(
            DayId::new(2),
            "Distraction Heatmap",
            "Categorize and visualize your distractions",
            false,
        ),
        Day::new(
            DayId::new(3),
            "Baseline Focus Test",
            "Measure your current focus capacity",
            false,
        ),
        Day::new(
            DayId::new(4),
            "Distraction Removal Sprint",
            "Remove your top distractions",
            false,
        ),
        Day::new(
            DayId::new(5),
            "Single-Task Training",
            "Rebuild your mono-tasking ability",
            false,
        ),
        Day::new(
            DayId::new(6),
            "Reflection & Pattern Review",
            "Identify patterns and leverage points",
            false,
        ),
        Day::new(
            DayId::new(7),
            "Foundation Reset Ritual",
            "Lock in your progress and set intentions",
            false,
        ),
    ];

    Week {
        id: WeekId::new(1),
        title: String::from("Week 1"),
        theme: String::from("Attention Audit & Foundation Reset"),
        description: String::from(
            "Awareness before control. This week you'll discover your attention \
             patterns and build the foundation for deep focus.",
        ),
        is_locked: false,
        is_complete: false,
        days,
    }
}

fn week_two() -> Week {
    let days: Vec<Day> = vec![
        Day::new(
            DayId::new(1),
            "Focus Environment Audit",
            "Assess your physical workspace",
            true,
        ),
        Day::new(
            DayId::new(2),
            "Workspace Redesign Sprint",
            "Transform your work environment",
            true,
        ),
        Day::new(
            DayId::new(3),
            "Digital Hygiene Reset",
            "Clean up your digital life",
            true,
        ),
        Day::new(
            DayId::new(4),
            "Focus Ritual Design",
            "Create your personal focus rituals",
            true,
        ),
        Day::new(
            DayId::new(5),
            "60-Min Deep Work Training",
            "Extend your focus capacity",
            true,
        ),
        Day::new(
            DayId::new(6),
            "Friction Removal & Automation",
            "Eliminate remaining friction",
            true,
        ),
        Day::new(
            DayId::new(7),
            "Environment Lock-In",
            "Finalize your focus architecture",
            true,
        ),
    ];

    Week {
        id: WeekId::new(2),
        title: String::from("Week 2"),
        theme: String::from("Environmental & Digital Architecture"),
        description: String::from(
            "Make focus the default. Design your environment and digital spaces \
             to support deep work automatically.",
        ),
        is_locked: true,
        is_complete: false,
        days,
    }
}

/// Builds the fixed course template: week 1 unlocked, later weeks locked.
///
/// Weeks are never created or destroyed after this; only their lock and
/// completion flags change during a session.
#[must_use]
pub fn initial_weeks() -> Vec<Week> {
    vec![week_one(), week_two()]
}
