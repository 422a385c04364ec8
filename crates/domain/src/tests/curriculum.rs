// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CompletionRequirement, DayId, DayKey, Lesson, Week, WeekId, completion_requirement,
    initial_weeks, lesson_for,
};

fn key(week: u8, day: u8) -> DayKey {
    DayKey::new(WeekId::new(week), DayId::new(day))
}

#[test]
fn test_template_shape() {
    let weeks: Vec<Week> = initial_weeks();

    assert_eq!(weeks.len(), 2);
    for week in &weeks {
        assert_eq!(week.days.len(), 7);
        assert!(!week.is_complete);
        for day in &week.days {
            assert!(!day.is_complete);
            assert_eq!(day.is_locked, week.is_locked);
        }
    }
}

#[test]
fn test_week_one_starts_unlocked_week_two_locked() {
    let weeks: Vec<Week> = initial_weeks();

    assert!(!weeks[0].is_locked);
    assert!(weeks[1].is_locked);
    assert_eq!(weeks[0].theme, "Attention Audit & Foundation Reset");
    assert_eq!(weeks[1].theme, "Environmental & Digital Architecture");
}

#[test]
fn test_every_curriculum_day_has_a_lesson() {
    let weeks: Vec<Week> = initial_weeks();

    for week in &weeks {
        for day in &week.days {
            let lesson = lesson_for(DayKey::new(week.id, day.id));
            assert!(lesson.is_some(), "no lesson for {}-{}", week.id, day.id);
        }
    }
}

#[test]
fn test_overview_sentinel_has_no_lesson() {
    assert_eq!(lesson_for(key(1, 0)), None);
    assert_eq!(lesson_for(key(2, 0)), None);
}

#[test]
fn test_unknown_coordinates_have_no_lesson() {
    assert_eq!(lesson_for(key(1, 8)), None);
    assert_eq!(lesson_for(key(3, 1)), None);
}

#[test]
fn test_lesson_registry_matches_template_titles() {
    assert_eq!(lesson_for(key(1, 1)), Some(Lesson::AttentionAwareness));
    assert_eq!(lesson_for(key(1, 7)), Some(Lesson::FoundationResetRitual));
    assert_eq!(lesson_for(key(2, 1)), Some(Lesson::EnvironmentAudit));
    assert_eq!(lesson_for(key(2, 7)), Some(Lesson::EnvironmentLockIn));
}

#[test]
fn test_completion_requirements() {
    assert_eq!(
        completion_requirement(Lesson::AttentionAwareness),
        CompletionRequirement::AttentionLogEntryRecorded
    );
    assert_eq!(
        completion_requirement(Lesson::DistractionHeatmap),
        CompletionRequirement::DistractionCataloged
    );
    assert_eq!(
        completion_requirement(Lesson::BaselineFocusTest),
        CompletionRequirement::BaselineScorecardSaved
    );
    assert_eq!(
        completion_requirement(Lesson::ReflectionPatternReview),
        CompletionRequirement::ReflectionSaved
    );
    assert_eq!(
        completion_requirement(Lesson::SingleTaskTraining),
        CompletionRequirement::None
    );
    assert_eq!(
        completion_requirement(Lesson::EnvironmentLockIn),
        CompletionRequirement::None
    );
}
