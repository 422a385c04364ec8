// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the navigation cursor and the read-only existence
//! validators.

use crate::{
    Command, CoreError, CourseState, apply, validate_day_exists, validate_week_exists,
};
use focus_course_domain::{DayId, DomainError, WeekId};

use super::helpers::{apply_ok, complete_week_one, create_test_actor, create_test_cause};

#[test]
fn test_fresh_session_starts_at_week_one_overview() {
    let state: CourseState = CourseState::new();

    assert_eq!(state.cursor.week, WeekId::new(1));
    assert_eq!(state.cursor.day, DayId::OVERVIEW);
    assert!(state.cursor.day.is_overview());
}

#[test]
fn test_set_current_view_moves_the_cursor() {
    let state: CourseState = apply_ok(
        &CourseState::new(),
        Command::SetCurrentView {
            week: WeekId::new(1),
            day: DayId::new(3),
        },
    );

    assert_eq!(state.cursor.week, WeekId::new(1));
    assert_eq!(state.cursor.day, DayId::new(3));
}

#[test]
fn test_overview_of_locked_week_is_addressable() {
    // Locked weeks still show their overview card.
    let state: CourseState = apply_ok(
        &CourseState::new(),
        Command::SetCurrentView {
            week: WeekId::new(2),
            day: DayId::OVERVIEW,
        },
    );

    assert_eq!(state.cursor.week, WeekId::new(2));
    assert_eq!(state.cursor.day, DayId::OVERVIEW);
}

#[test]
fn test_lesson_day_of_locked_week_is_rejected() {
    let result = apply(
        &CourseState::new(),
        Command::SetCurrentView {
            week: WeekId::new(2),
            day: DayId::new(1),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::LockedContent {
            week: WeekId::new(2),
            day: DayId::new(1),
        }
    );
}

#[test]
fn test_navigation_rejects_unknown_week() {
    let result = apply(
        &CourseState::new(),
        Command::SetCurrentView {
            week: WeekId::new(5),
            day: DayId::OVERVIEW,
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::WeekNotFound(WeekId::new(5)))
    );
}

#[test]
fn test_navigation_rejects_unknown_day() {
    let result = apply(
        &CourseState::new(),
        Command::SetCurrentView {
            week: WeekId::new(1),
            day: DayId::new(12),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DayNotFound {
            week: WeekId::new(1),
            day: DayId::new(12),
        })
    );
}

#[test]
fn test_failed_navigation_leaves_cursor_in_place() {
    let state: CourseState = CourseState::new();
    let result = apply(
        &state,
        Command::SetCurrentView {
            week: WeekId::new(2),
            day: DayId::new(3),
        },
        create_test_actor(),
        create_test_cause(),
    );

    assert!(result.is_err());
    assert_eq!(state.cursor.week, WeekId::new(1));
    assert_eq!(state.cursor.day, DayId::OVERVIEW);
}

#[test]
fn test_week_two_lessons_reachable_after_unlock() {
    let state: CourseState = complete_week_one(&CourseState::new());
    let state: CourseState = apply_ok(&state, Command::UnlockNextWeek);
    let state: CourseState = apply_ok(
        &state,
        Command::SetCurrentView {
            week: WeekId::new(2),
            day: DayId::new(1),
        },
    );

    assert_eq!(state.cursor.week, WeekId::new(2));
    assert_eq!(state.cursor.day, DayId::new(1));
}

// ============================================================================
// Read-only validators
// ============================================================================

#[test]
fn test_validate_week_exists() {
    let state: CourseState = CourseState::new();

    assert!(validate_week_exists(&state, WeekId::new(1)).is_ok());
    assert!(validate_week_exists(&state, WeekId::new(2)).is_ok());
    assert_eq!(
        validate_week_exists(&state, WeekId::new(3)),
        Err(DomainError::WeekNotFound(WeekId::new(3)))
    );
}

#[test]
fn test_validate_day_exists_accepts_overview_sentinel() {
    let state: CourseState = CourseState::new();

    assert!(validate_day_exists(&state, WeekId::new(2), DayId::OVERVIEW).is_ok());
}

#[test]
fn test_validate_day_exists_rejects_out_of_range() {
    let state: CourseState = CourseState::new();

    assert_eq!(
        validate_day_exists(&state, WeekId::new(1), DayId::new(8)),
        Err(DomainError::DayNotFound {
            week: WeekId::new(1),
            day: DayId::new(8),
        })
    );
    assert_eq!(
        validate_day_exists(&state, WeekId::new(7), DayId::new(1)),
        Err(DomainError::WeekNotFound(WeekId::new(7)))
    );
}
