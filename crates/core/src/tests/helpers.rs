// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CourseState, apply};
use focus_course_audit::{Actor, Cause};
use focus_course_domain::{
    AttentionLogEntry, DayId, DistractionCategory, DistractionItem, EntryId, FocusScorecard,
    Rating, ReflectionEntry, Severity, WeekId,
};

pub fn create_test_actor() -> Actor {
    Actor::participant("session-1")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("op-1"), String::from("Test interaction"))
}

pub fn create_test_log_entry(id: &str) -> AttentionLogEntry {
    AttentionLogEntry {
        id: EntryId::new(id),
        time: "09:05".parse().unwrap(),
        activity: String::from("Writing"),
        interruption: String::from("Slack"),
        trigger: String::from("Notification"),
        duration_minutes: 3,
        notes: None,
    }
}

pub fn create_test_distraction(id: &str) -> DistractionItem {
    DistractionItem {
        id: EntryId::new(id),
        name: String::from("Phone notifications"),
        category: DistractionCategory::Digital,
        frequency: Severity::Medium,
        damage: Severity::Medium,
        quadrant: None,
    }
}

pub fn create_test_scorecard(value: u8) -> FocusScorecard {
    let rating: Rating = Rating::new(value).unwrap();
    FocusScorecard {
        start_resistance: rating,
        mind_wandering: rating,
        urge_to_switch: rating,
        mental_fatigue: rating,
        completion: rating,
    }
}

pub fn create_test_reflection() -> ReflectionEntry {
    ReflectionEntry {
        attention_thief: String::from("Notifications"),
        easiest_focus: String::from("Early mornings"),
        system_change: String::from("Phone in another room"),
    }
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &CourseState, command: Command) -> CourseState {
    apply(state, command, create_test_actor(), create_test_cause())
        .expect("command should succeed")
        .new_state
}

/// Records the payloads required by week 1's gated lessons, then marks
/// all seven days of week 1 complete.
pub fn complete_week_one(state: &CourseState) -> CourseState {
    let mut current: CourseState = apply_ok(
        state,
        Command::AddAttentionLogEntry {
            entry: create_test_log_entry("log-1"),
        },
    );
    current = apply_ok(
        &current,
        Command::AddDistraction {
            item: create_test_distraction("d-1"),
        },
    );
    current = apply_ok(
        &current,
        Command::SaveBaselineScorecard {
            scorecard: create_test_scorecard(3),
        },
    );
    current = apply_ok(
        &current,
        Command::SaveReflections {
            entry: create_test_reflection(),
        },
    );

    for day_number in 1..=7u8 {
        current = apply_ok(
            &current,
            Command::MarkDayComplete {
                week: WeekId::new(1),
                day: DayId::new(day_number),
            },
        );
    }
    current
}
