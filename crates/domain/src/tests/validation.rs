// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AttentionLogEntry, DistractionCategory, DistractionItem, DomainError, EntryId, RitualStep,
    Severity, validate_distraction, validate_log_entry, validate_ritual_step,
};

fn valid_entry() -> AttentionLogEntry {
    AttentionLogEntry {
        id: EntryId::new("1"),
        time: "09:05".parse().unwrap(),
        activity: String::from("Writing"),
        interruption: String::from("Slack"),
        trigger: String::from("Notification"),
        duration_minutes: 3,
        notes: None,
    }
}

#[test]
fn test_valid_log_entry_passes() {
    assert_eq!(validate_log_entry(&valid_entry()), Ok(()));
}

#[test]
fn test_log_entry_requires_activity() {
    let mut entry: AttentionLogEntry = valid_entry();
    entry.activity = String::new();

    assert_eq!(
        validate_log_entry(&entry),
        Err(DomainError::EmptyField("activity"))
    );
}

#[test]
fn test_log_entry_whitespace_counts_as_empty() {
    let mut entry: AttentionLogEntry = valid_entry();
    entry.trigger = String::from("   ");

    assert_eq!(
        validate_log_entry(&entry),
        Err(DomainError::EmptyField("trigger"))
    );
}

#[test]
fn test_log_entry_requires_interruption() {
    let mut entry: AttentionLogEntry = valid_entry();
    entry.interruption = String::new();

    assert_eq!(
        validate_log_entry(&entry),
        Err(DomainError::EmptyField("interruption"))
    );
}

#[test]
fn test_log_entry_rejects_zero_duration() {
    let mut entry: AttentionLogEntry = valid_entry();
    entry.duration_minutes = 0;

    assert_eq!(
        validate_log_entry(&entry),
        Err(DomainError::InvalidDuration(0))
    );
}

#[test]
fn test_distraction_requires_name() {
    let item: DistractionItem = DistractionItem {
        id: EntryId::new("1"),
        name: String::new(),
        category: DistractionCategory::Digital,
        frequency: Severity::Medium,
        damage: Severity::Medium,
        quadrant: None,
    };

    assert_eq!(
        validate_distraction(&item),
        Err(DomainError::EmptyField("name"))
    );
}

#[test]
fn test_valid_distraction_passes() {
    let item: DistractionItem = DistractionItem {
        id: EntryId::new("1"),
        name: String::from("Phone notifications"),
        category: DistractionCategory::Digital,
        frequency: Severity::High,
        damage: Severity::High,
        quadrant: None,
    };

    assert_eq!(validate_distraction(&item), Ok(()));
}

#[test]
fn test_ritual_step_requires_name() {
    let step: RitualStep = RitualStep {
        id: EntryId::new("1"),
        name: String::from("  "),
        duration: None,
        icon: None,
    };

    assert_eq!(
        validate_ritual_step(&step),
        Err(DomainError::EmptyField("name"))
    );
}
