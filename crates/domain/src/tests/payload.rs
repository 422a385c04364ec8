// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ChecklistKey, DistractionCategory, DomainError, EntryId, LogTime, Quadrant, Rating, Ritual,
    RitualPhase, RitualStep, Severity,
};

#[test]
fn test_log_time_parses_padded_and_unpadded_hours() {
    let padded: LogTime = "09:05".parse().unwrap();
    let unpadded: LogTime = "9:05".parse().unwrap();

    assert_eq!(padded, unpadded);
    assert_eq!(padded.hour(), 9);
    assert_eq!(padded.minute(), 5);
    assert_eq!(format!("{padded}"), "09:05");
}

#[test]
fn test_log_time_rejects_out_of_range_components() {
    assert!("24:00".parse::<LogTime>().is_err());
    assert!("12:60".parse::<LogTime>().is_err());
    assert!("99:99".parse::<LogTime>().is_err());
}

#[test]
fn test_log_time_rejects_malformed_strings() {
    assert!("".parse::<LogTime>().is_err());
    assert!("0905".parse::<LogTime>().is_err());
    assert!("9:5".parse::<LogTime>().is_err());
    assert!("009:05".parse::<LogTime>().is_err());
    assert!("nine:05".parse::<LogTime>().is_err());
}

#[test]
fn test_log_time_serde_round_trip() {
    let time: LogTime = "23:59".parse().unwrap();
    let json: String = serde_json::to_string(&time).unwrap();
    assert_eq!(json, "\"23:59\"");

    let back: LogTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, time);
}

#[test]
fn test_rating_bounds() {
    assert!(Rating::new(0).is_err());
    assert!(Rating::new(6).is_err());
    assert_eq!(Rating::new(1).unwrap().value(), 1);
    assert_eq!(Rating::new(5).unwrap().value(), 5);

    let err: DomainError = Rating::new(7).unwrap_err();
    assert_eq!(format!("{err}"), "Invalid rating: 7. Must be between 1 and 5");
}

#[test]
fn test_category_string_round_trip() {
    for category in [
        DistractionCategory::Digital,
        DistractionCategory::Physical,
        DistractionCategory::Mental,
        DistractionCategory::Social,
    ] {
        let parsed: DistractionCategory = category.as_str().parse().unwrap();
        assert_eq!(parsed, category);
    }
    assert!("spiritual".parse::<DistractionCategory>().is_err());
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
}

#[test]
fn test_quadrant_parsing_matches_heatmap_ids() {
    assert_eq!("eliminate".parse::<Quadrant>().unwrap(), Quadrant::Eliminate);
    assert_eq!("reduce".parse::<Quadrant>().unwrap(), Quadrant::Reduce);
    assert_eq!("contain".parse::<Quadrant>().unwrap(), Quadrant::Contain);
    assert_eq!("ignore".parse::<Quadrant>().unwrap(), Quadrant::Ignore);
    assert!("defer".parse::<Quadrant>().is_err());
}

#[test]
fn test_checklist_key_covers_fixed_set() {
    assert_eq!(ChecklistKey::ALL.len(), 5);
    for key in ChecklistKey::ALL {
        let parsed: ChecklistKey = key.as_str().parse().unwrap();
        assert_eq!(parsed, key);
    }
    assert!("coffee".parse::<ChecklistKey>().is_err());
}

#[test]
fn test_ritual_phase_access() {
    let step = |name: &str| RitualStep {
        id: EntryId::new(name),
        name: name.to_string(),
        duration: Some(String::from("30s")),
        icon: None,
    };

    let ritual: Ritual = Ritual {
        start: vec![step("Clear desk"), step("Set intention")],
        sustain: vec![step("Deep breath")],
        stop: vec![],
    };

    assert_eq!(ritual.phase(RitualPhase::Start).len(), 2);
    assert_eq!(ritual.phase(RitualPhase::Sustain).len(), 1);
    assert!(ritual.phase(RitualPhase::Stop).is_empty());
    assert!(!ritual.is_empty());
    assert!(Ritual::default().is_empty());
}
