// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CourseState, TransitionResult, ViewCursor};
use focus_course_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use focus_course_domain::{
    CompletionRequirement, DayKey, DomainError, completion_requirement, lesson_for,
    validate_distraction, validate_log_entry, validate_ritual_step,
};

fn transition(
    old_state: &CourseState,
    new_state: CourseState,
    actor: Actor,
    cause: Cause,
    name: &'static str,
    details: Option<String>,
    scope: Option<DayKey>,
) -> TransitionResult {
    let before: StateSnapshot = old_state.to_snapshot();
    let after: StateSnapshot = new_state.to_snapshot();
    let action: Action = Action::new(String::from(name), details);
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after, scope);

    TransitionResult {
        new_state,
        audit_event,
    }
}

/// Checks a lesson's completion requirement against the recorded payloads.
fn requirement_met(state: &CourseState, requirement: CompletionRequirement) -> bool {
    match requirement {
        CompletionRequirement::None => true,
        CompletionRequirement::AttentionLogEntryRecorded => !state.attention_log.is_empty(),
        CompletionRequirement::DistractionCataloged => !state.distractions.is_empty(),
        CompletionRequirement::BaselineScorecardSaved => state.baseline_scorecard.is_some(),
        CompletionRequirement::ReflectionSaved => state.reflections.is_some(),
    }
}

/// Applies a command to the current state, producing a new state and
/// audit event.
///
/// The input state is never mutated: a successful transition returns a
/// fresh state, and a failed one leaves no side effects. Every success
/// produces exactly one audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command targets a week or day that does not exist
/// - The command violates a domain rule (invalid payload fields, unmet
///   completion requirement, completing an overview sentinel)
/// - Navigation targets a locked week
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &CourseState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::MarkDayComplete { week, day } => {
            let key: DayKey = DayKey::new(week, day);

            if day.is_overview() {
                return Err(CoreError::DomainViolation(
                    DomainError::OverviewNotCompletable(week),
                ));
            }

            let target = state
                .day(key)
                .ok_or_else(|| match state.week(week) {
                    Some(_) => CoreError::DomainViolation(DomainError::DayNotFound { week, day }),
                    None => CoreError::DomainViolation(DomainError::WeekNotFound(week)),
                })?;

            // Locked -> Complete is not a legal phase transition.
            if target.is_locked && !target.is_complete {
                return Err(CoreError::LockedContent { week, day });
            }

            // Requirements gate the first completion only; re-completing
            // an already-complete day stays a no-op even if the gating
            // payload was deleted since.
            if !target.is_complete
                && let Some(lesson) = lesson_for(key)
            {
                let requirement: CompletionRequirement = completion_requirement(lesson);
                if !requirement_met(state, requirement) {
                    return Err(CoreError::DomainViolation(
                        DomainError::CompletionRequirementNotMet {
                            week,
                            day,
                            requirement: requirement.description(),
                        },
                    ));
                }
            }

            // Idempotent: completing twice yields an identical state.
            let mut new_state: CourseState = state.clone();
            new_state.completed_days.insert(key);
            for w in &mut new_state.weeks {
                if w.id == week {
                    for d in &mut w.days {
                        if d.id == day {
                            d.is_complete = true;
                        }
                    }
                    w.is_complete = w.all_days_complete();
                }
            }

            let details: String = format!("Completed day {day} of week {week}");
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "MarkDayComplete",
                Some(details),
                Some(key),
            ))
        }
        Command::SetCurrentView { week, day } => {
            let Some(target_week) = state.week(week) else {
                return Err(CoreError::DomainViolation(DomainError::WeekNotFound(week)));
            };

            // The overview sentinel is always addressable; lesson days in
            // a locked week are not.
            if !day.is_overview() {
                let Some(target_day) = target_week.day(day) else {
                    return Err(CoreError::DomainViolation(DomainError::DayNotFound {
                        week,
                        day,
                    }));
                };
                if target_week.is_locked || target_day.is_locked {
                    return Err(CoreError::LockedContent { week, day });
                }
            }

            let mut new_state: CourseState = state.clone();
            new_state.cursor = ViewCursor::new(week, day);

            let details: String = if day.is_overview() {
                format!("Viewing week {week} overview")
            } else {
                format!("Viewing day {day} of week {week}")
            };
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SetCurrentView",
                Some(details),
                Some(DayKey::new(week, day)),
            ))
        }
        Command::UnlockNextWeek => {
            let mut new_state: CourseState = state.clone();
            let mut unlocked: Vec<String> = Vec::new();

            // Predecessor adjacency over the whole curriculum: any locked
            // week whose previous week is complete becomes available.
            for index in 1..new_state.weeks.len() {
                if new_state.weeks[index].is_locked && new_state.weeks[index - 1].is_complete {
                    let w = &mut new_state.weeks[index];
                    w.is_locked = false;
                    for d in &mut w.days {
                        d.is_locked = false;
                    }
                    unlocked.push(w.id.to_string());
                }
            }

            // Precondition unmet is a no-op, never an error.
            let details: String = if unlocked.is_empty() {
                String::from("No week eligible for unlock")
            } else {
                format!("Unlocked week {}", unlocked.join(", "))
            };
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "UnlockNextWeek",
                Some(details),
                None,
            ))
        }
        Command::AddAttentionLogEntry { entry } => {
            validate_log_entry(&entry).map_err(CoreError::DomainViolation)?;

            let details: String = format!("Logged attention entry at {}", entry.time);
            let mut new_state: CourseState = state.clone();
            new_state.attention_log.push(entry);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "AddAttentionLogEntry",
                Some(details),
                None,
            ))
        }
        Command::UpdateAttentionLogEntry { id, patch } => {
            // Missing ids leave the collection unchanged, matching the
            // original's map semantics. The merged entry must still pass
            // the same validation as a fresh add.
            let mut new_state: CourseState = state.clone();
            if let Some(entry) = new_state.attention_log.iter_mut().find(|e| e.id == id) {
                patch.merge_into(entry);
                validate_log_entry(entry).map_err(CoreError::DomainViolation)?;
            }

            let details: String = format!("Updated attention entry {id}");
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "UpdateAttentionLogEntry",
                Some(details),
                None,
            ))
        }
        Command::DeleteAttentionLogEntry { id } => {
            // Deleting a missing id is a no-op, never an error.
            let mut new_state: CourseState = state.clone();
            new_state.attention_log.retain(|e| e.id != id);

            let details: String = format!("Deleted attention entry {id}");
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "DeleteAttentionLogEntry",
                Some(details),
                None,
            ))
        }
        Command::AddDistraction { item } => {
            validate_distraction(&item).map_err(CoreError::DomainViolation)?;

            let details: String = format!("Cataloged distraction '{}'", item.name);
            let mut new_state: CourseState = state.clone();
            new_state.distractions.push(item);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "AddDistraction",
                Some(details),
                None,
            ))
        }
        Command::UpdateDistraction { id, patch } => {
            let mut new_state: CourseState = state.clone();
            if let Some(item) = new_state.distractions.iter_mut().find(|i| i.id == id) {
                patch.merge_into(item);
                validate_distraction(item).map_err(CoreError::DomainViolation)?;
            }

            let details: String = format!("Updated distraction {id}");
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "UpdateDistraction",
                Some(details),
                None,
            ))
        }
        Command::SaveFocusScorecard { scorecard } => {
            let mut new_state: CourseState = state.clone();
            new_state.focus_scorecard = Some(scorecard);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SaveFocusScorecard",
                Some(String::from("Saved focus scorecard")),
                None,
            ))
        }
        Command::SaveBaselineScorecard { scorecard } => {
            let mut new_state: CourseState = state.clone();
            new_state.baseline_scorecard = Some(scorecard);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SaveBaselineScorecard",
                Some(String::from("Saved baseline scorecard")),
                None,
            ))
        }
        Command::SaveReflections { entry } => {
            let mut new_state: CourseState = state.clone();
            new_state.reflections = Some(entry);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SaveReflections",
                Some(String::from("Saved reflection")),
                None,
            ))
        }
        Command::SetChecklistItem { key, done } => {
            let mut new_state: CourseState = state.clone();
            new_state.distraction_checklist.insert(key, done);

            let details: String = format!("Checklist '{key}' set to {done}");
            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SetChecklistItem",
                Some(details),
                None,
            ))
        }
        Command::SaveRituals { ritual } => {
            for step in ritual
                .start
                .iter()
                .chain(ritual.sustain.iter())
                .chain(ritual.stop.iter())
            {
                validate_ritual_step(step).map_err(CoreError::DomainViolation)?;
            }

            let details: String = format!(
                "Saved rituals ({} start, {} sustain, {} stop)",
                ritual.start.len(),
                ritual.sustain.len(),
                ritual.stop.len()
            );
            let mut new_state: CourseState = state.clone();
            new_state.rituals = ritual;

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                "SaveRituals",
                Some(details),
                None,
            ))
        }
    }
}
