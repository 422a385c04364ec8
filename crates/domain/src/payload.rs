// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;

/// Identifies an entry within a payload collection.
///
/// The original client generated these from millisecond timestamps; any
/// unique string is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Creates a new `EntryId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 24-hour clock time attached to an attention-log entry.
///
/// Parses `"H:MM"` or `"HH:MM"` and rejects out-of-range components, the
/// same rule the original enforced with a regular expression at the form
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogTime(Time);

impl LogTime {
    /// Creates a `LogTime` from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the components are out of
    /// range for a 24-hour clock.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|_| DomainError::InvalidTime(format!("{hour}:{minute:02}")))
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.0.hour()
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.0.minute()
    }
}

impl FromStr for LogTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTime(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if hour_part.is_empty() || hour_part.len() > 2 || minute_part.len() != 2 {
            return Err(invalid());
        }

        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl std::fmt::Display for LogTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for LogTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One attention-leak observation recorded during the attention audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionLogEntry {
    /// The entry identifier.
    pub id: EntryId,
    /// When the interruption happened.
    pub time: LogTime,
    /// What the participant was working on.
    pub activity: String,
    /// What interrupted them.
    pub interruption: String,
    /// What triggered the interruption.
    pub trigger: String,
    /// How long the interruption lasted, in minutes.
    pub duration_minutes: u16,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A partial update merged over an existing attention-log entry.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionLogPatch {
    /// Replacement time.
    pub time: Option<LogTime>,
    /// Replacement activity.
    pub activity: Option<String>,
    /// Replacement interruption.
    pub interruption: Option<String>,
    /// Replacement trigger.
    pub trigger: Option<String>,
    /// Replacement duration in minutes.
    pub duration_minutes: Option<u16>,
    /// Replacement notes.
    pub notes: Option<String>,
}

impl AttentionLogPatch {
    /// Merges this patch into an entry. `None` fields leave the entry's
    /// values in place.
    pub fn merge_into(self, entry: &mut AttentionLogEntry) {
        if let Some(time) = self.time {
            entry.time = time;
        }
        if let Some(activity) = self.activity {
            entry.activity = activity;
        }
        if let Some(interruption) = self.interruption {
            entry.interruption = interruption;
        }
        if let Some(trigger) = self.trigger {
            entry.trigger = trigger;
        }
        if let Some(duration_minutes) = self.duration_minutes {
            entry.duration_minutes = duration_minutes;
        }
        if let Some(notes) = self.notes {
            entry.notes = Some(notes);
        }
    }
}

/// The kind of distraction cataloged on the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistractionCategory {
    /// Apps, sites, notifications.
    Digital,
    /// Environment, objects, people walking by.
    Physical,
    /// Internal thoughts, worries, daydreams.
    Mental,
    /// Conversations, messages, meetings.
    Social,
}

impl DistractionCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Social => "social",
        }
    }
}

impl FromStr for DistractionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digital" => Ok(Self::Digital),
            "physical" => Ok(Self::Physical),
            "mental" => Ok(Self::Mental),
            "social" => Ok(Self::Social),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for DistractionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A low/medium/high grading used for distraction frequency and damage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Severity {
    /// Rarely occurs, or barely hurts.
    Low,
    /// The middle grade.
    Medium,
    /// Constant, or badly damaging.
    High,
}

impl Severity {
    /// Converts this severity to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidSeverity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The frequency/damage quadrant a distraction is dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// High frequency, high damage.
    Eliminate,
    /// High frequency, low damage.
    Reduce,
    /// Low frequency, high damage.
    Contain,
    /// Low frequency, low damage.
    Ignore,
}

impl Quadrant {
    /// Converts this quadrant to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eliminate => "eliminate",
            Self::Reduce => "reduce",
            Self::Contain => "contain",
            Self::Ignore => "ignore",
        }
    }
}

impl FromStr for Quadrant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eliminate" => Ok(Self::Eliminate),
            "reduce" => Ok(Self::Reduce),
            "contain" => Ok(Self::Contain),
            "ignore" => Ok(Self::Ignore),
            _ => Err(DomainError::InvalidQuadrant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cataloged distraction, optionally placed on the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistractionItem {
    /// The item identifier.
    pub id: EntryId,
    /// What the distraction is.
    pub name: String,
    /// The kind of distraction.
    pub category: DistractionCategory,
    /// How often it occurs.
    pub frequency: Severity,
    /// How much it hurts focus.
    pub damage: Severity,
    /// The heatmap quadrant, once assigned by drag-and-drop.
    /// `None` means still unassigned.
    pub quadrant: Option<Quadrant>,
}

/// A partial update merged over an existing distraction item.
///
/// `None` fields are left unchanged. Quadrant assignment (the drag-drop
/// target) and field edits both travel through this patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistractionPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement category.
    pub category: Option<DistractionCategory>,
    /// Replacement frequency.
    pub frequency: Option<Severity>,
    /// Replacement damage.
    pub damage: Option<Severity>,
    /// Quadrant to assign.
    pub quadrant: Option<Quadrant>,
}

impl DistractionPatch {
    /// Merges this patch into an item. `None` fields leave the item's
    /// values in place; a quadrant in the patch assigns the item to it.
    pub fn merge_into(self, item: &mut DistractionItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(frequency) = self.frequency {
            item.frequency = frequency;
        }
        if let Some(damage) = self.damage {
            item.damage = damage;
        }
        if let Some(quadrant) = self.quadrant {
            item.quadrant = Some(quadrant);
        }
    }
}

/// A single 1-5 self-report rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    /// Creates a new `Rating`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if the value is outside 1-5.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if matches!(value, 1..=5) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    /// Returns the rating value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five-dimension focus self-report.
///
/// At most one "current" and one "baseline" scorecard exist at a time;
/// saving overwrites with no history retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusScorecard {
    /// Resistance felt when initiating the session. Lower is better.
    pub start_resistance: Rating,
    /// How often the mind drifted. Lower is better.
    pub mind_wandering: Rating,
    /// The urge to switch tasks. Lower is better.
    pub urge_to_switch: Rating,
    /// Mental fatigue at the end. Lower is better.
    pub mental_fatigue: Rating,
    /// How much of the planned work got done. Higher is better.
    pub completion: Rating,
}

/// The free-text pattern-review reflection. Overwrite semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionEntry {
    /// The single biggest attention thief identified this week.
    pub attention_thief: String,
    /// When focus came easiest.
    pub easiest_focus: String,
    /// The one system change to try next.
    pub system_change: String,
}

/// One step of a focus ritual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualStep {
    /// The step identifier.
    pub id: EntryId,
    /// What to do.
    pub name: String,
    /// Rough duration label (e.g., "30s", "1min").
    pub duration: Option<String>,
    /// Display icon.
    pub icon: Option<String>,
}

/// Which of the three ritual sequences a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RitualPhase {
    /// Performed before a focus session.
    Start,
    /// Performed to recover mid-session.
    Sustain,
    /// Performed to close a session.
    Stop,
}

impl RitualPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Sustain => "sustain",
            Self::Stop => "stop",
        }
    }
}

impl FromStr for RitualPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "sustain" => Ok(Self::Sustain),
            "stop" => Ok(Self::Stop),
            _ => Err(DomainError::InvalidRitualPhase(s.to_string())),
        }
    }
}

impl std::fmt::Display for RitualPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The participant's three ordered ritual sequences. User-extensible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ritual {
    /// Steps performed before a session.
    pub start: Vec<RitualStep>,
    /// Steps performed to sustain focus mid-session.
    pub sustain: Vec<RitualStep>,
    /// Steps performed to close a session.
    pub stop: Vec<RitualStep>,
}

impl Ritual {
    /// Returns the steps for the given phase.
    #[must_use]
    pub fn phase(&self, phase: RitualPhase) -> &[RitualStep] {
        match phase {
            RitualPhase::Start => &self.start,
            RitualPhase::Sustain => &self.sustain,
            RitualPhase::Stop => &self.stop,
        }
    }

    /// Returns true if no phase has any steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.sustain.is_empty() && self.stop.is_empty()
    }
}

/// The fixed key set of the distraction-removal checklist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ChecklistKey {
    /// All non-essential notifications disabled.
    Notifications,
    /// Phone out of the room.
    Phone,
    /// Browser tabs reduced.
    Tabs,
    /// Visual clutter removed.
    Clutter,
    /// Focus-time boundary communicated to others.
    Boundary,
}

impl ChecklistKey {
    /// All checklist keys, in display order.
    pub const ALL: [Self; 5] = [
        Self::Notifications,
        Self::Phone,
        Self::Tabs,
        Self::Clutter,
        Self::Boundary,
    ];

    /// Converts this key to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::Phone => "phone",
            Self::Tabs => "tabs",
            Self::Clutter => "clutter",
            Self::Boundary => "boundary",
        }
    }
}

impl FromStr for ChecklistKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notifications" => Ok(Self::Notifications),
            "phone" => Ok(Self::Phone),
            "tabs" => Ok(Self::Tabs),
            "clutter" => Ok(Self::Clutter),
            "boundary" => Ok(Self::Boundary),
            _ => Err(DomainError::InvalidChecklistKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for ChecklistKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
