// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress percentage derivation.
//!
//! Progress is **computed**, not stored. Both functions are pure
//! derivations over the current weeks; they must give the right answer
//! after every ledger mutation, and since no un-complete operation
//! exists, both are monotonically non-decreasing over a session.

use crate::types::{Week, WeekId};

/// Integer percentage with round-half-up semantics, matching the
/// original's `Math.round`.
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded: usize = (completed * 100 + total / 2) / total;
    u8::try_from(rounded).unwrap_or(100)
}

/// Derives the overall course completion percentage.
///
/// Counts every day across all weeks regardless of lock state.
///
/// # Arguments
///
/// * `weeks` - The full curriculum
/// * `completed_count` - The number of ledger entries (completed days)
///
/// # Returns
///
/// An integer percentage in `[0, 100]`; `0` for an empty curriculum.
#[must_use]
pub fn overall_progress(weeks: &[Week], completed_count: usize) -> u8 {
    let total_days: usize = weeks.iter().map(|w| w.days.len()).sum();
    percentage(completed_count, total_days)
}

/// Derives the completion percentage for a single week.
///
/// # Arguments
///
/// * `weeks` - The full curriculum
/// * `week_id` - The week to measure
///
/// # Returns
///
/// An integer percentage in `[0, 100]`; `0` if the week id is unknown.
#[must_use]
pub fn week_progress(weeks: &[Week], week_id: WeekId) -> u8 {
    let Some(week) = weeks.iter().find(|w| w.id == week_id) else {
        return 0;
    };
    percentage(week.completed_day_count(), week.days.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::initial_weeks;
    use crate::types::DayId;

    fn complete_days(weeks: &mut [Week], week_index: usize, count: usize) {
        for day in weeks[week_index].days.iter_mut().take(count) {
            day.is_complete = true;
        }
    }

    #[test]
    fn test_overall_progress_empty_curriculum() {
        assert_eq!(overall_progress(&[], 0), 0);
    }

    #[test]
    fn test_overall_progress_nothing_complete() {
        let weeks: Vec<Week> = initial_weeks();
        assert_eq!(overall_progress(&weeks, 0), 0);
    }

    #[test]
    fn test_overall_progress_rounds_like_the_original() {
        let weeks: Vec<Week> = initial_weeks();
        // 1 of 14 days: round(7.14) = 7
        assert_eq!(overall_progress(&weeks, 1), 7);
        // 7 of 14 days
        assert_eq!(overall_progress(&weeks, 7), 50);
        // 14 of 14 days
        assert_eq!(overall_progress(&weeks, 14), 100);
    }

    #[test]
    fn test_week_progress_single_day() {
        let mut weeks: Vec<Week> = initial_weeks();
        complete_days(&mut weeks, 0, 1);

        // round(100 / 7) = 14
        assert_eq!(week_progress(&weeks, WeekId::new(1)), 14);
    }

    #[test]
    fn test_week_progress_full_week() {
        let mut weeks: Vec<Week> = initial_weeks();
        complete_days(&mut weeks, 0, 7);

        assert_eq!(week_progress(&weeks, WeekId::new(1)), 100);
        assert_eq!(week_progress(&weeks, WeekId::new(2)), 0);
    }

    #[test]
    fn test_week_progress_unknown_week_is_zero() {
        let weeks: Vec<Week> = initial_weeks();
        assert_eq!(week_progress(&weeks, WeekId::new(9)), 0);
    }

    #[test]
    fn test_week_progress_is_monotonic_as_days_complete() {
        let mut weeks: Vec<Week> = initial_weeks();
        let mut last: u8 = 0;

        for day_number in 1..=7u8 {
            let id: DayId = DayId::new(day_number);
            for day in &mut weeks[0].days {
                if day.id == id {
                    day.is_complete = true;
                }
            }
            let current: u8 = week_progress(&weeks, WeekId::new(1));
            assert!(current >= last);
            last = current;
        }
        assert_eq!(last, 100);
    }
}
