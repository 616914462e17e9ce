//! Generation-counted debounce.
//!
//! The caller owns the clock: it stages a value, arms a timer with the
//! returned ticket and hands the ticket back when the timer fires. Only the
//! ticket of the latest generation yields the value, so any number of edits
//! inside the quiet period collapse into one update.

use super::constants::{SALARY_MAX, SALARY_MIN};
use super::filter::{FilterModel, FilterPatch, FilterState};

/// Handle for one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending value and invalidates earlier tickets
    pub fn stage(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket {
            generation: self.generation,
        }
    }

    /// Called on timer expiry. Stale or cancelled tickets yield nothing.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; outstanding timers become no-ops
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Local staging of the salary sliders in front of the filter model
#[derive(Debug, Clone)]
pub struct SalaryStage {
    min: i64,
    max: i64,
    debouncer: Debouncer<(i64, i64)>,
}

impl SalaryStage {
    pub fn new(state: &FilterState) -> Self {
        Self {
            min: state.salary_min,
            max: state.salary_max,
            debouncer: Debouncer::new(),
        }
    }

    /// Values currently shown on the sliders
    pub fn staged(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn set_min(&mut self, value: i64) -> DebounceTicket {
        self.min = value;
        self.debouncer.stage((self.min, self.max))
    }

    pub fn set_max(&mut self, value: i64) -> DebounceTicket {
        self.max = value;
        self.debouncer.stage((self.min, self.max))
    }

    /// Applies the staged pair if `ticket` is still current.
    ///
    /// Bounds are clamped into the slider range and swapped when inverted,
    /// and both reach the model through a single `update_filters` call.
    /// Returns whether the model changed.
    pub fn commit(&mut self, ticket: DebounceTicket, model: &mut FilterModel) -> bool {
        let Some((min, max)) = self.debouncer.fire(ticket) else {
            return false;
        };
        let (min, max) = normalize_salary(min, max);
        self.min = min;
        self.max = max;

        let current = model.state();
        if current.salary_min == min && current.salary_max == max {
            return false;
        }
        model.update_filters(FilterPatch::default().with_salary(min, max))
    }

    /// Re-seeds the sliders from the model (after a reset) and drops pending edits
    pub fn sync_from(&mut self, state: &FilterState) {
        self.debouncer.cancel();
        self.min = state.salary_min;
        self.max = state.salary_max;
    }

    /// Teardown: a pending edit is discarded, never applied
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

/// Clamps both bounds into `[SALARY_MIN, SALARY_MAX]` and orders them
pub fn normalize_salary(min: i64, max: i64) -> (i64, i64) {
    let min = min.clamp(SALARY_MIN, SALARY_MAX);
    let max = max.clamp(SALARY_MIN, SALARY_MAX);
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut d = Debouncer::new();
        let first = d.stage(1);
        let second = d.stage(2);
        assert_eq!(d.fire(first), None);
        assert_eq!(d.fire(second), Some(2));
        assert_eq!(d.fire(second), None);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut d = Debouncer::new();
        let ticket = d.stage("x");
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.fire(ticket), None);
    }

    #[test]
    fn test_normalize_salary() {
        assert_eq!(normalize_salary(40, 10), (10, 40));
        assert_eq!(normalize_salary(-5, 80), (0, 50));
        assert_eq!(normalize_salary(7, 7), (7, 7));
    }

    #[test]
    fn test_commit_skips_unchanged_pair() {
        let mut model = FilterModel::new();
        let mut stage = SalaryStage::new(model.state());
        stage.set_min(10);
        let ticket = stage.set_min(0);
        assert!(!stage.commit(ticket, &mut model));
        assert_eq!(model.revision(), 0);
    }

    #[test]
    fn test_commit_swaps_inverted_bounds() {
        let mut model = FilterModel::new();
        let mut stage = SalaryStage::new(model.state());
        stage.set_max(10);
        let ticket = stage.set_min(40);
        assert!(stage.commit(ticket, &mut model));
        assert_eq!((model.state().salary_min, model.state().salary_max), (10, 40));
        assert_eq!(stage.staged(), (10, 40));
    }

    #[test]
    fn test_sync_from_drops_pending_edit() {
        let mut model = FilterModel::new();
        let mut stage = SalaryStage::new(model.state());
        let ticket = stage.set_min(25);
        model.reset_filters();
        stage.sync_from(model.state());
        assert!(!stage.commit(ticket, &mut model));
        assert_eq!(stage.staged(), (0, 50));
    }
}
