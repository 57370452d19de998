//! Shift Model

use chrono::{DateTime, FixedOffset, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::employee::EmployeeId;

/// One worked shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Whether the shift participates in the tip pool
    pub tipped: bool,
}

impl Shift {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>, tipped: bool) -> Self {
        Self { start, end, tipped }
    }

    /// Elapsed time between clock-in and clock-out
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Shifts worked on one weekday, per employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub shifts: BTreeMap<EmployeeId, Vec<Shift>>,
}

impl Schedule {
    pub fn add(&mut self, employee_id: EmployeeId, shift: Shift) {
        self.shifts.entry(employee_id).or_default().push(shift);
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// Weekday -> schedule for the reporting week. Append-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timesheet {
    days: HashMap<Weekday, Schedule>,
}

impl Timesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shift under `weekday`
    pub fn add(&mut self, weekday: Weekday, employee_id: EmployeeId, shift: Shift) {
        self.days.entry(weekday).or_default().add(employee_id, shift);
    }

    pub fn schedule(&self, weekday: Weekday) -> Option<&Schedule> {
        self.days.get(&weekday)
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Schedule::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_shift_duration() {
        let shift = Shift::new(ts("2024-06-12T10:00:00-04:00"), ts("2024-06-12T15:30:00-04:00"), true);
        assert_eq!(shift.duration(), TimeDelta::minutes(330));
    }

    #[test]
    fn test_timesheet_add_appends() {
        let mut timesheet = Timesheet::new();
        assert!(timesheet.is_empty());

        let morning = Shift::new(ts("2024-06-12T08:00:00Z"), ts("2024-06-12T11:00:00Z"), true);
        let evening = Shift::new(ts("2024-06-12T17:00:00Z"), ts("2024-06-12T21:00:00Z"), false);
        timesheet.add(Weekday::Wed, EmployeeId(1), morning.clone());
        timesheet.add(Weekday::Wed, EmployeeId(1), evening.clone());
        timesheet.add(Weekday::Wed, EmployeeId(2), morning.clone());

        let wednesday = timesheet.schedule(Weekday::Wed).unwrap();
        assert_eq!(wednesday.shifts[&EmployeeId(1)], vec![morning, evening]);
        assert_eq!(wednesday.shifts[&EmployeeId(2)].len(), 1);
        assert!(timesheet.schedule(Weekday::Thu).is_none());
        assert!(!timesheet.is_empty());
    }
}
