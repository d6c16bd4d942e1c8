// src/slot.rs
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One bookable time window on a given day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    /// Same calendar date as `start`, never earlier.
    pub end: NaiveDateTime,
    /// 0 means fully booked.
    pub remaining_capacity: u32,
}

impl Slot {
    pub fn on(date: NaiveDate, start: NaiveTime, end: NaiveTime, remaining_capacity: u32) -> Self {
        Self {
            start: date.and_time(start),
            end: date.and_time(end),
            remaining_capacity,
        }
    }

    pub fn is_available(&self) -> bool {
        self.remaining_capacity > 0
    }
}
