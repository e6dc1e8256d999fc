//! Selectable time slots within the bookable part of a day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};

pub const DEFAULT_START_HOUR: u32 = 8;
pub const DEFAULT_END_HOUR: u32 = 20;
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// A clock time offered as a start or end choice. Displays as `H:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeSlot)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = DaybookError;

    /// Accepts `H:MM` and `HH:MM`.
    fn from_str(s: &str) -> DaybookResult<Self> {
        let invalid = || DaybookError::InvalidTimeSlot(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        TimeSlot::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DaybookError;

    fn try_from(s: String) -> DaybookResult<Self> {
        s.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Generate the slot labels for a day.
///
/// For every hour in `start_hour..=end_hour` this emits `hour:00` and then each
/// further `step_minutes` increment below the next hour, so the defaults give
/// `8:00, 8:30, ..., 20:00, 20:30`. A zero step yields no slots and hours past
/// 23 are skipped.
pub fn generate_time_slots(start_hour: u32, end_hour: u32, step_minutes: u32) -> Vec<TimeSlot> {
    if step_minutes == 0 {
        return Vec::new();
    }

    (start_hour..=end_hour.min(23))
        .flat_map(|hour| {
            (0..60)
                .step_by(step_minutes as usize)
                .filter_map(move |minute| TimeSlot::new(hour, minute))
        })
        .collect()
}

/// The configured daily window that slots are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub step_minutes: u32,
}

impl Default for SlotWindow {
    fn default() -> Self {
        SlotWindow {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }
}

impl SlotWindow {
    pub fn new(start_hour: u32, end_hour: u32, step_minutes: u32) -> DaybookResult<Self> {
        let window = SlotWindow {
            start_hour,
            end_hour,
            step_minutes,
        };
        window.check()?;
        Ok(window)
    }

    /// Reject windows that would produce a ragged or empty slot list.
    pub fn check(&self) -> DaybookResult<()> {
        if self.end_hour > 23 {
            return Err(DaybookError::Config(format!(
                "end_hour must be at most 23, got {}",
                self.end_hour
            )));
        }
        if self.start_hour > self.end_hour {
            return Err(DaybookError::Config(format!(
                "start_hour ({}) must not be after end_hour ({})",
                self.start_hour, self.end_hour
            )));
        }
        if self.step_minutes == 0 || 60 % self.step_minutes != 0 {
            return Err(DaybookError::Config(format!(
                "step_minutes must divide an hour evenly, got {}",
                self.step_minutes
            )));
        }
        Ok(())
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        generate_time_slots(self.start_hour, self.end_hour, self.step_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots_cover_eight_to_half_past_eight_pm() {
        let slots = SlotWindow::default().slots();
        assert_eq!(slots.len(), 26);
        assert_eq!(slots.first().unwrap().to_string(), "8:00");
        assert_eq!(slots[1].to_string(), "8:30");
        assert_eq!(slots.last().unwrap().to_string(), "20:30");
    }

    #[test]
    fn test_generate_is_idempotent() {
        assert_eq!(generate_time_slots(8, 20, 30), generate_time_slots(8, 20, 30));
    }

    #[test]
    fn test_quarter_hour_step() {
        let labels: Vec<String> = generate_time_slots(9, 9, 15)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(labels, vec!["9:00", "9:15", "9:30", "9:45"]);
    }

    #[test]
    fn test_zero_step_yields_nothing() {
        assert!(generate_time_slots(8, 20, 0).is_empty());
    }

    #[test]
    fn test_hours_past_midnight_are_skipped() {
        let slots = generate_time_slots(23, 25, 30);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_huge_end_hour_is_clamped_to_the_day() {
        let slots = generate_time_slots(0, u32::MAX, 30);
        assert_eq!(slots.len(), 48);
        assert_eq!(slots.last().unwrap().to_string(), "23:30");
        assert!(generate_time_slots(24, u32::MAX, 30).is_empty());
    }

    #[test]
    fn test_parse_accepts_both_hour_widths() {
        assert_eq!("8:00".parse::<TimeSlot>().unwrap(), TimeSlot::new(8, 0).unwrap());
        assert_eq!("08:00".parse::<TimeSlot>().unwrap(), TimeSlot::new(8, 0).unwrap());
        assert_eq!("20:30".parse::<TimeSlot>().unwrap().to_string(), "20:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<TimeSlot>().is_err());
        assert!("8".parse::<TimeSlot>().is_err());
        assert!("8:0".parse::<TimeSlot>().is_err());
        assert!("24:00".parse::<TimeSlot>().is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_slots_are_ordered() {
        let slots = SlotWindow::default().slots();
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_serde_uses_label() {
        let slot = TimeSlot::new(9, 30).unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), r#""9:30""#);
        let back: TimeSlot = serde_json::from_str(r#""9:30""#).unwrap();
        assert_eq!(back, slot);
        assert!(serde_json::from_str::<TimeSlot>(r#""9:3x""#).is_err());
    }

    #[test]
    fn test_window_check() {
        assert!(SlotWindow::new(8, 20, 30).is_ok());
        assert!(SlotWindow::new(8, 24, 30).is_err());
        assert!(SlotWindow::new(12, 8, 30).is_err());
        assert!(SlotWindow::new(8, 20, 0).is_err());
        assert!(SlotWindow::new(8, 20, 25).is_err());
    }
}
