//! Admission rules for new events.
//!
//! Everything here is a pure function of its arguments: the current time is
//! passed in rather than read from a clock, and the store is only borrowed.

use chrono::{NaiveDateTime, NaiveTime};

use crate::event::{Event, EventRequest, Interval};

pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields and select a future date.";
pub const CONFLICT_MESSAGE: &str = "Event conflicts with an existing event.";
pub const INVALID_RANGE_MESSAGE: &str = "End time must be after start time.";

/// Outcome of checking a request against the current events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    /// Title blank, or date/start/end left unset.
    RejectedIncomplete,
    /// Starts on a day before today.
    RejectedPastDate,
    /// End slot is not after the start slot.
    RejectedInvalidRange,
    /// Overlaps this already stored event.
    RejectedConflict(Event),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// Text to show the user, `None` when accepted.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::RejectedIncomplete | ValidationResult::RejectedPastDate => {
                Some(INCOMPLETE_MESSAGE)
            }
            ValidationResult::RejectedInvalidRange => Some(INVALID_RANGE_MESSAGE),
            ValidationResult::RejectedConflict(_) => Some(CONFLICT_MESSAGE),
        }
    }
}

/// True if `instant` falls on a day before the day of `reference_now`.
///
/// Only the date matters: earlier today is not in the past.
pub fn is_past(instant: NaiveDateTime, reference_now: NaiveDateTime) -> bool {
    instant < reference_now.date().and_time(NaiveTime::MIN)
}

/// Half-open interval intersection. Back-to-back spans do not overlap.
pub fn overlaps(a: &impl Interval, b: &impl Interval) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// First event, in store order, that overlaps `candidate`.
pub fn find_conflict<'a, I>(candidate: &impl Interval, existing: I) -> Option<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    existing.into_iter().find(|event| overlaps(candidate, *event))
}

/// Decide whether `request` may be added alongside `existing`.
///
/// Checks run in a fixed order so the most basic problem is reported first:
/// incomplete, past date, inverted range, conflict.
///
/// `RejectedInvalidRange` extends the form's two messages (missing fields and
/// conflict) with a third, so an end slot at or before the start slot is
/// reported on its own instead of being checked for overlap.
pub fn validate<'a, I>(
    request: &EventRequest,
    existing: I,
    reference_now: NaiveDateTime,
) -> ValidationResult
where
    I: IntoIterator<Item = &'a Event>,
{
    let Some(draft) = request.to_draft() else {
        return ValidationResult::RejectedIncomplete;
    };

    if is_past(draft.start, reference_now) {
        return ValidationResult::RejectedPastDate;
    }

    if draft.start >= draft.end {
        return ValidationResult::RejectedInvalidRange;
    }

    match find_conflict(&draft, existing) {
        Some(conflict) => ValidationResult::RejectedConflict(conflict.clone()),
        None => ValidationResult::Accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, EventId};
    use crate::slot::TimeSlot;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn slot(label: &str) -> Option<TimeSlot> {
        Some(label.parse().unwrap())
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: EventId::new(id),
            title: id.to_string(),
            start,
            end,
        }
    }

    fn none() -> Vec<Event> {
        Vec::new()
    }

    fn now() -> NaiveDateTime {
        at(20, 13, 45)
    }

    // --- is_past ---

    #[test]
    fn earlier_days_are_past_at_any_time() {
        assert!(is_past(at(19, 0, 0), now()));
        assert!(is_past(at(19, 23, 59), now()));
        assert!(is_past(at(1, 12, 0), now()));
    }

    #[test]
    fn today_is_never_past() {
        assert!(!is_past(at(20, 0, 0), now()));
        assert!(!is_past(at(20, 8, 0), now()));
        assert!(!is_past(at(20, 23, 30), now()));
    }

    #[test]
    fn future_days_are_not_past() {
        assert!(!is_past(at(21, 8, 0), now()));
    }

    // --- overlaps ---

    #[test]
    fn overlapping_spans() {
        let a = EventDraft::new("a", at(20, 9, 0), at(20, 10, 0));
        let b = EventDraft::new("b", at(20, 9, 30), at(20, 10, 30));
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn contained_span_overlaps() {
        let outer = EventDraft::new("outer", at(20, 9, 0), at(20, 12, 0));
        let inner = EventDraft::new("inner", at(20, 10, 0), at(20, 11, 0));
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn back_to_back_spans_do_not_overlap() {
        let a = EventDraft::new("a", at(20, 10, 0), at(20, 11, 0));
        let b = EventDraft::new("b", at(20, 11, 0), at(20, 12, 0));
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn same_time_on_other_days_does_not_overlap() {
        let a = EventDraft::new("a", at(20, 10, 0), at(20, 11, 0));
        let b = EventDraft::new("b", at(21, 10, 0), at(21, 11, 0));
        assert!(!overlaps(&a, &b));
    }

    // --- find_conflict ---

    #[test]
    fn find_conflict_returns_first_in_store_order() {
        let existing = vec![
            event("early", at(20, 8, 0), at(20, 9, 0)),
            event("first", at(20, 10, 0), at(20, 11, 0)),
            event("second", at(20, 10, 30), at(20, 11, 30)),
        ];
        let candidate = EventDraft::new("c", at(20, 10, 15), at(20, 11, 15));
        let conflict = find_conflict(&candidate, &existing).unwrap();
        assert_eq!(conflict.id.as_str(), "first");
    }

    #[test]
    fn find_conflict_none_when_clear() {
        let existing = vec![event("a", at(20, 8, 0), at(20, 9, 0))];
        let candidate = EventDraft::new("c", at(20, 9, 0), at(20, 9, 30));
        assert!(find_conflict(&candidate, &existing).is_none());
    }

    // --- validate ---

    #[test]
    fn validate_accepts_free_slot() {
        let request = EventRequest::new("Standup", Some(day(20)), slot("9:00"), slot("9:30"));
        assert_eq!(validate(&request, &none(), now()), ValidationResult::Accepted);
    }

    #[test]
    fn validate_accepts_earlier_today() {
        let request = EventRequest::new("Breakfast", Some(day(20)), slot("8:00"), slot("8:30"));
        assert!(validate(&request, &none(), now()).is_accepted());
    }

    #[test]
    fn validate_reports_incomplete_for_missing_fields() {
        let missing_title = EventRequest::new(" ", Some(day(20)), slot("9:00"), slot("9:30"));
        let missing_date = EventRequest::new("A", None, slot("9:00"), slot("9:30"));
        let missing_start = EventRequest::new("A", Some(day(20)), None, slot("9:30"));
        let missing_end = EventRequest::new("A", Some(day(20)), slot("9:00"), None);

        for request in [missing_title, missing_date, missing_start, missing_end] {
            assert_eq!(
                validate(&request, &none(), now()),
                ValidationResult::RejectedIncomplete
            );
        }
    }

    #[test]
    fn validate_reports_past_date() {
        let request = EventRequest::new("Lunch", Some(day(19)), slot("12:00"), slot("13:00"));
        assert_eq!(
            validate(&request, &none(), now()),
            ValidationResult::RejectedPastDate
        );
    }

    #[test]
    fn validate_reports_inverted_range() {
        let request = EventRequest::new("Oops", Some(day(20)), slot("11:00"), slot("10:00"));
        assert_eq!(
            validate(&request, &none(), now()),
            ValidationResult::RejectedInvalidRange
        );
        let empty = EventRequest::new("Oops", Some(day(20)), slot("11:00"), slot("11:00"));
        assert_eq!(
            validate(&empty, &none(), now()),
            ValidationResult::RejectedInvalidRange
        );
    }

    #[test]
    fn validate_reports_conflict_with_the_stored_event() {
        let existing = vec![event("standup", at(20, 9, 0), at(20, 9, 30))];
        let request = EventRequest::new("Sync", Some(day(20)), slot("9:15"), slot("9:45"));
        assert_eq!(
            validate(&request, &existing, now()),
            ValidationResult::RejectedConflict(existing[0].clone())
        );
    }

    #[test]
    fn incomplete_takes_priority_over_conflict() {
        let existing = vec![event("standup", at(20, 9, 0), at(20, 9, 30))];
        let request = EventRequest::new("", Some(day(20)), slot("9:00"), slot("9:30"));
        assert_eq!(
            validate(&request, &existing, now()),
            ValidationResult::RejectedIncomplete
        );
    }

    #[test]
    fn past_date_takes_priority_over_conflict() {
        let existing = vec![event("old", at(19, 12, 0), at(19, 13, 0))];
        let request = EventRequest::new("Lunch", Some(day(19)), slot("12:00"), slot("13:00"));
        assert_eq!(
            validate(&request, &existing, now()),
            ValidationResult::RejectedPastDate
        );
    }

    #[test]
    fn messages_match_the_form() {
        assert_eq!(ValidationResult::Accepted.message(), None);
        assert_eq!(
            ValidationResult::RejectedIncomplete.message(),
            Some("Please fill in all fields and select a future date.")
        );
        assert_eq!(
            ValidationResult::RejectedPastDate.message(),
            ValidationResult::RejectedIncomplete.message()
        );
        let conflict = ValidationResult::RejectedConflict(event("a", at(20, 9, 0), at(20, 10, 0)));
        assert_eq!(
            conflict.message(),
            Some("Event conflicts with an existing event.")
        );
    }
}
