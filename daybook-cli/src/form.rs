//! The add-event form: title, date, start and end slot.

use anyhow::{Result, bail};
use chrono::{Duration, NaiveDate};
use daybook_core::{EventRequest, TimeSlot};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

/// First entry of every slot picker; choosing it leaves the field unset.
const NO_SLOT: &str = "Select a time";

/// Prompt for every field of a new event.
///
/// Fields may be left empty; the scheduler decides what to do with an
/// incomplete request.
pub fn read_request(slots: &[TimeSlot], today: NaiveDate) -> Result<EventRequest> {
    let title: String = Input::new()
        .with_prompt("  Title")
        .allow_empty(true)
        .interact_text()?;

    let date = prompt_date(today)?;
    let start = prompt_slot("  Start time", slots)?;
    let end = prompt_slot("  End time", slots)?;

    Ok(EventRequest::new(title, date, start, end))
}

/// Prompt for a date, retrying on parse errors.
fn prompt_date(today: NaiveDate) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Date (YYYY-MM-DD)")
            .default(today.format("%Y-%m-%d").to_string())
            .allow_empty(true)
            .interact_text()?;
        match parse_date(&input, today) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_slot(prompt: &str, slots: &[TimeSlot]) -> Result<Option<TimeSlot>> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&slot_choices(slots))
        .default(0)
        .interact()?;
    Ok(slot_for_choice(selection, slots))
}

/// Parse the date field. Empty input means the field was left unset.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => Ok(None),
        "today" => Ok(Some(today)),
        "tomorrow" => Ok(Some(today + Duration::days(1))),
        "yesterday" => Ok(Some(today - Duration::days(1))),
        _ => match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => bail!("Invalid date format '{}'. Expected YYYY-MM-DD", input),
        },
    }
}

/// Labels for a slot picker, with the "unset" entry first.
pub fn slot_choices(slots: &[TimeSlot]) -> Vec<String> {
    std::iter::once(NO_SLOT.to_string())
        .chain(slots.iter().map(|s| s.to_string()))
        .collect()
}

pub fn slot_for_choice(index: usize, slots: &[TimeSlot]) -> Option<TimeSlot> {
    index.checked_sub(1).and_then(|i| slots.get(i)).copied()
}
