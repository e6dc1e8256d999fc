//! Terminal rendering for daybook types.
//!
//! Extension traits that add colored output to daybook-core types using
//! owo_colors, in the spirit of an event card on a calendar grid.

use chrono::NaiveDate;
use daybook_core::{Event, ValidationResult};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.time_range(),
            self.title.bold(),
            format!("[{}]", self.id).dimmed()
        )
    }
}

impl Render for ValidationResult {
    fn render(&self) -> String {
        match self {
            ValidationResult::RejectedConflict(existing) => format!(
                "{} ({} {})",
                self.message().unwrap_or_default().red(),
                existing.title,
                existing.time_range()
            ),
            _ => self.message().unwrap_or_default().red().to_string(),
        }
    }
}

/// Render events grouped under a heading per day, in the order given.
pub fn render_agenda(events: &[Event], today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        let date = event.date();
        if current_date != Some(date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(format_date_label(date, today).bold().to_string());
            current_date = Some(date);
        }
        lines.push(format!("  {}", event.render()));
    }

    lines
}

/// Label a day relative to today (e.g. "Today", "Tomorrow", "Wed Feb 25").
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
