use anyhow::Result;
use daybook_core::{Admission, DaybookConfig, Event, Scheduler};
use dialoguer::Select;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::form;
use crate::render::{Render, render_agenda};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Reschedule,
    Delete,
    List,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Add,
        Action::Reschedule,
        Action::Delete,
        Action::List,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Add => "Add event",
            Action::Reschedule => "Reschedule event",
            Action::Delete => "Delete event",
            Action::List => "List events",
            Action::Quit => "Quit",
        }
    }

    /// Menu entry at `index`; anything out of range quits.
    fn from_index(index: usize) -> Action {
        Action::ALL.get(index).copied().unwrap_or(Action::Quit)
    }
}

/// Run the interactive session. Events live only as long as the process.
pub fn run(config: &DaybookConfig) -> Result<()> {
    let mut scheduler = Scheduler::from_config(config);

    loop {
        println!();
        let labels = Action::ALL.map(Action::label);
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = Action::from_index(selection);
        debug!(?action, "session action");

        match action {
            Action::Add => add(&mut scheduler)?,
            Action::Reschedule => reschedule(&mut scheduler)?,
            Action::Delete => delete(&mut scheduler)?,
            Action::List => list(&scheduler),
            Action::Quit => return Ok(()),
        }
    }
}

fn add(scheduler: &mut Scheduler) -> Result<()> {
    let request = form::read_request(&scheduler.list_time_slots(), scheduler.today())?;
    report(scheduler.add_request(request)?, "Created");
    Ok(())
}

fn reschedule(scheduler: &mut Scheduler) -> Result<()> {
    let Some(event) = pick_event(scheduler, "Reschedule which event?")? else {
        return Ok(());
    };

    let request = form::read_request(&scheduler.list_time_slots(), scheduler.today())?;
    report(scheduler.replace_event(&event.id, request)?, "Rescheduled");
    Ok(())
}

fn delete(scheduler: &mut Scheduler) -> Result<()> {
    let Some(event) = pick_event(scheduler, "Delete which event?")? else {
        return Ok(());
    };

    if scheduler.delete_event(&event.id) {
        println!("{}", format!("  Deleted: {}", event.title).green());
    }
    Ok(())
}

fn list(scheduler: &Scheduler) {
    let mut events = scheduler.list_events();
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return;
    }

    events.sort_by_key(|e| e.start);
    for line in render_agenda(&events, scheduler.today()) {
        println!("{}", line);
    }
}

/// Let the user choose one stored event. `None` if there are none or they cancel.
fn pick_event(scheduler: &Scheduler, prompt: &str) -> Result<Option<Event>> {
    let events = scheduler.list_events();
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(None);
    }

    let mut items: Vec<String> = events
        .iter()
        .map(|e| format!("{} {}", e.date().format("%Y-%m-%d"), e.render()))
        .collect();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(events.into_iter().nth(selection))
}

fn report(admission: Admission, verb: &str) {
    match admission {
        Admission::Accepted(event) => {
            println!(
                "{}",
                format!("  {}: {} ({})", verb, event.title, event.time_range()).green()
            );
        }
        Admission::Rejected(result) => {
            debug!(?result, verb, "request rejected");
            eprintln!("  {}", result.render());
        }
    }
}
