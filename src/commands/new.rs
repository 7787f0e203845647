use anyhow::{Context, Result};
use evently_core::{EventForm, Evently};
use owo_colors::OwoColorize;

use super::EventFields;
use crate::prompt;

pub async fn run(evently: &Evently, fields: EventFields) -> Result<()> {
    let interactive = fields.name.is_none() || fields.start.is_none();

    // Prompt only for what wasn't given on the command line.
    let ask = if interactive { fields.missing() } else { Vec::new() };

    let mut form = EventForm::default();
    fields.apply_to(&mut form);

    let draft = prompt::validated_event(form, &ask, interactive)?;

    let event = evently
        .events()
        .create(draft)
        .await
        .context("Failed to save event")?;

    if interactive {
        println!();
    }
    prompt::print_success(&format!("Created: {} {}", event, format!("[{}]", event.id).dimmed()));

    Ok(())
}
