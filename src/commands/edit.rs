use anyhow::{Context, Result};
use evently_core::{EventForm, Evently};

use super::EventFields;
use crate::prompt;

pub async fn run(evently: &Evently, id: &str, fields: EventFields) -> Result<()> {
    let events = evently.events();
    let existing = events.find(id).await?;

    // With no field flags, walk through the whole prefilled form.
    let interactive = fields.is_empty();
    let ask = if interactive { fields.missing() } else { Vec::new() };

    let mut form = EventForm::from_event(&existing);
    fields.apply_to(&mut form);

    let draft = prompt::validated_event(form, &ask, interactive)?;

    let event = events
        .update(id, draft)
        .await
        .context("Failed to save event")?;

    if interactive {
        println!();
    }
    prompt::print_success(&format!("Updated: {}", event.name));

    Ok(())
}
