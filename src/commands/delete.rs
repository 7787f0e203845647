use anyhow::{Context, Result};
use evently_core::{Evently, EventlyError};
use owo_colors::OwoColorize;

use crate::prompt;

pub async fn run(evently: &Evently, id: &str, yes: bool) -> Result<()> {
    let events = evently.events();

    // Records that no longer decode can still be deleted by id.
    let label = match events.find(id).await {
        Ok(event) => event.to_string(),
        Err(EventlyError::EventNotFound(_)) => id.to_string(),
        Err(e) => return Err(e.into()),
    };

    if !yes && !prompt::confirm(&format!("Remove \"{}\"?", label))? {
        println!("  {}", "Cancelled".dimmed());
        return Ok(());
    }

    events
        .delete(id)
        .await
        .context("Failed to delete event")?;

    println!("{}", format!("  Deleted: {}", label).red());

    Ok(())
}
