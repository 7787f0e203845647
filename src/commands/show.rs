use anyhow::Result;
use evently_core::Evently;
use evently_core::recurrence::{MAX_OCCURRENCE_LIMIT, format_occurrences};

use crate::render::event_detail;

pub async fn run(evently: &Evently, id: &str, count: Option<usize>, json: bool) -> Result<()> {
    let event = evently.events().find(id).await?;

    let count = count.unwrap_or(evently.config().occurrence_count);
    if count > MAX_OCCURRENCE_LIMIT {
        anyhow::bail!(
            "Occurrence count {} is too large (max {})",
            count,
            MAX_OCCURRENCE_LIMIT
        );
    }
    let occurrences = event.next_occurrences(count);

    if json {
        let value = serde_json::json!({
            "event": event,
            "nextOccurrences": format_occurrences(&occurrences),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for line in event_detail(&event, &occurrences) {
        println!("{}", line);
    }

    Ok(())
}
