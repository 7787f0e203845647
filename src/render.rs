//! Terminal rendering for evently types.
//!
//! Extension traits that add colored output to evently-core types using
//! owo_colors.

use chrono::NaiveDate;
use evently_core::error::ValidationErrors;
use evently_core::event::DATE_FORMAT;
use evently_core::recurrence::format_occurrences;
use evently_core::{Event, User};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// One line per event in `evently list`.
impl Render for Event {
    fn render(&self) -> String {
        let when = format!(
            "{} ({})",
            self.start_date.format(DATE_FORMAT),
            self.recurrence
        );
        format!(
            "  {} {} {}",
            self.name.bold(),
            when,
            format!("[{}]", self.id).dimmed()
        )
    }
}

impl Render for ValidationErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|e| format!("  {}: {}", field_label(e.field), e.message).red().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for User {
    fn render(&self) -> String {
        [
            self.name.bold().to_string(),
            format!("  Email: {}", self.email),
            format!("  Phone: {}", self.phone),
        ]
        .join("\n")
    }
}

/// Human name for a form field key.
pub fn field_label(field: &str) -> &str {
    match field {
        "name" => "Name",
        "email" => "Email",
        "phone" => "Phone",
        "password" => "Password",
        "description" => "Description",
        "startDate" => "Start date",
        "endDate" => "End date",
        "recurrence" => "Recurrence",
        other => other,
    }
}

/// Detail view of one event followed by its upcoming occurrences.
pub fn event_detail(event: &Event, occurrences: &[NaiveDate]) -> Vec<String> {
    let mut lines = vec![event.name.to_uppercase().bold().to_string()];

    let description = event.description.as_deref().unwrap_or("N/A");
    let end = event
        .end_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "Infinite".to_string());

    lines.push(format!("  {} {}", "Description:".bold(), description));
    lines.push(format!(
        "  {} {}",
        "Start Date:".bold(),
        event.start_date.format(DATE_FORMAT)
    ));
    lines.push(format!("  {} {}", "End Date:".bold(), end));
    lines.push(format!("  {} {}", "Recurrence:".bold(), event.recurrence));
    lines.push(String::new());
    lines.push(format!("Next {} occurrences:", occurrences.len()).bold().to_string());

    if occurrences.is_empty() {
        lines.push(format!("  {}", "No future occurrences".dimmed()));
    } else {
        for date in format_occurrences(occurrences) {
            lines.push(format!("  {}", date.blue()));
        }
    }

    lines
}
