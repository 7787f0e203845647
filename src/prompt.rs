//! Interactive prompts for the register and event forms.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use evently_core::error::{EventlyError, ValidationErrors};
use evently_core::{EventDraft, EventForm, Recurrence};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Prompt for a line of text, prefilled with `initial`. Optional fields may
/// be left empty.
pub fn text(prompt: &str, initial: &str, optional: bool) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("  {}", prompt))
        .allow_empty(optional);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?.trim().to_string())
}

pub fn recurrence(current: Recurrence) -> Result<Recurrence> {
    let items: Vec<&str> = Recurrence::ALL.iter().map(|r| r.as_str()).collect();
    let default = Recurrence::ALL
        .iter()
        .position(|r| *r == current)
        .unwrap_or_default();

    let selection = Select::new()
        .with_prompt("  Recurrence")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Recurrence::ALL[selection])
}

pub fn password() -> Result<String> {
    Ok(rpassword::prompt_password("  Password: ")?)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("  {}", prompt))
        .default(false)
        .interact()?)
}

/// Prompt for the named event form fields, in form order.
fn event_fields(form: &mut EventForm, fields: &[&str]) -> Result<()> {
    if fields.contains(&"name") {
        form.name = text("Event name", &form.name, false)?;
    }
    if fields.contains(&"description") {
        form.description = text("Description (skip)", &form.description, true)?;
    }
    if fields.contains(&"startDate") {
        form.start_date = text("Start date (YYYY-MM-DD)", &form.start_date, false)?;
    }
    if fields.contains(&"endDate") {
        form.end_date = text("End date (YYYY-MM-DD, skip)", &form.end_date, true)?;
    }
    if fields.contains(&"recurrence") {
        form.recurrence = recurrence(form.recurrence)?;
    }
    Ok(())
}

/// Turn a form into a draft. When interactive, `ask` fields are prompted
/// first and any field that fails validation is prompted again until the
/// form passes. Otherwise the first validation failure is returned.
pub fn validated_event(mut form: EventForm, ask: &[&str], interactive: bool) -> Result<EventDraft> {
    let mut pending: Vec<&str> = ask.to_vec();

    loop {
        if interactive {
            event_fields(&mut form, &pending)?;
        }

        match form.validate() {
            Ok(draft) => return Ok(draft),
            Err(EventlyError::Validation(errors)) if interactive => {
                eprintln!("{}", errors.render());
                pending = failed_fields(&errors);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Fields with at least one error, without repeats.
pub fn failed_fields(errors: &ValidationErrors) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::new();
    for error in errors.iter() {
        if !fields.contains(&error.field) {
            fields.push(error.field);
        }
    }
    fields
}

pub fn print_success(message: &str) {
    println!("{}", format!("  {}", message).green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fields_are_unique_and_ordered() {
        let mut errors = ValidationErrors::new();
        errors.add("password", "At least 8 characters");
        errors.add("email", "Invalid email");
        errors.add("password", "Include at least one number");

        assert_eq!(failed_fields(&errors), vec!["password", "email"]);
    }

    #[test]
    fn non_interactive_returns_validation_error() {
        let form = EventForm {
            name: "Trip".to_string(),
            start_date: "not a date".to_string(),
            ..Default::default()
        };

        let err = validated_event(form, &[], false).unwrap_err();
        let core = err.downcast_ref::<EventlyError>().unwrap();
        assert!(matches!(core, EventlyError::Validation(_)));
    }

    #[test]
    fn non_interactive_valid_form_passes_through() {
        let form = EventForm {
            name: "Trip".to_string(),
            start_date: "2026-10-19".to_string(),
            recurrence: Recurrence::Yearly,
            ..Default::default()
        };

        let draft = validated_event(form, &["name"], false).unwrap();
        assert_eq!(draft.name, "Trip");
        assert_eq!(draft.recurrence, Recurrence::Yearly);
    }
}
