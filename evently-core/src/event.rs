//! Event types.
//!
//! `Event` is the stored record. `EventForm` is raw user input as typed into
//! the create/edit form, and `EventDraft` is what a form becomes once it has
//! passed validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{EventlyError, EventlyResult, ValidationErrors};

/// Longest event name accepted by the form.
pub const MAX_NAME_LEN: usize = 30;

/// Date format used for input, storage and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repetition policy of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    #[default]
    Single,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 5] = [
        Recurrence::Single,
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Monthly,
        Recurrence::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Single => "Single",
            Recurrence::Daily => "Daily",
            Recurrence::Weekly => "Weekly",
            Recurrence::Monthly => "Monthly",
            Recurrence::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Recurrence::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown recurrence '{}'. Expected one of: single, daily, weekly, monthly, yearly",
                    s
                )
            })
    }
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    /// Inclusive upper bound for occurrences.
    #[serde(
        default,
        deserialize_with = "empty_date_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl Event {
    /// Create a new event from a validated draft, assigning a fresh id.
    pub fn new(draft: EventDraft) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            recurrence: draft.recurrence,
        }
    }

    /// Overwrite every editable field with the draft's values. The id is kept.
    pub fn apply(&mut self, draft: EventDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.recurrence = draft.recurrence;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Event fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub recurrence: Recurrence,
}

/// Raw create/edit form input. Dates are still text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub recurrence: Recurrence,
}

impl EventForm {
    /// Prefill a form with a stored event, for editing.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_date: event.start_date.format(DATE_FORMAT).to_string(),
            end_date: event
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            recurrence: event.recurrence,
        }
    }

    /// Validate every field, reporting all problems at once.
    pub fn validate(&self) -> EventlyResult<EventDraft> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Event name is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.add("name", format!("Max {} characters", MAX_NAME_LEN));
        }

        let start_date = match self.start_date.trim() {
            "" => {
                errors.add("startDate", "Start date is required");
                None
            }
            s => parse_date(s)
                .map_err(|e| errors.add("startDate", e))
                .ok(),
        };

        let end_date = match self.end_date.trim() {
            "" => None,
            s => parse_date(s).map_err(|e| errors.add("endDate", e)).ok(),
        };

        if let (Some(start), Some(end)) = (start_date, end_date)
            && end < start
        {
            errors.add("endDate", "End date must not be before start date");
        }

        let description = self.description.trim();

        match start_date {
            Some(start_date) if errors.is_empty() => Ok(EventDraft {
                name: name.to_string(),
                description: (!description.is_empty()).then(|| description.to_string()),
                start_date,
                end_date,
                recurrence: self.recurrence,
            }),
            _ => Err(EventlyError::Validation(errors)),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_date(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form(name: &str, start: &str, end: &str) -> EventForm {
        EventForm {
            name: name.to_string(),
            description: String::new(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            recurrence: Recurrence::Weekly,
        }
    }

    #[test]
    fn recurrence_parses_case_insensitively() {
        assert_eq!("daily".parse::<Recurrence>().unwrap(), Recurrence::Daily);
        assert_eq!("YEARLY".parse::<Recurrence>().unwrap(), Recurrence::Yearly);
        assert_eq!(" Single ".parse::<Recurrence>().unwrap(), Recurrence::Single);
        assert!("fortnightly".parse::<Recurrence>().is_err());
    }

    #[test]
    fn valid_form_becomes_draft() {
        let mut input = form("  Standup ", "2026-03-20", "2026-04-20");
        input.description = "  ".to_string();
        let draft = input.validate().unwrap();
        assert_eq!(draft.name, "Standup");
        assert_eq!(draft.description, None);
        assert_eq!(draft.start_date, date(2026, 3, 20));
        assert_eq!(draft.end_date, Some(date(2026, 4, 20)));
        assert_eq!(draft.recurrence, Recurrence::Weekly);
    }

    #[test]
    fn missing_name_and_start_reported_together() {
        let err = form("", "", "").validate().unwrap_err();
        let EventlyError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.for_field("name"), vec!["Event name is required"]);
        assert_eq!(errors.for_field("startDate"), vec!["Start date is required"]);
    }

    #[test]
    fn name_longer_than_thirty_chars_rejected() {
        let long = "a".repeat(31);
        let err = form(&long, "2026-03-20", "").validate().unwrap_err();
        let EventlyError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.for_field("name"), vec!["Max 30 characters"]);

        assert!(form(&"a".repeat(30), "2026-03-20", "").validate().is_ok());
    }

    #[test]
    fn malformed_dates_rejected() {
        let err = form("Trip", "20/03/2026", "tomorrow").validate().unwrap_err();
        let EventlyError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.for_field("startDate").len(), 1);
        assert_eq!(errors.for_field("endDate").len(), 1);
    }

    #[test]
    fn end_before_start_rejected() {
        let err = form("Trip", "2026-03-20", "2026-03-19")
            .validate()
            .unwrap_err();
        let EventlyError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.for_field("endDate"),
            vec!["End date must not be before start date"]
        );
    }

    #[test]
    fn apply_keeps_id() {
        let mut event = Event::new(form("Old", "2026-01-01", "").validate().unwrap());
        let id = event.id.clone();
        event.apply(form("New", "2026-02-02", "").validate().unwrap());
        assert_eq!(event.id, id);
        assert_eq!(event.name, "New");
        assert_eq!(event.start_date, date(2026, 2, 2));
    }

    #[test]
    fn displays_as_name() {
        let event = Event::new(form("Standup", "2026-03-20", "").validate().unwrap());
        assert_eq!(event.to_string(), "Standup");
    }

    #[test]
    fn form_from_event_round_trips_through_validation() {
        let event = Event::new(form("Gym", "2026-05-01", "2026-06-01").validate().unwrap());
        let draft = EventForm::from_event(&event).validate().unwrap();
        assert_eq!(draft.start_date, event.start_date);
        assert_eq!(draft.end_date, event.end_date);
    }

    #[test]
    fn decodes_stored_json_with_empty_optionals() {
        let json = r#"{
            "id": "abc",
            "name": "Dentist",
            "description": "",
            "startDate": "2026-03-20",
            "endDate": "",
            "recurrence": "Monthly"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.description, None);
        assert_eq!(event.end_date, None);
        assert_eq!(event.recurrence, Recurrence::Monthly);
    }

    #[test]
    fn missing_recurrence_defaults_to_single() {
        let json = r#"{"id": "x", "name": "Call", "startDate": "2026-03-20"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.recurrence, Recurrence::Single);
    }

    #[test]
    fn unknown_recurrence_fails_to_decode() {
        let json = r#"{"id": "x", "name": "Call", "startDate": "2026-03-20", "recurrence": "Hourly"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let event = Event::new(form("Gym", "2026-05-01", "2026-06-01").validate().unwrap());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["startDate"], "2026-05-01");
        assert_eq!(value["endDate"], "2026-06-01");
        assert_eq!(value["recurrence"], "Weekly");
        assert!(value.get("description").is_none());
    }
}
