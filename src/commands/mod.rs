pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod register;
pub mod show;
pub mod whoami;

use evently_core::{EventForm, Recurrence};

/// Event form values given on the command line. `None` means not given.
#[derive(Debug, Default)]
pub struct EventFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub recurrence: Option<Recurrence>,
}

impl EventFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.recurrence.is_none()
    }

    /// Form field keys that were not given.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.start.is_none() {
            missing.push("startDate");
        }
        if self.end.is_none() {
            missing.push("endDate");
        }
        if self.recurrence.is_none() {
            missing.push("recurrence");
        }
        missing
    }

    /// Overwrite the form's values with the ones given.
    pub fn apply_to(self, form: &mut EventForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(start) = self.start {
            form.start_date = start;
        }
        if let Some(end) = self.end {
            form.end_date = end;
        }
        if let Some(recurrence) = self.recurrence {
            form.recurrence = recurrence;
        }
    }
}
