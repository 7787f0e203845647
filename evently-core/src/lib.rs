//! Core types for evently.
//!
//! - `event` and `user`: the stored records and their form validation
//! - `recurrence`: upcoming occurrence dates of an event
//! - `period`: narrowing the event list to today/this week/month/year
//! - `store`: the key-value storage port and the typed stores on top of it

pub mod config;
pub mod error;
pub mod event;
pub mod evently;
pub mod period;
pub mod recurrence;
pub mod store;
pub mod user;

pub use error::{EventlyError, EventlyResult};
pub use event::{Event, EventDraft, EventForm, Recurrence};
pub use evently::Evently;
pub use period::PeriodFilter;
pub use user::User;
