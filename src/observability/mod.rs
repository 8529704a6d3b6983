//! Observability for the lead service
//!
//! Structured JSON log lines for lifecycle and request events.
//!
//! # Usage
//!
//! ```ignore
//! use leadline::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! log_event_with_fields(Event::LeadCreated, &[("id", "42")]);
//! Logger::log(Severity::Warn, "CUSTOM_EVENT", &[("reason", "example")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_error() {
        Severity::Error
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle or request event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
