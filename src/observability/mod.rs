//! Observability for the movies service
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle and request events
//!
//! # Usage
//!
//! ```ignore
//! use movies_api::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::MovieCreated, &[("id", &movie.id)]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at.
pub fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_rejection() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
