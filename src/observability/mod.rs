//! Observability for shapecheck
//!
//! Structured JSON logging of typed events. Logging is read-only: it never
//! changes a validation outcome and never fails the caller.
//!
//! ```ignore
//! use shapecheck::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! log_event_with_fields(Event::ValidationPassed, &[("properties", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Returns whether an event would be written. Call sites check this
/// before formatting field values.
pub fn event_enabled(event: Event) -> bool {
    Logger::enabled(event.severity())
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
