//! Logging Threshold Tests
//!
//! Per-call validation events are TRACE: silent by default, written once
//! the threshold is lowered. Logging never changes a validation outcome.

use serde_json::json;
use shapecheck::observability::{event_enabled, Event, Logger, Severity};
use shapecheck::{SchemaValidator, ValidationError};

#[test]
fn test_threshold_controls_per_call_events() {
    assert!(!event_enabled(Event::ValidationPassed));

    Logger::set_min_severity(Severity::Trace);
    assert_eq!(Logger::min_severity(), Severity::Trace);
    assert!(event_enabled(Event::ValidationPassed));
    assert!(event_enabled(Event::ValidationRejected));

    let v = SchemaValidator::new(&json!({ "name": { "type": "string", "length": { "greaterThan": 3 } } }))
        .unwrap();
    assert_eq!(v.valid(&json!({ "name": "Alice" })), Ok(true));
    assert_eq!(v.valid(&json!({ "other": 1 })), Ok(false));
    assert!(matches!(
        v.valid(&json!({ "name": "Al" })),
        Err(ValidationError::TextTooShort { .. })
    ));

    Logger::set_min_severity(Severity::Info);
    assert!(!event_enabled(Event::ValidationPassed));
}
