//! Observability for the platform advisor
//!
//! - Structured logging (JSON lines on stderr)
//! - Lifecycle and request events
//! - Recommendation counters
//!
//! Observability is read-only: nothing here feeds back into a decision.
//!
//! # Usage
//!
//! ```ignore
//! use platform_advisor::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::ConfigLoaded, &[("port", "8000")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_requests_rejected();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot, PlatformCount};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event, fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::ShutdownComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("port", "8000")]);
    }
}
