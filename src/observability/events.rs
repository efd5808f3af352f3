//! Observability events for the platform advisor
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete
    ShutdownComplete,
    /// Server could not start or stopped unexpectedly (FATAL)
    ServerFailed,

    // Requests
    /// A recommendation was produced
    RecommendationIssued,
    /// A request was rejected before reaching the recommender
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "ADVISOR_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "ADVISOR_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",
            Event::RecommendationIssued => "RECOMMENDATION_ISSUED",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed => Severity::Fatal,
            Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_EVENTS: [Event; 8] = [
        Event::BootStart,
        Event::ConfigLoaded,
        Event::Serving,
        Event::ShutdownStart,
        Event::ShutdownComplete,
        Event::ServerFailed,
        Event::RecommendationIssued,
        Event::RequestRejected,
    ];

    #[test]
    fn test_all_events_have_string_representation() {
        for event in ALL_EVENTS {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert_eq!(Event::ServerFailed.severity(), Severity::Fatal);
        assert_ne!(Event::ShutdownStart.severity(), Severity::Fatal);
    }

    #[test]
    fn test_every_severity_is_reachable() {
        let used: HashSet<_> = ALL_EVENTS.iter().map(|e| e.severity()).collect();
        let expected: HashSet<_> = [Severity::Info, Severity::Warn, Severity::Fatal].into();
        assert_eq!(used, expected);
    }

    #[test]
    fn test_rejections_are_warnings() {
        assert_eq!(Event::RequestRejected.severity(), Severity::Warn);
        assert_eq!(Event::RecommendationIssued.severity(), Severity::Info);
    }
}
