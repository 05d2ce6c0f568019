//! Observable events for the movies service

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    BootStart,
    ConfigLoaded,
    SeedLoaded,
    ServerListening,
    ServerStopped,
    BootFailed,

    // Requests
    RequestComplete,
    CorsRejected,
    ValidationRejected,

    // Store mutations
    MovieCreated,
    MovieUpdated,
    MovieDeleted,
}

impl Event {
    /// Returns the log name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::BootFailed => "BOOT_FAILED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::CorsRejected => "CORS_REJECTED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::MovieCreated => "MOVIE_CREATED",
            Event::MovieUpdated => "MOVIE_UPDATED",
            Event::MovieDeleted => "MOVIE_DELETED",
        }
    }

    /// True for events that end the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }

    /// True for events describing a rejected client request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::CorsRejected | Event::ValidationRejected)
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

    #[test]
    fn test_event_names() {
        assert_eq!(Event::MovieCreated.as_str(), "MOVIE_CREATED");
        assert_eq!(Event::CorsRejected.to_string(), "CORS_REJECTED");
    }

    #[test]
    fn test_event_classes() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::SeedLoaded.is_fatal());
        assert!(Event::CorsRejected.is_rejection());
        assert!(!Event::MovieDeleted.is_rejection());
    }
}
