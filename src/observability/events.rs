//! Observable events
//!
//! Every log line names one of these events. Events are explicit and typed.

use std::fmt;

/// Observable events in the lead service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Server startup begins
    ServerStart,
    /// Listener bound, ready to serve
    ServerListening,
    /// Server stopped with an error
    ServerFailed,

    // Requests
    /// Lead submission stored
    LeadCreated,
    /// Lead submission failed validation
    LeadRejected,
    /// Lead list returned
    LeadsListed,
    /// Unsupported verb on a lead route
    MethodNotAllowed,
    /// Unexpected failure while serving a request
    InternalError,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerFailed => "SERVER_FAILED",
            Event::LeadCreated => "LEAD_CREATED",
            Event::LeadRejected => "LEAD_REJECTED",
            Event::LeadsListed => "LEADS_LISTED",
            Event::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Event::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Events that indicate the service cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }

    /// Client mistakes the service recovered from
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::LeadRejected | Event::MethodNotAllowed)
    }

    /// Events describing a failed operation
    pub fn is_error(&self) -> bool {
        matches!(self, Event::InternalError | Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
