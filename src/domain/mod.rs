// Journal records: trades, goals, profile
pub mod journal;

// Headlines from the external feed
pub mod news;

// Port interfaces (storage, feed)
pub mod ports;

// Third-party widget configuration
pub mod widgets;

// Domain-specific error types
pub mod errors;
