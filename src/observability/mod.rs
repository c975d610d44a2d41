//! Observability subsystem.
//!
//! Progress of a run is reported as `tracing` events on stdout. Private
//! keys never appear in any event.

pub mod logging;

pub use logging::init_logging;
