//! Solitaire test support utilities
//!
//! Logging bootstrap for integration tests and a JSON log capture for
//! asserting on structured events.

pub mod log_capture;
pub mod test_logging;
