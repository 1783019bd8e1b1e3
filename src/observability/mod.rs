//! Observability: structured logging for the settings load.

pub mod logging;

pub use logging::{init_logging, LogFormat};
