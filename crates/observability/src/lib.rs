//! Process-wide tracing setup for warehouse binaries.

/// Subscriber installation (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Install the global subscriber using `WAREHOUSE_LOG_FORMAT` (json by default).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
