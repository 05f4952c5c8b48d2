//! Tracing helpers for command dispatch

/// Log elapsed time since `start` at debug level
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "open_database");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
