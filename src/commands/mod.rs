//! CLI commands for rapport

pub mod analyze;
pub mod dispatch;
pub mod feedback;
pub mod format;
pub mod import;
pub mod init;
pub mod send;
pub mod transcript;
