//! Integration tests for the rapport CLI

mod analyze;
mod errors;
mod feedback;
mod import;
mod init;
mod logging;
mod send;
mod support;
