//! Rapport Core Library
//!
//! Conversation feedback analytics over two-party chat transcripts: the
//! metric functions, the transcript and feedback stores they read from, and
//! the configuration, logging and error plumbing the CLI shares.

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod feedback;
pub mod format;
pub mod lexicon;
pub mod logging;
pub mod memory;
pub mod metrics;
pub mod text;
pub mod transcript;
