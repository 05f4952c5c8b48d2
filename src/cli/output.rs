pub use rapport_core::format::OutputFormat;
