// ABOUTME: Library root for klir - exposes the cleanup workflow for testing.
// ABOUTME: The main binary is in main.rs.

pub mod cleanup;
pub mod error;
pub mod output;
pub mod prompt;
pub mod runtime;
pub mod types;
