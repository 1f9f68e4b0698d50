//! Library target backing the `verba` binary.
//!
//! Exposes the CLI definition and command handlers so integration tests can
//! drive them without spawning the binary.

pub mod cli;
