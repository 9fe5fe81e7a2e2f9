//! Infrastructure layer for Confab.
//!
//! Contains implementations of the port traits defined in `confab-core`:
//! the JSON-file snapshot store, the reqwest-based prediction client, and
//! the configuration loader.

pub mod config;
pub mod filesystem;
pub mod remote;
