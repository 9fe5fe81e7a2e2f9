//! Shared domain types for Confab.
//!
//! This crate contains the types used across the Confab client: conversation
//! messages and snapshots, prediction-endpoint wire shapes, conversation
//! events, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod remote;
