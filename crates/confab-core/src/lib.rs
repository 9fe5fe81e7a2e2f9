//! Business logic and port trait definitions for Confab.
//!
//! This crate defines the "ports" (the snapshot store and the conversation
//! client) that the infrastructure layer implements, plus the session
//! manager that orchestrates them. It depends only on `confab-types` --
//! never on `confab-infra` or any network/filesystem crate.

pub mod chat;
pub mod event;
pub mod remote;
pub mod storage;
