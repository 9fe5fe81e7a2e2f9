//! Interactive CLI chat experience for Confab.
//!
//! This module implements the chat loop: welcome banner, prompt/response
//! turns with a typing spinner while the reply is pending, slash commands,
//! and attachment annotations. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod loop_runner;
pub mod renderer;
