/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The presentation state machine driven by user intents (shell.rs)

pub mod data;
pub mod shell;
