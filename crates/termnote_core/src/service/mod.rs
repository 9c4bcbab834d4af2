//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store loads/saves into use-case level APIs.
//! - Keep the shell decoupled from storage details.

pub mod note_service;
