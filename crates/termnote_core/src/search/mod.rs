//! Note search entry points.
//!
//! # Responsibility
//! - Expose keyword filtering used by the shell search flow.

pub mod keyword;
