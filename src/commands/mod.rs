//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `fetch.rs` — per-source metrics extraction into an artifact.
//! - `check.rs` — gate evaluation and artifact display.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod fetch;

pub use check::{handle_check, handle_show};
pub use fetch::handle_fetch;
