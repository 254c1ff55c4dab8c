//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `normalize.rs` — name canonicalization for directory and dashboard matching.
//! - `directory.rs` — application directory load + name resolution.
//! - `transport.rs` — blocking HTTP fetch with bearer auth.
//! - `adapters.rs` — per-source field extraction (API/overview/report/PDF text).
//! - `record.rs` — metrics record assembly with neutral defaults.
//! - `gate.rs` — threshold resolution + release gate evaluation.
//! - `storage.rs` — metrics artifact persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod adapters;
pub mod directory;
pub mod gate;
pub mod normalize;
pub mod output;
pub mod record;
pub mod storage;
pub mod transport;
