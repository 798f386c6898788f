//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep park, view and report structs in one place.
//! - Avoid cyclic imports between the loading services and the CLI.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: parks, coordinates, view rows, summary, JSON envelope.
//! - `constants.rs`: dataset column names, excluded park, code overrides.
//! - `errors.rs`: typed failures and their stable JSON error codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
