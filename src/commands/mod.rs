//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs`: view/table/gaps/summary/check (read-only commands).
//! - `visits.rs`: visited/select/mark/unmark (store mutations).
//!
//! ## Principles
//! - One function per command; `main` owns the dispatch match.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod visits;
