//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `dataset.rs`: CSV tables with by-name column lookup.
//! - `registry.rs`: park registry normalization (sort, exclusion, dedupe).
//! - `coordinates.rs`: coordinate registry filtering and code overrides.
//! - `join.rs`: left join into canonical parks + join-gap diagnostics.
//! - `store.rs`: visited-set persistence.
//! - `view.rs`: pure view recompute, rows and summary.
//! - `session.rs`: per-process context driving events through the above.
//! - `config.rs`: config file + CLI overrides.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod coordinates;
pub mod dataset;
pub mod join;
pub mod output;
pub mod registry;
pub mod session;
pub mod store;
pub mod view;
