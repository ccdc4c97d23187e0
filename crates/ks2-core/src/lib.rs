//! ks2-core: curriculum tables, diagnostic scoring and scheme-of-work generation.
//!
//! This crate defines the data model, the static content tables, and the two
//! pure engines (the diagnostic scorer and the scheme generator) that the rest
//! of ks2 builds on, plus the small key-value persistence used for the
//! activity log and the diagnostic-to-plan handoff.

pub mod activity;
pub mod config;
pub mod content;
pub mod diagnostic;
pub mod error;
pub mod handoff;
pub mod model;
pub mod scheme;
pub mod store;
