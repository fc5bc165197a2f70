//! # bindhub-domain
//!
//! Pure domain model for the bindhub binding-configuration toolkit.
//!
//! ## Responsibilities
//! - Define **item kinds** (the closed set of item types a binding may be
//!   attached to)
//! - Define **binding rules** (trigger → device-command mappings parsed
//!   from configuration strings)
//! - Define the per-item **binding store** and the lookup surface the host
//!   automation system queries at dispatch time
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.
//! Parsing of adapter-specific configuration formats lives in the adapter
//! crates; this crate only models the result.

pub mod binding;
pub mod error;
pub mod item;
