//! # Core Models Module
//!
//! Data structures describing one loaded PoPMuSiC result set.
//!
//! - [`mutation`] - Predicted effect of a single substitution
//! - [`record`] - Per-residue summary values with their candidate substitutions
//! - [`results`] - The ordered collection matched against a host structure
//!
//! All models are immutable once built by the readers in [`crate::core::io`].

pub mod mutation;
pub mod record;
pub mod results;
