//! # Workflows Module
//!
//! High-level entry points for host plugins.
//!
//! - **Session Workflow** ([`session`]) - Load a PoPMuSiC result pair, validate it against a
//!   host structure, annotate the structure and apply suggested mutations.
//!
//! A [`Session`](session::Session) can only be constructed after validation succeeds, so
//! annotation and mutation never run against a structure that does not match the results.

pub mod session;
