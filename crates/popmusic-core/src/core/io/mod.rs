//! Provides input functionality for PoPMuSiC output files.
//!
//! PoPMuSiC reports a prediction as two companion files: a `.pops` summary with one line
//! per residue and a `.pop` detail file with one line per candidate substitution. The
//! readers in this module parse both and reconcile them into a single
//! [`ParsedResultSet`](crate::core::models::results::ParsedResultSet).

pub mod discovery;
pub mod error;
mod lines;
pub mod pop;
pub mod pops;
