//! # Core Module
//!
//! Stateless building blocks: the record types produced from PoPMuSiC output and the
//! readers for its two flat-file formats.
//!
//! - **Result Representation** ([`models`]) - Residue records and their candidate mutations
//! - **File I/O** ([`io`]) - Line-oriented readers for `.pops`/`.pop` files and directory discovery
//! - **Identifiers** ([`utils`]) - Amino-acid code tables used for mutation notation

pub mod io;
pub mod models;
pub mod utils;
