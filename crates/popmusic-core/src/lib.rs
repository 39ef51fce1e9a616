//! # PoPMuSiC Core Library
//!
//! Loads per-residue stability predictions produced by the PoPMuSiC service, reconciles
//! them with a host molecular structure and selects favourable point mutations.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`ResidueRecord`, `ParsedResultSet`)
//!   and the readers for the `.pops` summary and `.pop` detail formats.
//!
//! - **[`engine`]: The Logic Core.** Validation against a host structure, annotation of host
//!   residues, favourable-mutation selection and delegation of mutations to a host
//!   rotamer-placement routine.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together behind a [`Session`]
//!   that can only exist once the loaded results have been validated against the structure.
//!
//! [`Session`]: workflows::session::Session

pub mod core;
pub mod engine;
pub mod workflows;
