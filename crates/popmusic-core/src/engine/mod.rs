//! # Engine Module
//!
//! Reconciles a loaded [`ParsedResultSet`](crate::core::models::results::ParsedResultSet)
//! with a host molecular structure and drives mutation selection.
//!
//! ## Components
//!
//! - **Host Interface** ([`host`]) - Traits a host structure implements to be annotated and mutated
//! - **Validation** ([`validation`]) - Residue-count and sequence-identity checks
//! - **Annotation** ([`annotation`]) - Namespaced numeric annotations on host residues
//! - **Selection** ([`selection`]) - Favourable-mutation selection by minimum ddG
//! - **Mutation** ([`mutation`], [`criteria`]) - Delegation of substitutions to a host rotamer placer
//! - **Configuration** ([`config`]) and **Progress Reporting** ([`progress`])
//!
//! Records and structure residues are matched by position in sequence only; hosts must
//! supply residues in the same order as the summary file lists them.

pub mod annotation;
pub mod config;
pub mod criteria;
pub mod error;
pub mod host;
pub mod mutation;
pub mod progress;
pub mod selection;
pub mod validation;
