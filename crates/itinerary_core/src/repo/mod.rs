//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for journey documents.
//! - Isolate SQLite and document-format details from orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`SlugConflict`, `InvalidData`)
//!   in addition to transport errors.

pub mod document;
pub mod journey_repo;
