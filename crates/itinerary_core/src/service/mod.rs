//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and model mutations into use-case APIs.
//! - Keep web/CLI callers decoupled from storage details.

pub mod journey_service;
