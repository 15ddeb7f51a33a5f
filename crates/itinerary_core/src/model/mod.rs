//! Itinerary domain model.
//!
//! # Responsibility
//! - Define the journey tree: journey, country, location and leaf entities.
//! - Keep attribute groups (notes, costing, attachments) shared by value.
//!
//! # Invariants
//! - Strict ownership tree: every child belongs to exactly one parent.
//! - Entities are append-only within their parent.
//! - Ids are allocated per parent scope as the lowest free positive integer.

pub mod accommodation;
pub mod activity;
pub mod attributes;
pub mod country;
pub mod departure_ticket;
pub mod ids;
pub mod journey;
pub mod location;
pub mod visa;
