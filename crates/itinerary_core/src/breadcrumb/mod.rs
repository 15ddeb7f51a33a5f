//! Breadcrumb resolution.
//!
//! # Responsibility
//! - Parse URL-like paths of nested numeric ids.
//! - Resolve them into chains of live entity references for breadcrumb
//!   rendering and existence checks.

pub mod path;
pub mod trail;

pub use path::{BreadcrumbPath, LeafSegment, PathParseError, PendingChild};
pub use trail::{resolve, Breadcrumb, LeafRef, ResolveError, Trail};
