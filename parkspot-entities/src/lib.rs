#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # parkspot-entities
//!
//! Reusable, agnostic domain entities for parkspot.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod radius;
pub mod session;
pub mod spot;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
