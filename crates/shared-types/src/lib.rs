//! # Shared Types Crate
//!
//! Item and identifier types shared across the inventory workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: slot contents, container ids and actor ids
//!   are defined once here and re-exported by the executor crate.
//! - **Air is empty**: an empty slot holds [`Item::air`], never `None`.

pub mod entities;

pub use entities::*;
