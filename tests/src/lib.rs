//! # Inventory Transactions Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks for execute()
//! └── src/
//!     ├── world.rs      # WorldActor: inventory, open chest, crafting grid
//!     └── integration/  # Cross-crate flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p inventory-tests
//! cargo test -p inventory-tests integration::
//! cargo bench -p inventory-tests
//! ```

pub mod integration;
