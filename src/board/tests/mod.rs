//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts against published perft results
//! - `make_unmake.rs` - Apply/revert correctness
//! - `edge_cases.rs` - Special positions and moves
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod proptest;
