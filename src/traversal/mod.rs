// src/traversal/mod.rs
//! Neighbor queries on `CellId`. The methods live in `neighbors`.

pub mod neighbors;
