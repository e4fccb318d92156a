//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day lives in `year_YYYY/day_D.rs` and registers itself through
//! `#[derive(AutoRegisterSolver)]`; linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find every day.

pub mod utils;
pub mod year_2025;
