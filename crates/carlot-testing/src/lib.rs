//! Testing infrastructure for carlot tests.
//!
//! - `fixtures`: small reference datasets with known joins
//! - `world`: a temporary data directory with config and reference files

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
