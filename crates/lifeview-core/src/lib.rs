//! **lifeview-core** — snapshot and diff types for the lifeview client.
//!
//! This crate holds the pure, DOM-free half of the client: the [`World`]
//! grid snapshot, the per-cell [`CellState`] classification between two
//! snapshots, and the [`GameState`] payload the simulation server answers
//! with. Everything here is plain data and total functions, so it builds and
//! tests on any target.

pub mod cell;
pub mod state;
pub mod world;

pub use cell::CellState;
pub use state::GameState;
pub use world::World;
