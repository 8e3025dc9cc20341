//! Terminal dashboard for the Monty Hall simulator.
//!
//! Draws the three doors as character art, the round status, a strategy
//! selector, and a win-rate gauge per strategy. Doors are picked with the
//! number keys or by clicking them.

pub mod app;
pub mod doors;
pub mod shared;
pub mod stats;
pub mod terminal;
