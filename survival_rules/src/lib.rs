//! # Survival Rules
//!
//! The rules crate for the island story: which attributes a player has, how
//! far each may go, and how a state delta changes them. It knows nothing about
//! scenes or front ends.

pub mod attributes;
pub mod player;

pub use attributes::*;
pub use player::*;
