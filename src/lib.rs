//! Side-scrolling tile platformer: simulation core.
//!
//! The library is terminal-free.  A host samples input into an
//! [`input::InputSource`], calls [`compute::tick`] once per frame, and reads
//! the resulting [`entities::GameState`] to draw it.

pub mod combat;
pub mod compute;
pub mod config;
pub mod effects;
pub mod enemy;
pub mod entities;
pub mod grid;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
