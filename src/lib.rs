//! Alien Invasion: a terminal Space Invaders clone.
//!
//! The library holds the simulation (`compute`) and everything around it:
//! settings, entities, scorekeeping, the high-score store and a renderer that
//! writes to any `io::Write`.  The binary owns the real terminal, the input
//! thread and the frame loop.

pub mod audio;
pub mod background;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod scoreboard;
pub mod settings;
pub mod stats;
pub mod store;
