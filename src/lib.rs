//! A side-scrolling character whose movement is gated by regulated stats:
//! stamina, breath, fullness and happiness, with happiness feeding levels.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod hazards;
pub mod movement;
pub mod stats;
pub mod ui;
