//! Alien Invasion: a fixed-cadence arcade shooter engine.
//!
//! The library holds the whole simulation (settings, entities, fleet layout,
//! collisions, the tick orchestrator).  Drawing and input polling belong to
//! the binary.

pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod session;
pub mod settings;
pub mod stats;

pub use error::ConfigError;
pub use game::{Control, Game, InputEvent, Key, Phase, View};
pub use session::SessionContext;
pub use settings::Settings;
