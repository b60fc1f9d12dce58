pub mod core;
pub mod engine;
pub mod config;
pub mod input;
pub mod session;

pub use crate::config::GameConfig;
pub use crate::core::{Color, GameError, Grid, GridCoord, Palette};
pub use crate::session::{GameSession, SessionState};
