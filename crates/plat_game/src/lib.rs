//! Simulation core for a single-screen side-scrolling platformer.
//!
//! `World` owns everything: the player, the level's entities, score, lives,
//! the countdown and the game state. Drivers feed it one `InputSnapshot` and
//! a delta per frame and read back a `FrameReport`; presentation goes through
//! `World::draw` into any `plat_render::RenderSurface`.

pub mod arena;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod entity;
pub mod event;
pub mod fireball;
pub mod hud;
pub mod interaction;
pub mod items;
pub mod level;
pub mod particle;
pub mod player;
pub mod render;
pub mod replay;
pub mod world;

pub use config::GameConfig;
pub use world::{FrameReport, GameState, World};
