//! Game events.
//!
//! Interaction rules never touch score, lives or the entity list directly.
//! They send an event describing what happened; the world applies the queue
//! once all rules have run, then hands every applied event back to the
//! caller in the frame report.

use crate::items::{BlockContents, PowerUpKind};
use crate::player::PowerState;
use crate::world::GameOverReason;
use plat_core::geometry::Aabb;
use serde::Serialize;

/// Collected during the frame and drained at a fixed point.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeLossCause {
    Enemy,
    Fell,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    EnemyStomped { x: f32, y: f32 },
    EnemyBurned { x: f32, y: f32 },
    BlockHit { block: Aabb, contents: BlockContents },
    PowerUpCollected { kind: PowerUpKind, x: f32, y: f32 },
    CoinCollected { x: f32, y: f32 },
    PlayerDamaged,
    FireballLaunched,
    /// Fire was pressed while the cap was reached.
    FireballRejected,
    PowerChanged { from: PowerState, to: PowerState },
    LifeLost { remaining: u32, cause: LifeLossCause },
    GameOver { reason: GameOverReason },
    LevelComplete,
    Restarted,
}

impl GameEvent {
    /// Short name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnemyStomped { .. } => "enemy stomped",
            Self::EnemyBurned { .. } => "enemy burned",
            Self::BlockHit { .. } => "block hit",
            Self::PowerUpCollected { .. } => "power-up collected",
            Self::CoinCollected { .. } => "coin collected",
            Self::PlayerDamaged => "player damaged",
            Self::FireballLaunched => "fireball launched",
            Self::FireballRejected => "fireball rejected",
            Self::PowerChanged { .. } => "power changed",
            Self::LifeLost { .. } => "life lost",
            Self::GameOver { .. } => "game over",
            Self::LevelComplete => "level complete",
            Self::Restarted => "restarted",
        }
    }
}
