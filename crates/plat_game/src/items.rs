//! Pickups and the blocks that release them.

use crate::config::ItemTuning;
use plat_core::geometry::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    Mushroom,
    FireFlower,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockContents {
    PowerUp(PowerUpKind),
    Coin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coin {
    /// Drives the spin animation.
    pub phase: f32,
}

impl Coin {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.phase += dt * 8.0;
    }

    /// Horizontal squash of the spinning coin, in 0.7..=1.0.
    pub fn spin_scale(&self) -> f32 {
        self.phase.sin().abs() * 0.3 + 0.7
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl PowerUp {
    /// Mushrooms pop upward and slide right; everything else sits still.
    pub fn new(kind: PowerUpKind, tuning: &ItemTuning) -> Self {
        let (vel_x, vel_y) = match kind {
            PowerUpKind::Mushroom => (tuning.mushroom_speed, -tuning.mushroom_pop_speed),
            PowerUpKind::FireFlower | PowerUpKind::Star => (0.0, 0.0),
        };
        Self {
            kind,
            vel_x,
            vel_y,
        }
    }

    pub fn update(&mut self, body: &mut Aabb, solids: &[Aabb], gravity: f32) {
        if self.kind != PowerUpKind::Mushroom {
            return;
        }

        body.x += self.vel_x;
        body.y += self.vel_y;
        self.vel_y += gravity;

        for platform in solids {
            if !body.intersects(platform) {
                continue;
            }
            if self.vel_y > 0.0 && body.y < platform.y {
                body.y = platform.y - body.h;
                self.vel_y = 0.0;
            } else if self.vel_x > 0.0 && body.x < platform.x {
                body.x = platform.x - body.w;
                self.vel_x = -self.vel_x;
            } else if self.vel_x < 0.0 && body.x > platform.x {
                body.x = platform.right();
                self.vel_x = -self.vel_x;
            }
        }
    }
}

/// A block that releases its contents once when struck from below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionBlock {
    pub contents: BlockContents,
    pub used: bool,
    pub phase: f32,
}

impl QuestionBlock {
    pub fn new(contents: BlockContents) -> Self {
        Self {
            contents,
            used: false,
            phase: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.phase += dt * 4.0;
    }

    /// Returns the contents on the first hit and `None` ever after.
    pub fn hit(&mut self) -> Option<BlockContents> {
        if self.used {
            return None;
        }
        self.used = true;
        Some(self.contents)
    }

    /// Pulsing brightness of an unused block, in 0.6..=1.0.
    pub fn glow(&self) -> f32 {
        self.phase.sin() * 0.2 + 0.8
    }
}
