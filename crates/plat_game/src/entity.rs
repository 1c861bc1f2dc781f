//! Every object in the level is an `Entity`: a box plus a tagged payload.
//! Behaviour lives with the payload types; this module only knows how to
//! build entities and answer which capabilities each kind has.

use crate::config::GameConfig;
use crate::enemy::Goomba;
use crate::fireball::Fireball;
use crate::items::{BlockContents, Coin, PowerUp, PowerUpKind, QuestionBlock};
use crate::particle::Particle;
use plat_core::geometry::Aabb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    Ground,
    Brick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKind {
    Platform { kind: PlatformKind },
    /// Scenery only; nothing collides with it.
    Pipe,
    Goomba(Goomba),
    Coin(Coin),
    PowerUp(PowerUp),
    QuestionBlock(QuestionBlock),
    Fireball(Fireball),
    Particle(Particle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTag {
    Platform,
    Pipe,
    Goomba,
    Coin,
    PowerUp,
    QuestionBlock,
    Fireball,
    Particle,
}

impl EntityTag {
    /// Back-to-front paint order.
    pub const DRAW_ORDER: &'static [EntityTag] = &[
        EntityTag::Platform,
        EntityTag::Pipe,
        EntityTag::QuestionBlock,
        EntityTag::PowerUp,
        EntityTag::Goomba,
        EntityTag::Coin,
        EntityTag::Fireball,
        EntityTag::Particle,
    ];

    /// Changes state on its own every frame.
    pub fn updates(self) -> bool {
        !matches!(self, Self::Platform | Self::Pipe)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub body: Aabb,
    pub kind: EntityKind,
}

impl Entity {
    pub fn platform(body: Aabb, kind: PlatformKind) -> Self {
        Self {
            body,
            kind: EntityKind::Platform { kind },
        }
    }

    pub fn pipe(body: Aabb) -> Self {
        Self {
            body,
            kind: EntityKind::Pipe,
        }
    }

    pub fn goomba(x: f32, y: f32, config: &GameConfig) -> Self {
        let size = config.enemy.size;
        Self {
            body: Aabb::new(x, y, size, size),
            kind: EntityKind::Goomba(Goomba::new(x, &config.enemy)),
        }
    }

    pub fn coin(x: f32, y: f32, config: &GameConfig) -> Self {
        let size = config.items.coin_size;
        Self {
            body: Aabb::new(x, y, size, size),
            kind: EntityKind::Coin(Coin::new()),
        }
    }

    pub fn power_up(x: f32, y: f32, kind: PowerUpKind, config: &GameConfig) -> Self {
        let size = config.items.power_up_size;
        Self {
            body: Aabb::new(x, y, size, size),
            kind: EntityKind::PowerUp(PowerUp::new(kind, &config.items)),
        }
    }

    pub fn question_block(x: f32, y: f32, contents: BlockContents, config: &GameConfig) -> Self {
        let size = config.items.block_size;
        Self {
            body: Aabb::new(x, y, size, size),
            kind: EntityKind::QuestionBlock(QuestionBlock::new(contents)),
        }
    }

    pub fn fireball(body: Aabb, fireball: Fireball) -> Self {
        Self {
            body,
            kind: EntityKind::Fireball(fireball),
        }
    }

    /// Particles are points; only the position of the box matters.
    pub fn particle(x: f32, y: f32, particle: Particle) -> Self {
        Self {
            body: Aabb::new(x, y, 0.0, 0.0),
            kind: EntityKind::Particle(particle),
        }
    }

    pub fn tag(&self) -> EntityTag {
        match self.kind {
            EntityKind::Platform { .. } => EntityTag::Platform,
            EntityKind::Pipe => EntityTag::Pipe,
            EntityKind::Goomba(_) => EntityTag::Goomba,
            EntityKind::Coin(_) => EntityTag::Coin,
            EntityKind::PowerUp(_) => EntityTag::PowerUp,
            EntityKind::QuestionBlock(_) => EntityTag::QuestionBlock,
            EntityKind::Fireball(_) => EntityTag::Fireball,
            EntityKind::Particle(_) => EntityTag::Particle,
        }
    }

    pub fn is_solid_platform(&self) -> bool {
        matches!(self.kind, EntityKind::Platform { .. })
    }

    /// The entity has finished on its own (timed out, died, flew off) and
    /// should be swept at the end of the frame.
    pub fn is_expired(&self) -> bool {
        match &self.kind {
            EntityKind::Goomba(goomba) => !goomba.alive,
            EntityKind::Fireball(fireball) => fireball.dead,
            EntityKind::Particle(particle) => particle.is_dead(),
            _ => false,
        }
    }

    /// Advance self-driven state by one frame. Static kinds ignore this.
    pub fn update(&mut self, solids: &[Aabb], config: &GameConfig, dt: f32) {
        let gravity = config.world.gravity;
        match &mut self.kind {
            EntityKind::Platform { .. } | EntityKind::Pipe => {}
            EntityKind::Goomba(goomba) => goomba.patrol(&mut self.body, solids, &config.enemy),
            EntityKind::Coin(coin) => coin.update(dt),
            EntityKind::PowerUp(power_up) => power_up.update(
                &mut self.body,
                solids,
                gravity * config.items.mushroom_gravity_scale,
            ),
            EntityKind::QuestionBlock(block) => block.update(dt),
            EntityKind::Fireball(fireball) => {
                fireball.update(&mut self.body, solids, gravity, dt, &config.fireball)
            }
            EntityKind::Particle(particle) => particle.update(&mut self.body, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_capabilities() {
        let config = GameConfig::default();
        let pipe = Entity::pipe(Aabb::new(0.0, 0.0, 64.0, 64.0));
        assert!(!pipe.tag().updates());
        assert!(!pipe.is_solid_platform());

        let goomba = Entity::goomba(10.0, 20.0, &config);
        assert_eq!(goomba.tag(), EntityTag::Goomba);
        assert!(goomba.tag().updates());
        assert_eq!(goomba.body, Aabb::new(10.0, 20.0, 24.0, 24.0));

        let spark = Entity::particle(0.0, 0.0, Particle::hit_spark(&config.items));
        assert!(spark.tag().updates());
        assert!(!spark.is_solid_platform());
    }

    #[test]
    fn expired_reflects_payload_state() {
        let config = GameConfig::default();
        let mut goomba = Entity::goomba(10.0, 20.0, &config);
        assert!(!goomba.is_expired());
        if let EntityKind::Goomba(g) = &mut goomba.kind {
            g.alive = false;
        }
        assert!(goomba.is_expired());

        let block = Entity::question_block(0.0, 0.0, BlockContents::Coin, &config);
        assert!(!block.is_expired());
    }

    #[test]
    fn draw_order_lists_every_tag_once() {
        let mut seen = std::collections::HashSet::new();
        for tag in EntityTag::DRAW_ORDER {
            assert!(seen.insert(*tag));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn sizes_come_from_config() {
        let config = GameConfig::default();
        let block = Entity::question_block(350.0, 470.0, BlockContents::Coin, &config);
        assert_eq!(block.body.w, 32.0);
        let coin = Entity::coin(250.0, 538.0, &config);
        assert_eq!(coin.body.w, 16.0);
        let flower = Entity::power_up(0.0, 0.0, PowerUpKind::FireFlower, &config);
        assert_eq!(flower.body.h, 24.0);
    }
}
